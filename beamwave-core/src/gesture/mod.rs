//! Per-channel wave gesture recognition
//!
//! A gesture channel turns a stream of raw beam samples into at most one
//! [`Action`] per gesture window. The logic is split into two leaf pieces
//! that the channel composes:
//!
//! - [`EdgeDetector`]: intact→broken transitions become wave events
//! - [`WaveWindow`]: counts waves until an inactivity timeout closes the window

pub mod channel;
pub mod edge;
pub mod window;

pub use channel::{Action, ChannelId, GestureChannel, GestureState};
pub use edge::{Edge, EdgeDetector};
pub use window::WaveWindow;
