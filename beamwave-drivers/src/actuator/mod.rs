//! Gesture channel actuators
//!
//! Each actuator maps the gesture actions of one channel onto its outputs.

pub mod fan;
pub mod lamp;

pub use fan::FanActuator;
pub use lamp::LampActuator;
