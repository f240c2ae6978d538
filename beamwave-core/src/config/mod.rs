//! Configuration types
//!
//! Board-agnostic configuration structures, parsed from the `machine.toml`
//! embedded in the firmware image.

pub mod hardware;
pub mod toml;
pub mod types;

pub use hardware::*;
pub use toml::{parse_config, ParseError};
pub use types::*;
