//! Switched GPIO outputs

pub mod switch;

pub use switch::GpioSwitch;
