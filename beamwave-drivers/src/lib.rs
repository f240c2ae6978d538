//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in beamwave-core, written against the beamwave-hal GPIO traits:
//!
//! - IR break-beam receiver
//! - GPIO switched outputs (relays, indicator LEDs)
//! - Two-input H-bridge motor driver (L298N)
//! - Channel actuators combining the above (lamp, fan)

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod motor;
pub mod output;
pub mod sensor;

#[cfg(test)]
pub(crate) mod mock;
