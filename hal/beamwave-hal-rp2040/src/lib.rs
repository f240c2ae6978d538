//! RP2040-specific HAL for the contactless switch firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `beamwave-hal` traits, plus config-driven pin allocation:
//!
//! - GPIO input/output adapters over `embassy-rp`
//! - Pin bank handing out GPIOs by number from `machine.toml`

#![no_std]

pub mod gpio;
pub mod pins;

// Re-export shared traits from beamwave-hal for convenience
pub use beamwave_hal::{InputPin, OutputPin};
pub use gpio::{RpInput, RpOutput};
pub use pins::{PinBank, PinError};
