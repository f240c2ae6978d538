//! Beamwave Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that the gesture
//! drivers are written against. Chip-specific HALs implement them, so the
//! same driver code runs on the RP2040 board and under host unit tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (beamwave-drivers)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  beamwave-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ beamwave-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, Level, OutputPin};
