//! Board-agnostic core logic for the contactless switching firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (beam sensor, gesture actuator)
//! - Per-channel gesture state machine (edge detection, wave window)
//! - Two-channel polling controller
//! - Configuration types and the `machine.toml` parser

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod gesture;
pub mod traits;
