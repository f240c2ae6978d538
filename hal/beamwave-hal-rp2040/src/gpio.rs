//! GPIO adapters
//!
//! Wrap `embassy-rp` pins so the drivers can use them through the
//! `beamwave-hal` traits.

use embassy_rp::gpio::{Input, Output};

/// Push-pull output pin
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    /// Wrap a configured output
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl beamwave_hal::OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Digital input pin
pub struct RpInput {
    pin: Input<'static>,
}

impl RpInput {
    /// Wrap a configured input
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl beamwave_hal::InputPin for RpInput {
    fn is_high(&mut self) -> bool {
        self.pin.is_high()
    }
}
