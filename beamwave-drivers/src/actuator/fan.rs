//! Fan channel: supply relay plus H-bridge direction
//!
//! | Action   | Relay | Motor   |
//! |----------|-------|---------|
//! | Single   | on    | Reverse |
//! | Double   | off   | Forward |
//! | released | off   | Coast   |
//!
//! "on" is the logical relay state; wire an active-low relay board with an
//! inverted pin (`!gpioN`) to keep the table valid.

use beamwave_core::gesture::Action;
use beamwave_core::traits::{GestureActuator, MotorDrive};
use beamwave_hal::OutputPin;

use crate::motor::HBridge;
use crate::output::GpioSwitch;

/// Relay and DC motor driven by one gesture channel
pub struct FanActuator<R, A, B> {
    relay: GpioSwitch<R>,
    motor: HBridge<A, B>,
}

impl<R: OutputPin, A: OutputPin, B: OutputPin> FanActuator<R, A, B> {
    /// Create the actuator; relay off, motor coasting
    pub fn new(relay: GpioSwitch<R>, motor: HBridge<A, B>) -> Self {
        Self { relay, motor }
    }

    /// Supply relay
    pub fn relay(&self) -> &GpioSwitch<R> {
        &self.relay
    }

    /// Motor driver
    pub fn motor(&self) -> &HBridge<A, B> {
        &self.motor
    }
}

impl<R: OutputPin, A: OutputPin, B: OutputPin> GestureActuator for FanActuator<R, A, B> {
    fn apply(&mut self, action: Action) {
        match action {
            Action::Single => {
                self.relay.set_on(true);
                self.motor.drive(MotorDrive::Reverse);
            }
            Action::Double => {
                self.relay.set_on(false);
                self.motor.drive(MotorDrive::Forward);
            }
            Action::Ambiguous => {}
        }
    }

    fn release(&mut self) {
        self.motor.coast();
        self.relay.set_on(false);
    }
}
