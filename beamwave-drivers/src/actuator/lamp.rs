//! Lamp channel: load relay plus indicator LED
//!
//! | Action   | Relay | Indicator |
//! |----------|-------|-----------|
//! | Single   | on    | off       |
//! | Double   | off   | on        |
//! | released | off   | off       |

use beamwave_core::gesture::Action;
use beamwave_core::traits::GestureActuator;
use beamwave_hal::OutputPin;

use crate::output::GpioSwitch;

/// Relay and indicator LED driven by one gesture channel
pub struct LampActuator<R, I> {
    relay: GpioSwitch<R>,
    indicator: GpioSwitch<I>,
}

impl<R: OutputPin, I: OutputPin> LampActuator<R, I> {
    /// Create the actuator; both outputs start off
    pub fn new(relay: GpioSwitch<R>, indicator: GpioSwitch<I>) -> Self {
        Self { relay, indicator }
    }

    /// Load relay
    pub fn relay(&self) -> &GpioSwitch<R> {
        &self.relay
    }

    /// Indicator LED
    pub fn indicator(&self) -> &GpioSwitch<I> {
        &self.indicator
    }
}

impl<R: OutputPin, I: OutputPin> GestureActuator for LampActuator<R, I> {
    fn apply(&mut self, action: Action) {
        match action {
            Action::Single => {
                self.relay.set_on(true);
                self.indicator.set_on(false);
            }
            Action::Double => {
                self.relay.set_on(false);
                self.indicator.set_on(true);
            }
            Action::Ambiguous => {}
        }
    }

    fn release(&mut self) {
        self.relay.set_on(false);
        self.indicator.set_on(false);
    }
}
