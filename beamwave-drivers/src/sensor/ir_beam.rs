//! IR break-beam receiver
//!
//! Typical receiver modules pull their output low while the beam is
//! blocked and idle high (with the input's pull-up enabled). Receivers with
//! the opposite polarity are handled with `inverted`.

use beamwave_core::traits::BeamSensor;
use beamwave_hal::InputPin;

/// Break-beam receiver on a GPIO input
pub struct IrBeamSensor<P> {
    pin: P,
    /// If true, beam intact = pin LOW
    inverted: bool,
}

impl<P: InputPin> IrBeamSensor<P> {
    /// Create a sensor
    ///
    /// # Arguments
    /// - `pin`: The input pin, already configured with its pull
    /// - `inverted`: If true, the beam is intact when the pin reads LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Create a sensor that reads HIGH while the beam is intact
    pub fn new_idle_high(pin: P) -> Self {
        Self::new(pin, false)
    }
}

impl<P: InputPin> BeamSensor for IrBeamSensor<P> {
    fn is_intact(&mut self) -> bool {
        self.pin.is_high() != self.inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockInput;

    #[test]
    fn test_idle_high_sensor() {
        let mut sensor = IrBeamSensor::new_idle_high(MockInput { high: true });
        assert!(sensor.is_intact());

        sensor.pin.high = false;
        assert!(!sensor.is_intact());
        assert!(sensor.is_broken());
    }

    #[test]
    fn test_inverted_sensor() {
        let mut sensor = IrBeamSensor::new(MockInput { high: true }, true);
        assert!(sensor.is_broken());

        sensor.pin.high = false;
        assert!(sensor.is_intact());
    }
}
