//! Dynamic pin allocation for config-driven hardware setup
//!
//! Provides a way to get GPIO pins by number at runtime, so the pin
//! assignment in `machine.toml` decides which GPIO drives what.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::{Peri, Peripherals};

use beamwave_core::config::{PinConfig, GPIO_COUNT};

use crate::gpio::{RpInput, RpOutput};

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
}

/// Pin bank that holds all GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

impl PinBank {
    /// Create a new pin bank from peripherals
    ///
    /// Takes ownership of all GPIO pins. After this call, pins must be
    /// obtained through [`PinBank::take`].
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin(pin_num))?
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }

    /// Take a pin and configure it as an input
    ///
    /// The internal pull-up is enabled when the config asks for it; the
    /// break-beam receivers rely on it for their idle-high level.
    pub fn input(&mut self, config: PinConfig) -> Result<RpInput, PinError> {
        let pull = if config.pull_up { Pull::Up } else { Pull::None };
        let pin = self.take(config.pin)?;
        Ok(RpInput::new(Input::new(pin, pull)))
    }

    /// Take a pin and configure it as an output, initially low
    pub fn output(&mut self, config: PinConfig) -> Result<RpOutput, PinError> {
        let pin = self.take(config.pin)?;
        Ok(RpOutput::new(Output::new(pin, Level::Low)))
    }
}
