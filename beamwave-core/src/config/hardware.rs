//! Hardware configuration types
//!
//! These types define the pin assignment of both gesture channels. The
//! defaults follow the reference wiring: sensor 1, relay 1 and the external
//! LED on GPIO8-10, sensor 2, relay 2 and the L298N inputs on GPIO11-14.

use heapless::{FnvIndexSet, String};

use super::types::{ConfigError, GestureTiming};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Number of GPIOs a pin string may name (RP2040: 0-29)
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }

    /// Parse a pin string
    ///
    /// Supports formats:
    /// - "gpio11" -> pin 11
    /// - "!gpio12" -> pin 12, inverted (active-low)
    /// - "^gpio8" -> pin 8, pull-up enabled
    /// - "^!gpio8" / "!^gpio8" -> both
    pub fn parse(s: &str) -> Option<Self> {
        let mut rest = s.trim();
        let mut config = PinConfig::default();

        loop {
            if let Some(r) = rest.strip_prefix('!') {
                config.inverted = true;
                rest = r;
            } else if let Some(r) = rest.strip_prefix('^') {
                config.pull_up = true;
                rest = r;
            } else {
                break;
            }
        }

        let pin: u8 = rest.strip_prefix("gpio")?.parse().ok()?;
        if pin >= GPIO_COUNT {
            return None;
        }

        config.pin = pin;
        Some(config)
    }
}

/// Channel with a relay and an indicator LED
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampHwConfig {
    /// Label used in logs
    pub label: String<MAX_LABEL_LEN>,
    /// IR break-beam receiver
    pub sensor: PinConfig,
    /// Load relay
    pub relay: PinConfig,
    /// External indicator LED
    pub indicator: PinConfig,
}

impl Default for LampHwConfig {
    fn default() -> Self {
        Self {
            label: label("lamp"),
            sensor: PinConfig::with_pullup(8),
            relay: PinConfig::new(9),
            indicator: PinConfig::new(10),
        }
    }
}

/// Channel with a relay and an H-bridge motor driver
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FanHwConfig {
    /// Label used in logs
    pub label: String<MAX_LABEL_LEN>,
    /// IR break-beam receiver
    pub sensor: PinConfig,
    /// Motor supply relay
    pub relay: PinConfig,
    /// H-bridge IN1
    pub motor_in1: PinConfig,
    /// H-bridge IN2
    pub motor_in2: PinConfig,
}

impl Default for FanHwConfig {
    fn default() -> Self {
        Self {
            label: label("fan"),
            sensor: PinConfig::with_pullup(11),
            relay: PinConfig::new(12),
            motor_in1: PinConfig::new(13),
            motor_in2: PinConfig::new(14),
        }
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MachineConfig {
    /// Timing shared by both channels
    pub timing: GestureTiming,
    /// Channel one
    pub lamp: LampHwConfig,
    /// Channel two
    pub fan: FanHwConfig,
}

impl MachineConfig {
    /// Parse and validate a `machine.toml` document
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config = super::toml::parse_config(input)?;
        config.validate()?;
        Ok(config)
    }

    /// All configured pins, in wiring order
    pub fn pins(&self) -> [PinConfig; 7] {
        [
            self.lamp.sensor,
            self.lamp.relay,
            self.lamp.indicator,
            self.fan.sensor,
            self.fan.relay,
            self.fan.motor_in1,
            self.fan.motor_in2,
        ]
    }

    /// Check timing and that no GPIO is used twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;

        let mut used: FnvIndexSet<u8, 8> = FnvIndexSet::new();
        for pin in self.pins() {
            match used.insert(pin.pin) {
                Ok(true) => {}
                _ => return Err(ConfigError::PinConflict(pin.pin)),
            }
        }
        Ok(())
    }
}

/// Built-in label, empty if it does not fit
fn label(s: &str) -> String<MAX_LABEL_LEN> {
    String::try_from(s).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin() {
        assert_eq!(PinConfig::parse("gpio11"), Some(PinConfig::new(11)));
        assert_eq!(PinConfig::parse("!gpio12"), Some(PinConfig::inverted(12)));
        assert_eq!(PinConfig::parse("^gpio4"), Some(PinConfig::with_pullup(4)));
        assert_eq!(PinConfig::parse("  gpio0 "), Some(PinConfig::new(0)));
        assert_eq!(PinConfig::parse("gpio29"), Some(PinConfig::new(29)));

        let both = PinConfig::parse("^!gpio8").unwrap();
        assert!(both.inverted && both.pull_up);
        assert_eq!(PinConfig::parse("!^gpio8"), Some(both));

        // Invalid
        assert_eq!(PinConfig::parse("gpio30"), None);
        assert_eq!(PinConfig::parse("pin11"), None);
        assert_eq!(PinConfig::parse("gpio"), None);
        assert_eq!(PinConfig::parse(""), None);
    }

    #[test]
    fn test_default_wiring() {
        let config = MachineConfig::default();

        assert_eq!(config.lamp.label.as_str(), "lamp");
        assert_eq!(config.fan.label.as_str(), "fan");
        assert!(config.lamp.sensor.pull_up);
        assert!(config.fan.sensor.pull_up);

        let numbers: [u8; 7] = config.pins().map(|p| p.pin);
        assert_eq!(numbers, [8, 9, 10, 11, 12, 13, 14]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_label_fits_or_is_empty() {
        assert_eq!(label("lamp").as_str(), "lamp");
        assert_eq!(label("sixteen chars ok").len(), MAX_LABEL_LEN);
        assert!(label("seventeen chars!!").is_empty());
    }

    #[test]
    fn test_pin_conflict() {
        let mut config = MachineConfig::default();
        config.fan.motor_in2 = PinConfig::new(9);

        assert_eq!(config.validate(), Err(ConfigError::PinConflict(9)));
    }

    #[test]
    fn test_validate_checks_timing() {
        let mut config = MachineConfig::default();
        config.timing.debounce_ms = 0;

        assert_eq!(config.validate(), Err(ConfigError::ZeroDebounce));
    }
}
