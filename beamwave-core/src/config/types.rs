//! Gesture timing configuration and validation errors

use super::toml::ParseError;

/// Default polling tick and debounce gap (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// Default extra pause after a registered wave (ms)
pub const DEFAULT_EDGE_PAD_MS: u32 = 200;

/// Default inactivity timeout closing a gesture window (ms)
pub const DEFAULT_WINDOW_TIMEOUT_MS: u32 = 1000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Polling tick of zero would never advance a window
    ZeroDebounce,
    /// Window timeout must be longer than one polling tick
    TimeoutNotAfterDebounce,
    /// The same GPIO is assigned to more than one function
    PinConflict(u8),
    /// The configuration text could not be parsed
    Parse(ParseError),
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::Parse(e)
    }
}

/// Timing shared by both gesture channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureTiming {
    /// Polling tick; also the minimum spacing of two counted waves (ms)
    pub debounce_ms: u32,
    /// Extra blocking pause right after a wave is registered (ms)
    pub edge_pad_ms: u32,
    /// Inactivity after the latest wave that closes the window (ms)
    pub window_timeout_ms: u32,
}

impl Default for GestureTiming {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            edge_pad_ms: DEFAULT_EDGE_PAD_MS,
            window_timeout_ms: DEFAULT_WINDOW_TIMEOUT_MS,
        }
    }
}

impl GestureTiming {
    /// Check that the timing can drive a gesture window
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.window_timeout_ms <= self.debounce_ms {
            return Err(ConfigError::TimeoutNotAfterDebounce);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let timing = GestureTiming::default();
        assert_eq!(timing.debounce_ms, 200);
        assert_eq!(timing.edge_pad_ms, 200);
        assert_eq!(timing.window_timeout_ms, 1000);
        assert_eq!(timing.validate(), Ok(()));
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let timing = GestureTiming {
            debounce_ms: 0,
            ..Default::default()
        };
        assert_eq!(timing.validate(), Err(ConfigError::ZeroDebounce));
    }

    #[test]
    fn test_timeout_must_exceed_debounce() {
        let timing = GestureTiming {
            debounce_ms: 500,
            edge_pad_ms: 0,
            window_timeout_ms: 500,
        };
        assert_eq!(
            timing.validate(),
            Err(ConfigError::TimeoutNotAfterDebounce)
        );
    }
}
