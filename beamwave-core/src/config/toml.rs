//! Minimal TOML parser for `machine.toml`
//!
//! Handles only the subset the firmware configuration needs and never
//! allocates, so it runs on the target as well as in the build script.
//!
//! Supported features:
//! - Key = value pairs (string, integer)
//! - `[timing]`, `[channel.lamp]` and `[channel.fan]` section headers
//! - Comments (# ...)
//!
//! Keys that are not present keep their defaults from [`MachineConfig`].

use heapless::String;

use super::hardware::{MachineConfig, PinConfig, MAX_LABEL_LEN};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header (1-based line number)
    InvalidSection(usize),
    /// Key not valid in the current section
    UnknownKey(usize),
    /// Line is not `key = value`, or the value has the wrong type
    InvalidValue(usize),
    /// Pin string not of the form `[!^]gpioN`
    InvalidPin(usize),
    /// Label longer than [`MAX_LABEL_LEN`]
    LabelTooLong(usize),
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timing,
    Lamp,
    Fan,
}

/// Parse TOML configuration into MachineConfig
///
/// The result is not validated; see [`MachineConfig::validate`].
pub fn parse_config(input: &str) -> Result<MachineConfig, ParseError> {
    let mut config = MachineConfig::default();
    let mut section = Section::Root;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = strip_comment(header)
                .strip_suffix(']')
                .ok_or(ParseError::InvalidSection(line_no))?;
            section = parse_section_header(header).ok_or(ParseError::InvalidSection(line_no))?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue(line_no))?;
        apply_value(&mut config, section, key, value, line_no)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Option<Section> {
    match header.trim() {
        "timing" => Some(Section::Timing),
        "channel.lamp" => Some(Section::Lamp),
        "channel.fan" => Some(Section::Fan),
        _ => None,
    }
}

fn apply_value(
    config: &mut MachineConfig,
    section: Section,
    key: &str,
    value: &str,
    line_no: usize,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Timing, "debounce_ms") => config.timing.debounce_ms = parse_int(value, line_no)?,
        (Section::Timing, "edge_pad_ms") => config.timing.edge_pad_ms = parse_int(value, line_no)?,
        (Section::Timing, "window_timeout_ms") => {
            config.timing.window_timeout_ms = parse_int(value, line_no)?
        }

        (Section::Lamp, "label") => config.lamp.label = parse_label(value, line_no)?,
        (Section::Lamp, "sensor_pin") => config.lamp.sensor = parse_pin(value, line_no)?,
        (Section::Lamp, "relay_pin") => config.lamp.relay = parse_pin(value, line_no)?,
        (Section::Lamp, "indicator_pin") => config.lamp.indicator = parse_pin(value, line_no)?,

        (Section::Fan, "label") => config.fan.label = parse_label(value, line_no)?,
        (Section::Fan, "sensor_pin") => config.fan.sensor = parse_pin(value, line_no)?,
        (Section::Fan, "relay_pin") => config.fan.relay = parse_pin(value, line_no)?,
        (Section::Fan, "motor_in1_pin") => config.fan.motor_in1 = parse_pin(value, line_no)?,
        (Section::Fan, "motor_in2_pin") => config.fan.motor_in2 = parse_pin(value, line_no)?,

        _ => return Err(ParseError::UnknownKey(line_no)),
    }
    Ok(())
}

/// Remove a trailing comment that is not inside a string
fn strip_comment(s: &str) -> &str {
    match s.find('#') {
        Some(pos) if s[..pos].matches('"').count() % 2 == 0 => s[..pos].trim(),
        _ => s.trim(),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = strip_comment(value);

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

fn parse_int<T: core::str::FromStr>(value: &str, line_no: usize) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue(line_no))
}

fn parse_pin(value: &str, line_no: usize) -> Result<PinConfig, ParseError> {
    PinConfig::parse(parse_string(value)).ok_or(ParseError::InvalidPin(line_no))
}

fn parse_label(value: &str, line_no: usize) -> Result<String<MAX_LABEL_LEN>, ParseError> {
    String::try_from(parse_string(value)).map_err(|_| ParseError::LabelTooLong(line_no))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GestureTiming;

    const REFERENCE: &str = r#"
# Reference wiring
[timing]
debounce_ms = 200
edge_pad_ms = 200        # pad after each wave
window_timeout_ms = 1000

[channel.lamp]
label = "desk lamp"
sensor_pin = "^gpio8"
relay_pin = "gpio9"
indicator_pin = "gpio10"

[channel.fan]
label = "fan"
sensor_pin = "^gpio11"
relay_pin = "!gpio12"
motor_in1_pin = "gpio13"
motor_in2_pin = "gpio14"
"#;

    #[test]
    fn test_parse_reference() {
        let config = parse_config(REFERENCE).unwrap();

        assert_eq!(config.timing, GestureTiming::default());
        assert_eq!(config.lamp.label.as_str(), "desk lamp");
        assert_eq!(config.lamp.sensor, PinConfig::with_pullup(8));
        assert_eq!(config.lamp.indicator, PinConfig::new(10));
        assert_eq!(config.fan.relay, PinConfig::inverted(12));
        assert_eq!(config.fan.motor_in2, PinConfig::new(14));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[timing]\nwindow_timeout_ms = 1500\n").unwrap();

        assert_eq!(config.timing.window_timeout_ms, 1500);
        assert_eq!(config.timing.debounce_ms, 200);
        assert_eq!(config.lamp, MachineConfig::default().lamp);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), MachineConfig::default());
        assert_eq!(parse_config("# nothing\n\n").unwrap(), MachineConfig::default());
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        assert_eq!(
            parse_config("[heater]\n"),
            Err(ParseError::InvalidSection(1))
        );
        assert_eq!(
            parse_config("[timing]\nspeed = 3\n"),
            Err(ParseError::UnknownKey(2))
        );
        assert_eq!(
            parse_config("[timing]\ndebounce_ms = fast\n"),
            Err(ParseError::InvalidValue(2))
        );
        assert_eq!(
            parse_config("[channel.fan]\nrelay_pin = \"pa3\"\n"),
            Err(ParseError::InvalidPin(2))
        );
        assert_eq!(
            parse_config("[channel.lamp]\nlabel = \"a label that is far too long\"\n"),
            Err(ParseError::LabelTooLong(2))
        );
        assert_eq!(
            parse_config("[timing\n"),
            Err(ParseError::InvalidSection(1))
        );
    }

    #[test]
    fn test_motor_pins_keep_inversion() {
        let config =
            parse_config("[channel.fan]\nmotor_in1_pin = \"!gpio13\"\nmotor_in2_pin = \"gpio14\"\n")
                .unwrap();

        assert_eq!(config.fan.motor_in1, PinConfig::inverted(13));
        assert_eq!(config.fan.motor_in2, PinConfig::new(14));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_root_keys_rejected() {
        assert_eq!(
            parse_config("debounce_ms = 200\n"),
            Err(ParseError::UnknownKey(1))
        );
    }

    #[test]
    fn test_from_toml_validates() {
        let doc = "[channel.fan]\nrelay_pin = \"gpio9\"\n";
        assert_eq!(
            MachineConfig::from_toml(doc),
            Err(crate::config::ConfigError::PinConflict(9))
        );
    }
}
