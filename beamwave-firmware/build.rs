//! Build script for beamwave-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates machine.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use beamwave_core::config::{ConfigError, MachineConfig, ParseError, MAX_LABEL_LEN};

/// Sections the firmware parser understands, with their keys
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("timing", &["debounce_ms", "edge_pad_ms", "window_timeout_ms"]),
    (
        "channel.lamp",
        &["label", "sensor_pin", "relay_pin", "indicator_pin"],
    ),
    (
        "channel.fan",
        &[
            "label",
            "sensor_pin",
            "relay_pin",
            "motor_in1_pin",
            "motor_in2_pin",
        ],
    ),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate machine.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=machine.toml");

    let config_path = Path::new("machine.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: machine.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds machine.toml for its pin and timing setup.  ║\n\
            ║  Please create one in the beamwave-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read machine.toml", &e.to_string()),
    };

    // Syntax first, with the full TOML parser for good diagnostics
    let document: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail("Invalid TOML syntax in machine.toml", &e.to_string()),
    };

    let errors = check_known_keys(&document);
    if !errors.is_empty() {
        fail("Unknown entries in machine.toml", &errors.join("\n"));
    }

    // Then the exact parser and validation the firmware runs at boot
    if let Err(e) = MachineConfig::from_toml(&content) {
        fail("Invalid configuration in machine.toml", &describe(e));
    }

    println!("cargo:warning=machine.toml validated successfully");
}

/// List sections and keys the firmware parser would reject
fn check_known_keys(document: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(root) = document.as_table() else {
        return errors;
    };

    for (name, value) in root {
        match (name.as_str(), value) {
            ("timing", toml::Value::Table(t)) => check_table("timing", t, &mut errors),
            ("channel", toml::Value::Table(channels)) => {
                for (channel, value) in channels {
                    let section = format!("channel.{}", channel);
                    match value {
                        toml::Value::Table(t) => check_table(&section, t, &mut errors),
                        _ => errors.push(format!("[{}] must be a table", section)),
                    }
                }
            }
            _ => errors.push(format!("Unknown entry '{}'", name)),
        }
    }

    errors
}

fn check_table(section: &str, table: &toml::Table, errors: &mut Vec<String>) {
    let Some((_, keys)) = KNOWN_KEYS.iter().find(|(name, _)| *name == section) else {
        errors.push(format!("Unknown section [{}]", section));
        return;
    };

    for key in table.keys() {
        if !keys.contains(&key.as_str()) {
            errors.push(format!("[{}] unknown key '{}'", section, key));
        }
    }
}

fn describe(error: ConfigError) -> String {
    match error {
        ConfigError::ZeroDebounce => "timing.debounce_ms must be greater than 0".into(),
        ConfigError::TimeoutNotAfterDebounce => {
            "timing.window_timeout_ms must be greater than debounce_ms".into()
        }
        ConfigError::PinConflict(pin) => format!("gpio{} is assigned more than once", pin),
        ConfigError::Parse(ParseError::InvalidSection(line)) => {
            format!("line {}: unknown section header", line)
        }
        ConfigError::Parse(ParseError::UnknownKey(line)) => format!("line {}: unknown key", line),
        ConfigError::Parse(ParseError::InvalidValue(line)) => {
            format!("line {}: invalid value", line)
        }
        ConfigError::Parse(ParseError::InvalidPin(line)) => {
            format!("line {}: pin must look like \"[!^]gpioN\" with N < 30", line)
        }
        ConfigError::Parse(ParseError::LabelTooLong(line)) => {
            format!(
                "line {}: label longer than {} characters",
                line, MAX_LABEL_LEN
            )
        }
    }
}

/// Abort the build with a boxed error message
fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
