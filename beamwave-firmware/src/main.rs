//! Beamwave - Contactless Switch Firmware
//!
//! Main firmware binary for RP2040-based boards. Two IR break-beam
//! receivers are polled on a fixed cadence; a single or double wave in
//! front of a beam switches the load of that channel.
//!
//! The polling loop is blocking and never returns. It runs inside the
//! embassy executor only so the executor owns startup.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use beamwave_core::config::MachineConfig;
use beamwave_core::controller::Controller;
use beamwave_hal_rp2040::PinBank;

use crate::board::Board;

/// Embedded configuration (compiled into firmware)
/// Edit machine.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../machine.toml");

mod board;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Beamwave firmware starting...");

    // Clocks, PLLs and the time driver are brought up here
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Timing: debounce {}ms, edge pad {}ms, window {}ms",
        config.timing.debounce_ms, config.timing.edge_pad_ms, config.timing.window_timeout_ms
    );

    let mut bank = PinBank::new(p);
    let board = unwrap!(Board::assemble(&mut bank, &config));
    info!("Outputs released, both channels idle");

    let mut controller = Controller::new(config.timing, board.lamp, board.fan, Delay);
    controller.run()
}

/// Parse the embedded machine.toml
///
/// The build script already rejects an invalid file, so the fallback to
/// the built-in reference wiring only guards against a stale build.
fn load_config() -> MachineConfig {
    match MachineConfig::from_toml(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using reference wiring");
            MachineConfig::default()
        }
    }
}
