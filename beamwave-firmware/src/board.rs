//! Board assembly
//!
//! Turns the pin assignment of a [`MachineConfig`] into the concrete
//! sensors and actuators of both gesture channels.

use beamwave_core::config::{FanHwConfig, LampHwConfig, MachineConfig};
use beamwave_drivers::actuator::{FanActuator, LampActuator};
use beamwave_drivers::motor::HBridge;
use beamwave_drivers::output::GpioSwitch;
use beamwave_drivers::sensor::IrBeamSensor;
use beamwave_hal_rp2040::{PinBank, PinError, RpInput, RpOutput};
use defmt::info;

pub type Sensor = IrBeamSensor<RpInput>;
pub type Lamp = LampActuator<RpOutput, RpOutput>;
pub type Fan = FanActuator<RpOutput, RpOutput, RpOutput>;

/// Hardware of both channels, ready to hand to the controller
pub struct Board {
    pub lamp: (Sensor, Lamp),
    pub fan: (Sensor, Fan),
}

impl Board {
    /// Claim every configured pin from the bank
    pub fn assemble(bank: &mut PinBank, config: &MachineConfig) -> Result<Self, PinError> {
        Ok(Self {
            lamp: lamp_channel(bank, &config.lamp)?,
            fan: fan_channel(bank, &config.fan)?,
        })
    }
}

fn lamp_channel(bank: &mut PinBank, hw: &LampHwConfig) -> Result<(Sensor, Lamp), PinError> {
    info!(
        "{}: sensor gpio{}, relay gpio{}, indicator gpio{}",
        hw.label.as_str(),
        hw.sensor.pin,
        hw.relay.pin,
        hw.indicator.pin
    );

    let sensor = IrBeamSensor::new(bank.input(hw.sensor)?, hw.sensor.inverted);
    let relay = GpioSwitch::new(bank.output(hw.relay)?, hw.relay.inverted);
    let indicator = GpioSwitch::new(bank.output(hw.indicator)?, hw.indicator.inverted);

    Ok((sensor, LampActuator::new(relay, indicator)))
}

fn fan_channel(bank: &mut PinBank, hw: &FanHwConfig) -> Result<(Sensor, Fan), PinError> {
    info!(
        "{}: sensor gpio{}, relay gpio{}, motor gpio{}/gpio{}",
        hw.label.as_str(),
        hw.sensor.pin,
        hw.relay.pin,
        hw.motor_in1.pin,
        hw.motor_in2.pin
    );

    let sensor = IrBeamSensor::new(bank.input(hw.sensor)?, hw.sensor.inverted);
    let relay = GpioSwitch::new(bank.output(hw.relay)?, hw.relay.inverted);
    let motor = HBridge::with_inversion(
        bank.output(hw.motor_in1)?,
        hw.motor_in1.inverted,
        bank.output(hw.motor_in2)?,
        hw.motor_in2.inverted,
    );

    Ok((sensor, FanActuator::new(relay, motor)))
}
