//! Sensor implementations

pub mod ir_beam;

pub use ir_beam::IrBeamSensor;
