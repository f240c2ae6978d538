//! Hardware abstraction traits
//!
//! These traits define the interface between the gesture logic
//! and hardware-specific implementations.

pub mod actuator;
pub mod motor;
pub mod sensor;

pub use actuator::GestureActuator;
pub use motor::MotorDrive;
pub use sensor::BeamSensor;
