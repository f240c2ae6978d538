//! Two-input H-bridge driver
//!
//! Drives a brushed DC motor through the IN1/IN2 inputs of an L298N (or any
//! bridge with the same truth table). Speed is not controlled; the enable
//! input is expected to be strapped high.
//!
//! | Drive   | IN1  | IN2  |
//! |---------|------|------|
//! | Coast   | low  | low  |
//! | Forward | high | low  |
//! | Reverse | low  | high |
//! | Brake   | high | high |

use beamwave_core::traits::MotorDrive;
use beamwave_hal::{Level, OutputPin};

/// H-bridge on two GPIO outputs
///
/// Each input can be inverted for boards that drive the bridge through an
/// inverting buffer. The table above is in logical levels.
pub struct HBridge<A, B> {
    in1: A,
    in2: B,
    /// If true, IN1 logical high = pin LOW
    in1_inverted: bool,
    /// If true, IN2 logical high = pin LOW
    in2_inverted: bool,
    drive: MotorDrive,
}

impl<A: OutputPin, B: OutputPin> HBridge<A, B> {
    /// Create a driver with active-high inputs, initially coasting
    pub fn new(in1: A, in2: B) -> Self {
        Self::with_inversion(in1, false, in2, false)
    }

    /// Create a driver with per-input inversion, initially coasting
    pub fn with_inversion(in1: A, in1_inverted: bool, in2: B, in2_inverted: bool) -> Self {
        let mut bridge = Self {
            in1,
            in2,
            in1_inverted,
            in2_inverted,
            drive: MotorDrive::Coast,
        };
        bridge.drive(MotorDrive::Coast);
        bridge
    }

    /// Apply a drive mode
    pub fn drive(&mut self, drive: MotorDrive) {
        let (in1, in2) = drive.input_levels();

        // Lower inputs before raising any: Forward→Reverse passes through
        // Coast, never Brake
        if !in1 {
            self.in1.set_level(Level::from(self.in1_inverted));
        }
        if !in2 {
            self.in2.set_level(Level::from(self.in2_inverted));
        }
        if in1 {
            self.in1.set_level(Level::from(!self.in1_inverted));
        }
        if in2 {
            self.in2.set_level(Level::from(!self.in2_inverted));
        }

        self.drive = drive;
    }

    /// Let the motor spin down freely
    pub fn coast(&mut self) {
        self.drive(MotorDrive::Coast);
    }

    /// Current drive mode
    pub fn current(&self) -> MotorDrive {
        self.drive
    }

    /// Access the input pins
    pub fn pins(&self) -> (&A, &B) {
        (&self.in1, &self.in2)
    }
}
