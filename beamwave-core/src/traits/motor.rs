//! DC motor drive modes

/// Drive mode of a two-input H-bridge (L298N, TB6612, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorDrive {
    /// Both inputs low, motor spins down freely
    #[default]
    Coast,
    /// IN1 high, IN2 low
    Forward,
    /// IN1 low, IN2 high
    Reverse,
    /// Both inputs high, motor terminals shorted
    Brake,
}

impl MotorDrive {
    /// Input levels `(in1, in2)` for this drive mode
    pub fn input_levels(&self) -> (bool, bool) {
        match self {
            MotorDrive::Coast => (false, false),
            MotorDrive::Forward => (true, false),
            MotorDrive::Reverse => (false, true),
            MotorDrive::Brake => (true, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_levels() {
        assert_eq!(MotorDrive::Coast.input_levels(), (false, false));
        assert_eq!(MotorDrive::Forward.input_levels(), (true, false));
        assert_eq!(MotorDrive::Reverse.input_levels(), (false, true));
        assert_eq!(MotorDrive::Brake.input_levels(), (true, true));
    }
}
