//! Mock GPIO pins for testing

use beamwave_hal::{InputPin, OutputPin};

/// Output pin remembering its level
#[derive(Debug, Default)]
pub struct MockOutput {
    pub high: bool,
}

impl OutputPin for MockOutput {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin with a settable level
#[derive(Debug)]
pub struct MockInput {
    pub high: bool,
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> bool {
        self.high
    }
}
