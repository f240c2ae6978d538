//! GPIO switched output
//!
//! On/off control of a relay coil driver or an LED through one GPIO pin.

use beamwave_hal::OutputPin;

/// On/off output on a GPIO pin
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioSwitch<P> {
    pin: P,
    /// If true, ON = pin LOW
    inverted: bool,
    /// Current logical state (true = on)
    on: bool,
}

impl<P: OutputPin> GpioSwitch<P> {
    /// Create a new switched output, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the load is ON when the pin is LOW (active-low relay boards)
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut switch = Self {
            pin,
            inverted,
            on: false,
        };
        switch.set_on(false);
        switch
    }

    /// Create a new switch with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new switch with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Turn the load on or off
    pub fn set_on(&mut self, on: bool) {
        self.on = on;

        if on != self.inverted {
            // Normal: on=true, inverted=false → high
            // Inverted: on=true, inverted=true → low
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    /// Check if the load is on
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Access the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}
