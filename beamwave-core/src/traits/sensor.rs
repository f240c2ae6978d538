//! Break-beam sensor trait

/// Trait for infrared break-beam sensors
///
/// The idle level is "beam intact". Implementations must report the
/// current state on every call; no caching or filtering is expected here,
/// debouncing happens in the gesture state machine.
pub trait BeamSensor {
    /// Check whether the beam currently reaches the receiver
    ///
    /// Takes `&mut self` because GPIO reads typically require mutable access.
    fn is_intact(&mut self) -> bool;

    /// Check whether something is currently blocking the beam
    fn is_broken(&mut self) -> bool {
        !self.is_intact()
    }
}
