//! Gesture actuator trait

use crate::gesture::Action;

/// Output stage driven by a gesture channel
///
/// Every action is applied as a full "set to defined state", never as a
/// toggle, so applying the same action twice is the same as applying it once.
pub trait GestureActuator {
    /// Drive the outputs to the state associated with `action`
    ///
    /// [`Action::Ambiguous`] must leave the outputs untouched.
    fn apply(&mut self, action: Action);

    /// Drive the outputs to their power-on state
    fn release(&mut self);
}
