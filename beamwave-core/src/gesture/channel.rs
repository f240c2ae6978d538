//! Gesture channel state machine
//!
//! One channel owns the edge detector, the wave window and the actuator
//! for a single break-beam sensor. It is advanced exactly once per
//! controller tick:
//!
//! ```text
//!            break edge               break edge
//!   Idle ─────────────────▶ Counting(1) ──────────▶ Counting(n+1)
//!    ▲                          │                        │
//!    └──── timeout: Action(n) ──┴────────────────────────┘
//! ```

use super::edge::{Edge, EdgeDetector};
use super::window::WaveWindow;
use crate::config::GestureTiming;
use crate::traits::GestureActuator;

/// Identifies one of the two gesture channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelId {
    /// First sensor (lamp relay and indicator on the reference board)
    One,
    /// Second sensor (fan relay and motor driver on the reference board)
    Two,
}

/// Action resolved when a gesture window closes
///
/// [`Action::Ambiguous`] is the "no action" outcome: the window closed but
/// the gesture maps to no output change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Exactly one wave in the window
    Single,
    /// Exactly two waves in the window
    Double,
    /// Three or more waves; no action, the outputs stay as they are
    Ambiguous,
}

impl Action {
    /// Resolve a closed window's wave count
    pub fn from_wave_count(count: u32) -> Self {
        match count {
            1 => Action::Single,
            2 => Action::Double,
            _ => Action::Ambiguous,
        }
    }

    /// Check if this action changes the outputs
    pub fn is_effective(&self) -> bool {
        !matches!(self, Action::Ambiguous)
    }
}

/// Externally visible channel state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureState {
    /// No gesture in progress
    Idle,
    /// Window open with this many waves
    Counting(u32),
}

/// Wave gesture state machine for one sensor
pub struct GestureChannel<A> {
    id: ChannelId,
    edges: EdgeDetector,
    window: WaveWindow,
    last_edge: Edge,
    actuator: A,
}

impl<A: GestureActuator> GestureChannel<A> {
    /// Create an idle channel and drive its outputs to the power-on state
    pub fn new(id: ChannelId, timing: &GestureTiming, mut actuator: A) -> Self {
        actuator.release();
        Self {
            id,
            edges: EdgeDetector::new(),
            window: WaveWindow::new(timing.window_timeout_ms),
            last_edge: Edge::Steady,
            actuator,
        }
    }

    /// Feed one sample and advance the window by `dt_ms`
    ///
    /// A break edge is registered before the timeout check, so a wave that
    /// arrives on the tick the window would have closed re-arms it instead.
    /// Returns the action fired by this tick, if the window closed.
    pub fn advance(&mut self, sample: bool, dt_ms: u32) -> Option<Action> {
        self.last_edge = self.edges.classify(sample);
        if self.last_edge == Edge::Break {
            self.window.record_wave();
        }

        let action = self.window.advance(dt_ms).map(Action::from_wave_count)?;
        if action.is_effective() {
            self.actuator.apply(action);
        }
        Some(action)
    }

    /// Channel identifier
    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Current state
    pub fn state(&self) -> GestureState {
        match self.window.count() {
            0 => GestureState::Idle,
            n => GestureState::Counting(n),
        }
    }

    /// Check if no gesture is in progress
    pub fn is_idle(&self) -> bool {
        self.window.is_idle()
    }

    /// Waves counted in the open window
    pub fn wave_count(&self) -> u32 {
        self.window.count()
    }

    /// Time since the most recent wave (ms), 0 when idle
    pub fn elapsed_ms(&self) -> u32 {
        self.window.elapsed_ms()
    }

    /// Edge classification of the latest `advance` call
    pub fn last_edge(&self) -> Edge {
        self.last_edge
    }

    /// Last sample seen
    pub fn previous_sample(&self) -> bool {
        self.edges.previous()
    }

    /// Access the actuator
    pub fn actuator(&self) -> &A {
        &self.actuator
    }
}
