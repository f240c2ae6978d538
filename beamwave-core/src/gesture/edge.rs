//! Falling-edge detection on beam samples

/// Classification of one sample against the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// No intact→broken transition this tick
    #[default]
    Steady,
    /// The beam was intact and is now broken
    Break,
}

/// Edge detector over a boolean sample stream
///
/// Samples are `true` while the beam is intact. Only the intact→broken
/// transition is reported; the beam being restored is ignored.
#[derive(Debug, Clone)]
pub struct EdgeDetector {
    previous: bool,
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDetector {
    /// Create a detector that assumes the beam starts intact
    pub const fn new() -> Self {
        Self { previous: true }
    }

    /// Classify `sample` and remember it for the next call
    pub fn classify(&mut self, sample: bool) -> Edge {
        let edge = if self.previous && !sample {
            Edge::Break
        } else {
            Edge::Steady
        };
        self.previous = sample;
        edge
    }

    /// Last sample seen
    pub fn previous(&self) -> bool {
        self.previous
    }
}
