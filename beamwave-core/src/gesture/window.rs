//! Wave counting window with inactivity timeout

/// Counts waves until no new wave arrives for `timeout_ms`
///
/// The timeout is measured from the most recent wave, not from the first,
/// so a steady series of waves keeps the window open.
#[derive(Debug, Clone)]
pub struct WaveWindow {
    /// Waves seen since the window opened (0 = idle)
    count: u32,
    /// Time accumulated since the last wave (ms)
    elapsed_ms: u32,
    /// Inactivity timeout (ms)
    timeout_ms: u32,
}

impl WaveWindow {
    /// Create an idle window
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            count: 0,
            elapsed_ms: 0,
            timeout_ms,
        }
    }

    /// Register a wave and re-arm the timeout
    pub fn record_wave(&mut self) {
        self.count = self.count.saturating_add(1);
        self.elapsed_ms = 0;
    }

    /// Advance time by `dt_ms`
    ///
    /// Returns the final wave count when this step closes the window. The
    /// window is idle again afterwards.
    pub fn advance(&mut self, dt_ms: u32) -> Option<u32> {
        if self.count == 0 {
            return None;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms < self.timeout_ms {
            return None;
        }

        let count = self.count;
        self.reset();
        Some(count)
    }

    /// Drop any partial gesture
    pub fn reset(&mut self) {
        self.count = 0;
        self.elapsed_ms = 0;
    }

    /// Waves counted in the open window
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Time since the most recent wave (ms)
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Check if no gesture is in progress
    pub fn is_idle(&self) -> bool {
        self.count == 0
    }
}
