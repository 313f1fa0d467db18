/// Lifecycle of the opening overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplashPhase {
    #[default]
    Visible,
    /// Fading out; still in layout until the removal delay elapses.
    Hiding,
    Removed,
}

/// Once-only dismissal guard for the opening overlay.
#[derive(Clone, Copy, Debug)]
pub struct SplashDismisser {
    phase: SplashPhase,
    removal_delay_ms: u32,
}

impl SplashDismisser {
    pub fn new(removal_delay_ms: u32) -> Self {
        Self {
            phase: SplashPhase::Visible,
            removal_delay_ms,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Starts hiding. Returns the delay after which [`Self::complete`] must be
    /// called, or `None` when the overlay was already dismissed.
    pub fn dismiss(&mut self) -> Option<u32> {
        if self.phase != SplashPhase::Visible {
            return None;
        }
        self.phase = SplashPhase::Hiding;
        Some(self.removal_delay_ms)
    }

    /// Returns `true` when this call moved the overlay out of layout.
    pub fn complete(&mut self) -> bool {
        if self.phase != SplashPhase::Hiding {
            return false;
        }
        self.phase = SplashPhase::Removed;
        true
    }
}
