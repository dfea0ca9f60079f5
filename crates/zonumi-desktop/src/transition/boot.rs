//! Boot overlay sequence

use serde::Serialize;

/// Number of cells in the boot progress bar
pub const BOOT_PROGRESS_STEPS: u32 = 14;

/// Shortest time one progress cell takes to fill
const MIN_STEP_MS: f64 = 45.0;

/// Boot overlay phase, ordered by progression
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BootPhase {
    /// Overlay shown, progress filling
    Booting,
    /// Overlay fading out
    Transitioning,
    /// Overlay gone for the rest of the session
    Ready,
}

/// Phase durations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BootTiming {
    pub boot_ms: f64,
    pub transition_ms: f64,
}

impl BootTiming {
    /// Full-length animation
    pub const STANDARD: BootTiming = BootTiming {
        boot_ms: 2400.0,
        transition_ms: 1050.0,
    };

    /// Shortened animation for `prefers-reduced-motion`
    pub const REDUCED: BootTiming = BootTiming {
        boot_ms: 450.0,
        transition_ms: 150.0,
    };

    /// Timing for the platform motion preference
    pub fn for_motion(reduced_motion: bool) -> Self {
        if reduced_motion {
            Self::REDUCED
        } else {
            Self::STANDARD
        }
    }

    /// Duration of one progress cell
    pub fn step_ms(&self) -> f64 {
        (self.boot_ms / BOOT_PROGRESS_STEPS as f64).floor().max(MIN_STEP_MS)
    }
}

/// Boot overlay state machine: `Booting -> Transitioning -> Ready`
#[derive(Clone, Debug)]
pub struct BootSequence {
    start_ms: f64,
    timing: BootTiming,
    phase: BootPhase,
}

impl BootSequence {
    /// Start booting at `now_ms`
    pub fn start(now_ms: f64, reduced_motion: bool) -> Self {
        let timing = BootTiming::for_motion(reduced_motion);
        tracing::debug!(?timing, "boot started");
        Self {
            start_ms: now_ms,
            timing,
            phase: BootPhase::Booting,
        }
    }

    /// Timing in use
    #[inline]
    pub fn timing(&self) -> BootTiming {
        self.timing
    }

    /// Last phase computed by [`update`](Self::update)
    #[inline]
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Advance to `now_ms`; phases never go backwards
    pub fn update(&mut self, now_ms: f64) -> BootPhase {
        let elapsed = now_ms - self.start_ms;
        let next = if elapsed >= self.timing.boot_ms + self.timing.transition_ms {
            BootPhase::Ready
        } else if elapsed >= self.timing.boot_ms {
            BootPhase::Transitioning
        } else {
            BootPhase::Booting
        };

        if next > self.phase {
            tracing::debug!(from = ?self.phase, to = ?next, "boot phase");
            self.phase = next;
        }
        self.phase
    }

    /// Filled progress cells at `now_ms`
    pub fn progress(&self, now_ms: f64) -> u32 {
        if self.phase == BootPhase::Ready {
            return BOOT_PROGRESS_STEPS;
        }
        let elapsed = (now_ms - self.start_ms).max(0.0);
        let steps = (elapsed / self.timing.step_ms()).floor() as u32;
        steps.min(BOOT_PROGRESS_STEPS)
    }

    /// Whether the overlay should still be rendered
    #[inline]
    pub fn is_overlay_visible(&self) -> bool {
        self.phase != BootPhase::Ready
    }
}
