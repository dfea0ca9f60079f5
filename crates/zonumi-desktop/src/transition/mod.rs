//! Time-driven transitions
//!
//! Transitions take explicit `now_ms` timestamps so they can be driven by
//! `performance.now()` in the browser and by plain numbers in tests.

mod boot;

pub use boot::{BootPhase, BootSequence, BootTiming, BOOT_PROGRESS_STEPS};
