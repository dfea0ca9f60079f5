//! Boot overlay ticking

use crate::persistence::Storage;
use crate::transition::{BootPhase, BootSequence};
use super::DesktopEngine;

impl<S: Storage> DesktopEngine<S> {
    /// Boot overlay state, if mounted
    #[inline]
    pub fn boot(&self) -> Option<&BootSequence> {
        self.boot.as_ref()
    }

    /// Advance the boot overlay; `Ready` when nothing is booting
    pub fn tick_boot(&mut self, now_ms: f64) -> BootPhase {
        match self.boot.as_mut() {
            Some(boot) => boot.update(now_ms),
            None => BootPhase::Ready,
        }
    }

    /// Whether the boot overlay covers the desktop
    pub fn is_booting(&self) -> bool {
        self.boot.as_ref().is_some_and(BootSequence::is_overlay_visible)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DesktopConfig;
    use crate::engine::DesktopEngine;
    use crate::persistence::MemoryStorage;
    use crate::transition::BootPhase;
    use crate::window::{WindowId, WindowLayout};

    #[test]
    fn test_boot_does_not_touch_windows() {
        let mut engine = DesktopEngine::new(MemoryStorage::new());
        assert_eq!(engine.tick_boot(0.0), BootPhase::Ready);

        engine.mount(1300.0, 1_000.0);
        assert!(engine.is_booting());
        assert_eq!(engine.tick_boot(2_000.0), BootPhase::Booting);
        assert_eq!(engine.tick_boot(3_500.0), BootPhase::Transitioning);
        assert_eq!(engine.tick_boot(4_500.0), BootPhase::Ready);
        assert!(!engine.is_booting());

        assert_eq!(*engine.windows().layout(), WindowLayout::defaults());
        assert_eq!(engine.windows().active_window(), WindowId::Projects);
    }

    #[test]
    fn test_reduced_motion_boot() {
        let config = DesktopConfig {
            reduced_motion: true,
            ..Default::default()
        };
        let mut engine = DesktopEngine::with_config(MemoryStorage::new(), config);
        engine.mount(1300.0, 0.0);
        assert_eq!(engine.tick_boot(500.0), BootPhase::Transitioning);
        assert_eq!(engine.tick_boot(600.0), BootPhase::Ready);
    }
}
