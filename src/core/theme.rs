use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::models::Theme;

/// Process-wide light/dark setting
///
/// Cloning shares the same underlying flag, so one store created at startup
/// can be handed to every worker.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    dark: Arc<AtomicBool>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            dark: Arc::new(AtomicBool::new(initial == Theme::Dark)),
        }
    }

    pub fn current(&self) -> Theme {
        if self.dark.load(Ordering::Acquire) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Flip the theme and return the new value
    pub fn toggle(&self) -> Theme {
        let was_dark = self.dark.fetch_xor(true, Ordering::AcqRel);
        let theme = if was_dark { Theme::Light } else { Theme::Dark };
        tracing::debug!("Theme toggled to {}", theme);
        theme
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeStore::default().current(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let store = ThemeStore::new(Theme::Dark);

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.current(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn test_clones_share_state() {
        let store = ThemeStore::default();
        let other = store.clone();

        other.toggle();
        assert_eq!(store.current(), Theme::Dark);
    }
}
