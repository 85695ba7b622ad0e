//! Display preferences
//!
//! The selected theme shares the bookmark namespace and is stored as the raw
//! string `light` or `dark` under [`THEME_STORAGE_KEY`].

use crate::backend::KeyValueBackend;
use ohohub_core::Theme;
use tracing::{error, warn};

/// Storage key holding the selected theme
pub const THEME_STORAGE_KEY: &str = "ohohub-theme";

/// Persisted theme preference
pub struct ThemeStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> ThemeStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Saved theme, if any
    ///
    /// Unreadable or unrecognized values read as `None`.
    pub fn get(&self) -> Option<Theme> {
        match self.backend.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(_) => {
                    warn!(value = %raw, "Ignoring unrecognized saved theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!(error = %e, key = THEME_STORAGE_KEY, "Failed to read theme");
                None
            }
        }
    }

    /// Saved theme, falling back to the system preference
    pub fn resolve(&self, system_prefers_dark: bool) -> Theme {
        self.get().unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    /// Persist `theme`; write failures are logged and skipped
    pub fn set(&self, theme: Theme) {
        if let Err(e) = self.backend.set(THEME_STORAGE_KEY, theme.as_str()) {
            error!(error = %e, key = THEME_STORAGE_KEY, "Failed to write theme");
        }
    }

    /// Switch to the other theme and persist it
    pub fn toggle(&self, system_prefers_dark: bool) -> Theme {
        let next = self.resolve(system_prefers_dark).toggle();
        self.set(next);
        next
    }
}
