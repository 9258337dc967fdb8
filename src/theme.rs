//! Light/dark display preference.

use crate::defaults::THEME_STORAGE_KEY;
use crate::store::PreferenceStore;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon for the toggle button: offers the other theme.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme '{}'", other)),
        }
    }
}

/// Reads the saved theme. Missing or unrecognised values fall back to light.
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    match store.get(THEME_STORAGE_KEY) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("{}; using light theme", e);
            Theme::Light
        }),
        None => Theme::Light,
    }
}

/// Persists the theme. A failed write is logged and otherwise ignored.
pub fn save_theme(store: &impl PreferenceStore, theme: Theme) {
    match store.set(THEME_STORAGE_KEY, theme.as_str()) {
        Ok(()) => debug!("Saved theme {}", theme),
        Err(e) => warn!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_load_defaults_to_light() {
        MemoryStore::clear();
        assert_eq!(load_theme(&MemoryStore), Theme::Light);

        MemoryStore.set(THEME_STORAGE_KEY, "neon").unwrap();
        assert_eq!(load_theme(&MemoryStore), Theme::Light);
    }

    #[test]
    fn test_save_then_load() {
        MemoryStore::clear();
        save_theme(&MemoryStore, Theme::Dark);
        assert_eq!(MemoryStore.get("theme").as_deref(), Some("dark"));
        assert_eq!(load_theme(&MemoryStore), Theme::Dark);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        save_theme(&BrokenStore, Theme::Dark);
        assert_eq!(load_theme(&BrokenStore), Theme::Light);
    }
}
