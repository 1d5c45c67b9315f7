//! User preferences that live beside the collection: the UI theme and the
//! (not yet functional) Google Sheets link. Each one has its own storage key.

use crate::error::Result;
use crate::store::{StorageBackend, SHEET_LINK_KEY, THEME_KEY};
use crate::validate::validate_sheet_link;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the stored theme. Missing or unreadable values fall back to light.
pub fn load_theme<B: StorageBackend>(backend: &B) -> Theme {
    match backend.read(THEME_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: String| {
            warn!(value = %raw, "{}, using default", e);
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!(error = %e, "could not read theme, using default");
            Theme::default()
        }
    }
}

pub fn save_theme<B: StorageBackend>(backend: &B, theme: Theme) -> Result<()> {
    backend.write(THEME_KEY, theme.as_str())
}

/// The stored sheet link, or an empty string when unset.
pub fn load_sheet_link<B: StorageBackend>(backend: &B) -> String {
    match backend.read(SHEET_LINK_KEY) {
        Ok(Some(link)) => link,
        Ok(None) => String::new(),
        Err(e) => {
            warn!(error = %e, "could not read sheet link");
            String::new()
        }
    }
}

/// Stores `link` after validation. An empty link clears the setting.
pub fn save_sheet_link<B: StorageBackend>(backend: &B, link: &str) -> Result<()> {
    validate_sheet_link(link)?;
    let link = link.trim();
    if link.is_empty() {
        backend.remove(SHEET_LINK_KEY)
    } else {
        backend.write(SHEET_LINK_KEY, link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ListGamesError};
    use crate::store::mem_backend::MemBackend;
    use crate::store::GAMES_KEY;

    #[test]
    fn theme_defaults_to_light() {
        assert_eq!(load_theme(&MemBackend::new()), Theme::Light);
    }

    #[test]
    fn theme_round_trips_through_backend() {
        let backend = MemBackend::new();
        save_theme(&backend, Theme::Dark).unwrap();
        assert_eq!(backend.read(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&backend), Theme::Dark);
    }

    #[test]
    fn garbage_theme_reads_as_default() {
        let backend = MemBackend::new();
        backend.insert_raw(THEME_KEY, "purple");
        assert_eq!(load_theme(&backend), Theme::Light);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn sheet_link_rejects_other_sites() {
        let backend = MemBackend::new();
        let err = save_sheet_link(&backend, "https://example.com").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!backend.contains(SHEET_LINK_KEY));
    }

    #[test]
    fn sheet_link_saves_and_clears() {
        let backend = MemBackend::new();
        let link = "https://docs.google.com/spreadsheets/d/abc/edit";
        save_sheet_link(&backend, link).unwrap();
        assert_eq!(load_sheet_link(&backend), link);

        save_sheet_link(&backend, "").unwrap();
        assert_eq!(load_sheet_link(&backend), "");
    }

    #[test]
    fn settings_do_not_touch_games() {
        let backend = MemBackend::new();
        backend.insert_raw(GAMES_KEY, "[]");
        save_theme(&backend, Theme::Dark).unwrap();
        save_sheet_link(&backend, "").unwrap();
        assert_eq!(backend.read(GAMES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn theme_write_failure_is_reported() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(matches!(
            save_theme(&backend, Theme::Dark),
            Err(ListGamesError::Storage(_))
        ));
    }
}
