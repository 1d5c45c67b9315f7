//! # Command Layer
//!
//! One module per user-facing operation. Commands take the store (and
//! whatever else they need) as plain arguments and return a [`CmdResult`]:
//! the games touched or listed plus leveled messages for the user. They never
//! print.

use crate::config::ListGamesConfig;
use crate::model::{Condition, Game, GameInput};
use crate::settings::Theme;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod settings;
pub mod sync;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Holds the key files and `config.json`.
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_games: Vec<Game>,
    pub listed_games: Vec<Game>,
    pub theme: Option<Theme>,
    pub sheet_link: Option<String>,
    pub config: Option<ListGamesConfig>,
    pub output_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_games(mut self, games: Vec<Game>) -> Self {
        self.affected_games = games;
        self
    }

    pub fn with_listed_games(mut self, games: Vec<Game>) -> Self {
        self.listed_games = games;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_sheet_link(mut self, link: String) -> Self {
        self.sheet_link = Some(link);
        self
    }

    pub fn with_config(mut self, config: ListGamesConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
}

/// A partial edit: `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameEdit {
    pub name: Option<String>,
    pub platform: Option<String>,
    pub condition: Option<Condition>,
    pub has_manual: Option<bool>,
    pub has_box: Option<bool>,
    pub purchase_date: Option<String>,
    pub price: Option<f64>,
    pub photo1: Option<String>,
    pub photo2: Option<String>,
    pub photo3: Option<String>,
}

impl GameEdit {
    pub fn is_empty(&self) -> bool {
        *self == GameEdit::default()
    }

    pub fn apply_to(&self, input: &mut GameInput) {
        if let Some(v) = &self.name {
            input.name = v.clone();
        }
        if let Some(v) = &self.platform {
            input.platform = v.clone();
        }
        if let Some(v) = &self.condition {
            input.condition = v.clone();
        }
        if let Some(v) = self.has_manual {
            input.has_manual = v;
        }
        if let Some(v) = self.has_box {
            input.has_box = v;
        }
        if let Some(v) = &self.purchase_date {
            input.purchase_date = Some(v.clone());
        }
        if let Some(v) = self.price {
            input.price = Some(v);
        }
        if let Some(v) = &self.photo1 {
            input.photo1 = v.clone();
        }
        if let Some(v) = &self.photo2 {
            input.photo2 = v.clone();
        }
        if let Some(v) = &self.photo3 {
            input.photo3 = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_edit_changes_nothing() {
        let original = GameInput::new("Zelda", "Switch", Condition::Boa).with_purchase("2020-01-01", 5.0);
        let mut input = original.clone();
        let edit = GameEdit::default();
        assert!(edit.is_empty());
        edit.apply_to(&mut input);
        assert_eq!(input, original);
    }

    #[test]
    fn edit_overrides_only_given_fields() {
        let mut input = GameInput::new("Zelda", "Switch", Condition::Boa)
            .with_purchase("2020-01-01", 5.0)
            .with_photos(["a", "b"]);
        let edit = GameEdit {
            price: Some(7.5),
            has_box: Some(true),
            photo2: Some(String::new()),
            ..Default::default()
        };
        edit.apply_to(&mut input);

        assert_eq!(input.name, "Zelda");
        assert_eq!(input.price, Some(7.5));
        assert!(input.has_box);
        assert_eq!(input.photo1, "a");
        assert_eq!(input.photo2, "");
    }
}
