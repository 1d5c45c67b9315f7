//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! listgames operation, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs`, fills in defaults that come from
//! configuration (export file name, remote link) and returns
//! `Result<CmdResult>`. It does no printing and holds no business rules.
//!
//! `ListGamesApi<B: StorageBackend>` is generic over the backend:
//! - Production: `ListGamesApi<FsBackend>`
//! - Testing: `ListGamesApi<MemBackend>`

use crate::commands;
use crate::config::ListGamesConfig;
use crate::error::Result;
use crate::model::{Game, GameInput};
use crate::query::GameQuery;
use crate::remote::SheetSync;
use crate::settings::{self, Theme};
use crate::store::{GameStore, StorageBackend};
use std::path::{Path, PathBuf};

pub use commands::config::ConfigAction;
pub use commands::settings::{SheetLinkAction, ThemeAction};
pub use commands::{CmdMessage, CmdResult, DataPaths, GameEdit, MessageLevel};

pub struct ListGamesApi<B: StorageBackend> {
    store: GameStore<B>,
    paths: DataPaths,
}

impl<B: StorageBackend> ListGamesApi<B> {
    pub fn new(store: GameStore<B>, paths: DataPaths) -> Self {
        Self { store, paths }
    }

    pub fn create_game(&mut self, input: GameInput) -> Result<CmdResult> {
        commands::create::run(&mut self.store, input)
    }

    pub fn update_game(&mut self, game: Game) -> Result<CmdResult> {
        commands::update::save(&mut self.store, game)
    }

    pub fn edit_game(&mut self, selector: &str, edit: &GameEdit) -> Result<CmdResult> {
        commands::update::run(&mut self.store, selector, edit)
    }

    pub fn delete_games<S: AsRef<str>>(&mut self, selectors: &[S]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, selectors)
    }

    pub fn list_games(&self, query: &GameQuery) -> Result<CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn view_game(&self, selector: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, selector)
    }

    /// Exports to `output`, or to the configured file name in the current
    /// directory.
    pub fn export_games(&self, output: Option<&Path>) -> Result<CmdResult> {
        let output = match output {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(ListGamesConfig::load(&self.paths.data_dir)?.export_filename),
        };
        commands::export::run(&self.store, &output)
    }

    pub fn import_games(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn theme(&self, action: ThemeAction) -> Result<CmdResult> {
        commands::settings::theme(self.store.backend(), action)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<CmdResult> {
        self.theme(ThemeAction::Set(theme))
    }

    pub fn toggle_theme(&self) -> Result<CmdResult> {
        self.theme(ThemeAction::Toggle)
    }

    pub fn sheet_link(&self, action: SheetLinkAction) -> Result<CmdResult> {
        commands::settings::sheet_link(self.store.backend(), action)
    }

    /// Stores `link`, or clears it when blank.
    pub fn set_sheet_link(&self, link: &str) -> Result<CmdResult> {
        if link.trim().is_empty() {
            self.sheet_link(SheetLinkAction::Clear)
        } else {
            self.sheet_link(SheetLinkAction::Set(link.to_string()))
        }
    }

    /// Pushes the collection to the configured Google Sheets link.
    pub fn sync(&self) -> Result<CmdResult> {
        let remote = SheetSync::new(settings::load_sheet_link(self.store.backend()));
        commands::sync::run(&self.store, &remote)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &GameStore<B> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ListGamesError};
    use crate::store::game_store::fixtures::input;
    use crate::store::mem_backend::MemBackend;
    use std::fs;
    use tempfile::TempDir;

    fn make_api(dir: &TempDir) -> ListGamesApi<MemBackend> {
        ListGamesApi::new(
            GameStore::open(MemBackend::new()),
            DataPaths {
                data_dir: dir.path().to_path_buf(),
            },
        )
    }

    #[test]
    fn create_edit_delete_flow() {
        let dir = TempDir::new().unwrap();
        let mut api = make_api(&dir);

        let created = api.create_game(input("Zelda", "Switch")).unwrap();
        let id = created.affected_games[0].id.clone();

        let edit = GameEdit {
            platform: Some("Wii U".into()),
            ..Default::default()
        };
        api.edit_game(&id[..8], &edit).unwrap();
        assert_eq!(api.store().games()[0].platform, "Wii U");

        let mut game = api.store().games()[0].clone();
        game.has_manual = true;
        api.update_game(game).unwrap();
        assert!(api.store().games()[0].has_manual);

        api.delete_games(&[id]).unwrap();
        assert!(api.store().is_empty());
    }

    #[test]
    fn list_goes_through_query() {
        let dir = TempDir::new().unwrap();
        let mut api = make_api(&dir);
        api.create_game(input("Zelda", "Switch")).unwrap();
        api.create_game(input("Halo", "Xbox")).unwrap();

        let result = api
            .list_games(&GameQuery::new("halo", Default::default()))
            .unwrap();
        assert_eq!(result.listed_games.len(), 1);
    }

    #[test]
    fn export_uses_configured_name_by_default() {
        let dir = TempDir::new().unwrap();
        let api = make_api(&dir);
        let out = dir.path().join("explicit.json");

        let result = api.export_games(Some(&out)).unwrap();
        assert_eq!(result.output_path, Some(out.clone()));
        assert!(out.exists());

        api.config(ConfigAction::Set(
            "export-filename".into(),
            dir.path().join("configured.json").display().to_string(),
        ))
        .unwrap();
        let result = api.export_games(None).unwrap();
        assert_eq!(result.output_path, Some(dir.path().join("configured.json")));
    }

    #[test]
    fn export_then_import_restores_collection() {
        let dir = TempDir::new().unwrap();
        let mut api = make_api(&dir);
        api.create_game(input("Zelda", "Switch")).unwrap();
        api.create_game(input("Halo", "Xbox")).unwrap();
        let before = api.store().games().to_vec();
        let out = dir.path().join("backup.json");
        api.export_games(Some(&out)).unwrap();

        api.delete_games(&[before[0].id.clone()]).unwrap();
        api.import_games(&out).unwrap();
        assert_eq!(api.store().games(), before.as_slice());

        fs::write(&out, r#"{"not":"a list"}"#).unwrap();
        let err = api.import_games(&out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Import);
        assert_eq!(api.store().games(), before.as_slice());
    }

    #[test]
    fn settings_and_sync() {
        let dir = TempDir::new().unwrap();
        let api = make_api(&dir);

        api.set_theme(Theme::Dark).unwrap();
        assert_eq!(api.theme(ThemeAction::Show).unwrap().theme, Some(Theme::Dark));
        assert_eq!(api.toggle_theme().unwrap().theme, Some(Theme::Light));

        api.set_sheet_link("https://docs.google.com/spreadsheets/d/abc")
            .unwrap();
        assert!(api.sheet_link(SheetLinkAction::Show).unwrap().sheet_link.is_some());
        assert!(matches!(api.sync(), Err(ListGamesError::Unsupported(_))));
    }
}
