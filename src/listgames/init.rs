use crate::api::{DataPaths, ListGamesApi};
use crate::config::ListGamesConfig;
use crate::error::{ListGamesError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::GameStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "LISTGAMES_HOME";

pub struct ListGamesContext {
    pub api: ListGamesApi<FsBackend>,
    pub config: ListGamesConfig,
}

/// `$LISTGAMES_HOME` when set and non-empty, else the platform data dir.
pub fn data_dir() -> Result<PathBuf> {
    data_dir_from(std::env::var_os(HOME_ENV).map(PathBuf::from))
}

fn data_dir_from(home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = home.filter(|h| !h.as_os_str().is_empty()) {
        return Ok(home);
    }
    ProjectDirs::from("com", "listgames", "listgames")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ListGamesError::Config("Could not determine data directory".into()))
}

pub fn initialize() -> Result<ListGamesContext> {
    let dir = data_dir()?;
    Ok(initialize_at(&dir))
}

/// Opens the store under `dir`. A broken `config.json` falls back to
/// defaults so the collection stays reachable.
pub fn initialize_at(dir: &Path) -> ListGamesContext {
    debug!(dir = %dir.display(), "initializing");
    let config = ListGamesConfig::load(dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not load config, using defaults");
        ListGamesConfig::default()
    });

    let store = GameStore::open(FsBackend::new(dir));
    let paths = DataPaths {
        data_dir: dir.to_path_buf(),
    };

    ListGamesContext {
        api: ListGamesApi::new(store, paths),
        config,
    }
}
