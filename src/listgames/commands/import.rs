use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ImportError, Result};
use crate::store::{GameStore, StorageBackend};
use std::fs;
use std::path::Path;
use tracing::info;

/// Replaces the whole collection with the contents of the file at `path`.
///
/// The file is read and decoded completely before the store is touched, so a
/// refused payload leaves the current collection as it was.
pub fn run<B: StorageBackend>(store: &mut GameStore<B>, path: &Path) -> Result<CmdResult> {
    let bytes = fs::read(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let games = codec::import(&bytes)?;
    let outcome = store.replace_all(games)?;
    info!(installed = outcome.installed, replaced = outcome.replaced, "collection imported");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} game(s) from {}, replacing {}",
        outcome.installed,
        path.display(),
        outcome.replaced
    )));
    Ok(result.with_affected_games(store.games().to_vec()))
}
