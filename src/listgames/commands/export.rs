use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ListGamesError, Result};
use crate::store::{GameStore, StorageBackend};
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes the whole collection to `output`, replacing any existing file.
pub fn run<B: StorageBackend>(store: &GameStore<B>, output: &Path) -> Result<CmdResult> {
    let bytes = codec::export(store.games())?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ListGamesError::Io)?;
        }
    }
    fs::write(output, bytes).map_err(ListGamesError::Io)?;
    info!(count = store.len(), path = %output.display(), "collection exported");

    let mut result = CmdResult::default();
    if store.is_empty() {
        result.add_message(CmdMessage::info("The collection is empty, exported an empty list."));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} game(s) to {}",
        store.len(),
        output.display()
    )));
    Ok(result.with_output_path(output.to_path_buf()))
}
