use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::remote::RemoteSync;
use crate::store::{GameStore, StorageBackend};

/// Pushes the collection to `remote`. The collection is never modified,
/// whatever the outcome.
pub fn run<B: StorageBackend, R: RemoteSync>(store: &GameStore<B>, remote: &R) -> Result<CmdResult> {
    remote.sync_to_remote(store.games())?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Synced {} game(s)",
        store.len()
    )));
    Ok(result)
}
