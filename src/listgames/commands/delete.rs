use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ListGamesError, Result};
use crate::store::{GameStore, StorageBackend};

/// Deletes every game matching the selectors. Selectors that match nothing
/// produce a warning, not an error.
pub fn run<B: StorageBackend, S: AsRef<str>>(
    store: &mut GameStore<B>,
    selectors: &[S],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for selector in selectors {
        let selector = selector.as_ref();
        let id = match store.find(selector) {
            Ok(game) => game.id.clone(),
            Err(ListGamesError::NotFound(_)) => {
                result.add_message(CmdMessage::warning(format!(
                    "No game matches {}, nothing deleted",
                    selector
                )));
                continue;
            }
            Err(e) => return Err(e),
        };

        if let Some(game) = store.remove(&id)? {
            result.add_message(CmdMessage::success(format!(
                "Game deleted ({}): {}",
                game.short_id(),
                game.name
            )));
            result.affected_games.push(game);
        }
    }

    Ok(result)
}
