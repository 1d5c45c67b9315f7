use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{project, GameQuery};
use crate::store::{GameStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &GameStore<B>, query: &GameQuery) -> Result<CmdResult> {
    let listed: Vec<_> = project(store.games(), query)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let message = if store.is_empty() {
            "No games registered yet.".to_string()
        } else {
            format!("No games match '{}'.", query.term)
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_listed_games(listed))
}
