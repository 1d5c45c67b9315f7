use crate::commands::{CmdMessage, CmdResult, GameEdit};
use crate::error::Result;
use crate::model::Game;
use crate::store::{GameStore, StorageBackend};

/// Applies `edit` on top of the game matching `selector` (id or id prefix).
pub fn run<B: StorageBackend>(
    store: &mut GameStore<B>,
    selector: &str,
    edit: &GameEdit,
) -> Result<CmdResult> {
    let mut game = store.find(selector)?.clone();

    if edit.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result.with_affected_games(vec![game]));
    }

    let mut input = game.input();
    edit.apply_to(&mut input);
    game.apply(input);
    save(store, game)
}

/// Stores a fully edited record. Its id must already exist.
pub fn save<B: StorageBackend>(store: &mut GameStore<B>, game: Game) -> Result<CmdResult> {
    let updated = store.update(game)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Game updated ({}): {}",
        updated.short_id(),
        updated.name
    )));
    Ok(result.with_affected_games(vec![updated]))
}
