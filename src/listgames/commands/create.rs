use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::GameInput;
use crate::store::{GameStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut GameStore<B>, input: GameInput) -> Result<CmdResult> {
    let game = store.create(input)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Game registered ({}): {}",
        game.short_id(),
        game.name
    )));
    Ok(result.with_affected_games(vec![game]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ErrorKind;
    use crate::store::game_store::fixtures::input;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn registers_and_reports() {
        let mut store = GameStore::open(MemBackend::new());
        let result = run(&mut store, input("Zelda", "Switch")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(result.affected_games[0].id, store.games()[0].id);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("Zelda"));
    }

    #[test]
    fn invalid_input_is_an_error() {
        let mut store = GameStore::open(MemBackend::new());
        let err = run(&mut store, GameInput::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(store.is_empty());
    }
}
