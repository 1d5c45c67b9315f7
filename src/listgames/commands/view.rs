use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{GameStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &GameStore<B>, selector: &str) -> Result<CmdResult> {
    let game = store.find(selector)?.clone();
    Ok(CmdResult::default().with_listed_games(vec![game]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::game_store::fixtures::StoreFixture;

    #[test]
    fn shows_one_game() {
        let store = StoreFixture::new()
            .with_registered("abc123", "Zelda", "Switch", "2024-01-01T00:00:00Z")
            .with_game("Halo", "Xbox")
            .store;
        let result = run(&store, "abc1").unwrap();
        assert_eq!(result.listed_games.len(), 1);
        assert_eq!(result.listed_games[0].name, "Zelda");
    }
}
