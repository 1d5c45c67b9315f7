use super::{StorageBackend, GAMES_KEY};
use crate::codec;
use crate::error::{ListGamesError, Result};
use crate::model::{new_id, now_timestamp, Game, GameInput};
use crate::validate::{check_collection, validate_input};
use tracing::{debug, warn};

/// Handle returned by [`GameStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceResult {
    /// Games now in the collection.
    pub installed: usize,
    /// Games that were discarded.
    pub replaced: usize,
}

type Subscriber = Box<dyn FnMut(&[Game])>;

/// The only owner of the game collection.
///
/// Every mutation goes through here: validate, change memory, write the whole
/// collection to the backend, then tell subscribers. If the write fails the
/// in-memory change stands and the caller gets
/// [`ListGamesError::Persistence`].
pub struct GameStore<B: StorageBackend> {
    backend: B,
    games: Vec<Game>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<B: StorageBackend> GameStore<B> {
    /// Loads the collection from the backend. Never fails: unreadable or
    /// corrupt data is logged and the store starts empty.
    pub fn open(backend: B) -> Self {
        let games = load_games(&backend);
        debug!(count = games.len(), "game store opened");
        Self {
            backend,
            games,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Looks a game up by full id, or by a prefix matching exactly one id.
    pub fn find(&self, selector: &str) -> Result<&Game> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Err(ListGamesError::NotFound(selector.to_string()));
        }
        if let Some(game) = self.get(selector) {
            return Ok(game);
        }

        let mut matches = self.games.iter().filter(|g| g.id.starts_with(selector));
        match (matches.next(), matches.next()) {
            (Some(game), None) => Ok(game),
            (Some(_), Some(_)) => Err(ListGamesError::Ambiguous(selector.to_string())),
            (None, _) => Err(ListGamesError::NotFound(selector.to_string())),
        }
    }

    pub fn create(&mut self, input: GameInput) -> Result<Game> {
        validate_input(&input)?;

        let id = loop {
            let candidate = new_id();
            if self.get(&candidate).is_none() {
                break candidate;
            }
        };
        let game = Game::from_input(id, now_timestamp(), input);
        debug!(id = %game.id, name = %game.name, "game created");
        self.games.push(game.clone());

        self.commit()?;
        Ok(game)
    }

    /// Replaces every editable field of the stored game with `game`'s.
    /// The stored id and registration date always win.
    pub fn update(&mut self, game: Game) -> Result<Game> {
        let pos = self
            .games
            .iter()
            .position(|g| g.id == game.id)
            .ok_or_else(|| ListGamesError::NotFound(game.id.clone()))?;

        let input = game.input();
        validate_input(&input)?;

        let stored = &mut self.games[pos];
        stored.apply(input);
        let updated = stored.clone();
        debug!(id = %updated.id, "game updated");

        self.commit()?;
        Ok(updated)
    }

    /// Removing an unknown id is a no-op and returns `Ok(None)`.
    pub fn remove(&mut self, id: &str) -> Result<Option<Game>> {
        let Some(pos) = self.games.iter().position(|g| g.id == id) else {
            debug!(id, "remove: no such game");
            return Ok(None);
        };

        let removed = self.games.remove(pos);
        debug!(id, name = %removed.name, "game removed");

        self.commit()?;
        Ok(Some(removed))
    }

    /// Swaps in a whole new collection. Refused without side effects unless
    /// every id is present and unique.
    pub fn replace_all(&mut self, games: Vec<Game>) -> Result<ReplaceResult> {
        check_collection(&games)?;

        let result = ReplaceResult {
            installed: games.len(),
            replaced: self.games.len(),
        };
        self.games = games;
        debug!(
            installed = result.installed,
            replaced = result.replaced,
            "collection replaced"
        );

        self.commit()?;
        Ok(result)
    }

    /// Registers a callback run with the full collection after every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&[Game]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn commit(&mut self) -> Result<()> {
        let persisted = self.persist();
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.games);
        }
        persisted
    }

    fn persist(&self) -> Result<()> {
        let json = codec::to_json(&self.games)?;
        self.backend.write(GAMES_KEY, &json).map_err(|e| {
            warn!(error = %e, count = self.games.len(), "failed to save games");
            ListGamesError::Persistence(e.to_string())
        })
    }
}

fn load_games<B: StorageBackend>(backend: &B) -> Vec<Game> {
    let raw = match backend.read(GAMES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "could not read stored games, starting empty");
            return Vec::new();
        }
    };

    match codec::import(raw.as_bytes()) {
        Ok(games) => games,
        Err(e) => {
            warn!(error = %e, "stored games are corrupt, discarding them");
            if let Err(e) = backend.remove(GAMES_KEY) {
                warn!(error = %e, "could not discard corrupt games");
            }
            Vec::new()
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Condition;
    use crate::store::mem_backend::MemBackend;

    /// A valid registration for `name` on `platform`.
    pub fn input(name: &str, platform: &str) -> GameInput {
        GameInput::new(name, platform, Condition::Boa).with_purchase("2020-06-15", 100.0)
    }

    pub struct StoreFixture {
        pub store: GameStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: GameStore::open(MemBackend::new()),
            }
        }

        pub fn with_game(mut self, name: &str, platform: &str) -> Self {
            self.store.create(input(name, platform)).unwrap();
            self
        }

        /// Adds a game with a fixed id and registration timestamp.
        pub fn with_registered(
            mut self,
            id: &str,
            name: &str,
            platform: &str,
            registered: &str,
        ) -> Self {
            let mut games = self.store.games().to_vec();
            games.push(Game::from_input(
                id.to_string(),
                registered.to_string(),
                input(name, platform),
            ));
            self.store.replace_all(games).unwrap();
            self
        }
    }
}
