//! # Storage Layer
//!
//! Two levels, split the same way as "how" versus "what":
//!
//! - [`StorageBackend`]: a dumb key/value store holding strings. It knows
//!   nothing about games. [`fs_backend::FsBackend`] keeps one file per key,
//!   [`mem_backend::MemBackend`] keeps a map in memory for tests.
//! - [`GameStore`]: the single owner of the game collection. It loads the
//!   collection once, keeps it in memory, and rewrites the whole collection
//!   through the backend after every mutation.
//!
//! ## Keys
//!
//! ```text
//! listgames.games.v1   # JSON array of every game
//! listgames.theme      # "light" | "dark"
//! listgames.sheet_link # placeholder remote link
//! ```
//!
//! Keys are independent: a corrupt value under one never affects the others.

use crate::error::Result;

pub mod fs_backend;
pub mod game_store;
pub mod mem_backend;

pub use game_store::{GameStore, ReplaceResult, SubscriptionId};

/// Versioned key for the game collection. Bump the suffix on format changes.
pub const GAMES_KEY: &str = "listgames.games.v1";
pub const THEME_KEY: &str = "listgames.theme";
pub const SHEET_LINK_KEY: &str = "listgames.sheet_link";

/// Raw key/value persistence.
///
/// Implementations must make `write` all-or-nothing: a later `read` sees
/// either the previous value or the new one, never a mix.
pub trait StorageBackend {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Lets tests keep a handle on the backend after handing it to a store.
impl<B: StorageBackend> StorageBackend for std::rc::Rc<B> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
