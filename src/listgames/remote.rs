//! Remote sync seam. Only the interface exists; no implementation talks to a
//! server yet.

use crate::error::{ListGamesError, Result};
use crate::model::Game;

pub trait RemoteSync {
    fn sync_to_remote(&self, games: &[Game]) -> Result<()>;
}

/// Placeholder for pushing the collection to a Google spreadsheet.
pub struct SheetSync {
    link: String,
}

impl SheetSync {
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }
}

impl RemoteSync for SheetSync {
    fn sync_to_remote(&self, _games: &[Game]) -> Result<()> {
        if self.link.is_empty() {
            return Err(ListGamesError::Unsupported(
                "no Google Sheets link configured, and remote sync is not implemented".into(),
            ));
        }
        Err(ListGamesError::Unsupported(format!(
            "remote sync to {} is not implemented",
            self.link
        )))
    }
}
