//! # Query View
//!
//! A pure projection of the collection for display: filter by a search term,
//! then stable-sort. Nothing is cached and nothing is mutated; the same
//! inputs always give the same order.

use crate::model::Game;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Lexical order of ids.
    Id,
    /// Registration timestamp.
    #[default]
    Registered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Same key, opposite direction.
    pub fn toggled(self) -> Self {
        Self {
            key: self.key,
            direction: self.direction.reversed(),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "registered" | "registration" | "date" => Ok(SortKey::Registered),
            other => Err(format!(
                "Unknown sort key '{}' (expected id or registered)",
                other
            )),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!(
                "Unknown sort direction '{}' (expected asc or desc)",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Id => write!(f, "id"),
            SortKey::Registered => write!(f, "registered"),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameQuery {
    pub term: String,
    pub sort: SortSpec,
}

impl GameQuery {
    pub fn new(term: impl Into<String>, sort: SortSpec) -> Self {
        Self {
            term: term.into(),
            sort,
        }
    }
}

/// Whether `game`'s name or platform contains `term`, ignoring case.
/// Only the empty term matches everything; whitespace is matched literally.
pub fn matches(game: &Game, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    game.name.to_lowercase().contains(&needle) || game.platform.to_lowercase().contains(&needle)
}

pub fn project<'a>(games: &'a [Game], query: &GameQuery) -> Vec<&'a Game> {
    let filtered: Vec<&Game> = games.iter().filter(|g| matches(g, &query.term)).collect();
    sort(filtered, query.sort)
}

/// Stable sort: games with equal keys keep their relative order in either
/// direction.
pub fn sort(games: Vec<&Game>, spec: SortSpec) -> Vec<&Game> {
    let mut keyed: Vec<(Option<DateTime<FixedOffset>>, &Game)> = games
        .into_iter()
        .map(|g| {
            let ts = match spec.key {
                SortKey::Registered => g.registered_at(),
                SortKey::Id => None,
            };
            (ts, g)
        })
        .collect();

    keyed.sort_by(|a, b| match spec.direction {
        SortDirection::Asc => compare(a, b, spec.key),
        SortDirection::Desc => compare(b, a, spec.key),
    });

    keyed.into_iter().map(|(_, g)| g).collect()
}

/// Unparseable timestamps sort before every parseable one, and among
/// themselves by their raw text.
fn compare(
    a: &(Option<DateTime<FixedOffset>>, &Game),
    b: &(Option<DateTime<FixedOffset>>, &Game),
    key: SortKey,
) -> Ordering {
    match key {
        SortKey::Id => a.1.id.cmp(&b.1.id),
        SortKey::Registered => match (&a.0, &b.0) {
            (Some(x), Some(y)) => x.cmp(y),
            (None, None) => a.1.registration_date.cmp(&b.1.registration_date),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        },
    }
}
