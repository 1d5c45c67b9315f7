//! # Transfer Codec
//!
//! Export writes the whole collection as pretty-printed JSON, the same text
//! the store keeps on disk. Import is a two-stage pipeline:
//!
//! 1. **Parse**: bytes must be UTF-8 JSON. Anything else is
//!    [`ImportError::Malformed`].
//! 2. **Coerce**: the parsed value goes through the lenient validator
//!    ([`crate::validate::coerce_collection`]), which insists on a list of
//!    objects and defaults everything else.
//!
//! Prices are written with shortest round-trip formatting and parsed with
//! `float_roundtrip`, so `import(export(c)) == c` holds bit for bit. Date
//! strings are never reformatted.

use crate::error::{ImportError, Result};
use crate::model::Game;
use crate::validate::coerce_collection;
use serde_json::Value;

/// Suggested name for export files.
pub const EXPORT_FILENAME: &str = "listgames.json";

pub fn export(games: &[Game]) -> Result<Vec<u8>> {
    Ok(to_json(games)?.into_bytes())
}

pub fn to_json(games: &[Game]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(games)?;
    json.push('\n');
    Ok(json)
}

pub fn import(bytes: &[u8]) -> std::result::Result<Vec<Game>, ImportError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ImportError::Malformed(format!("not UTF-8 text ({})", e)))?;
    let payload: Value =
        serde_json::from_str(text).map_err(|e| ImportError::Malformed(e.to_string()))?;
    coerce_collection(payload)
}
