//! # Record Validation
//!
//! Two deliberately different gates:
//!
//! - **Strict** ([`validate_input`]) guards registration and edits. Every
//!   problem is reported at once, in field order, and nothing is stored.
//! - **Lenient** ([`coerce_collection`]) guards imports. Only the overall
//!   shape (a list of objects) is mandatory; individual fields are coerced or
//!   defaulted so that old exports remain loadable.

use crate::error::{Field, FieldError, ImportError, ValidationError};
use crate::model::{new_id, now_timestamp, Condition, Game, GameInput};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{debug, warn};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const SHEET_LINK_PREFIX: &str = "https://docs.google.com/spreadsheets/";

pub fn validate_input(input: &GameInput) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    let mut fail = |field: Field, reason: &str| {
        errors.push(FieldError {
            field,
            reason: reason.to_string(),
        })
    };

    if input.name.trim().is_empty() {
        fail(Field::Name, "is required");
    }
    if input.platform.trim().is_empty() {
        fail(Field::Platform, "is required");
    }
    if input.condition.is_empty() {
        fail(Field::Condition, "is required");
    }
    match input.purchase_date.as_deref().map(str::trim) {
        None | Some("") => fail(Field::PurchaseDate, "is required"),
        Some(date) if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() => {
            fail(Field::PurchaseDate, "must be a date like 2024-12-31")
        }
        Some(_) => {}
    }
    match input.price {
        None => fail(Field::Price, "is required"),
        Some(p) if !p.is_finite() => fail(Field::Price, "must be a number"),
        Some(p) if p < 0.0 => fail(Field::Price, "must not be negative"),
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

/// The sheet link may be empty (unset) or point at a Google spreadsheet.
pub fn validate_sheet_link(link: &str) -> Result<(), ValidationError> {
    let link = link.trim();
    if link.is_empty() || link.starts_with(SHEET_LINK_PREFIX) {
        Ok(())
    } else {
        Err(ValidationError::single(
            Field::SheetLink,
            "must be a Google Sheets link",
        ))
    }
}

/// Checks the invariants a whole collection must hold before it can be
/// installed: every id present and unique.
pub fn check_collection(games: &[Game]) -> Result<(), ImportError> {
    let mut seen = HashSet::with_capacity(games.len());
    for (index, game) in games.iter().enumerate() {
        if game.id.trim().is_empty() {
            return Err(ImportError::EmptyId { index });
        }
        if !seen.insert(game.id.as_str()) {
            return Err(ImportError::DuplicateId(game.id.clone()));
        }
    }
    Ok(())
}

/// Turns an already-parsed import payload into records.
///
/// Fails only when the payload is not a list, or one of its entries is not an
/// object. Missing or mistyped fields fall back to defaults.
pub fn coerce_collection(payload: Value) -> Result<Vec<Game>, ImportError> {
    let entries = match payload {
        Value::Array(entries) => entries,
        other => {
            return Err(ImportError::NotASequence {
                found: value_kind(&other),
            })
        }
    };

    let mut objects = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match entry {
            Value::Object(map) => objects.push(map),
            other => {
                return Err(ImportError::NotARecord {
                    index,
                    found: value_kind(&other),
                })
            }
        }
    }

    let imported_at = now_timestamp();
    let mut seen_ids = HashSet::with_capacity(objects.len());
    let games = objects
        .iter()
        .enumerate()
        .map(|(index, map)| {
            let game = coerce_game(map, &imported_at);
            let game = ensure_unique_id(game, index, &mut seen_ids);
            seen_ids.insert(game.id.clone());
            game
        })
        .collect();

    Ok(games)
}

fn coerce_game(map: &Map<String, Value>, imported_at: &str) -> Game {
    let registration_date = match map.get("registrationDate") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => {
            debug!("imported game without registrationDate, stamping import time");
            imported_at.to_string()
        }
    };

    let input = GameInput {
        name: text(map, "nome"),
        platform: text(map, "plataforma"),
        condition: Condition::from(text(map, "qualidade")),
        has_manual: flag(map, "encarte"),
        has_box: flag(map, "box"),
        purchase_date: match map.get("data") {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        },
        price: price(map),
        photo1: photo(map, "foto1"),
        photo2: photo(map, "foto2"),
        photo3: photo(map, "foto3"),
    };

    Game::from_input(text(map, "id"), registration_date, input)
}

fn ensure_unique_id(mut game: Game, index: usize, seen: &mut HashSet<String>) -> Game {
    if game.id.trim().is_empty() {
        game.id = new_id();
        debug!(index, id = %game.id, "imported game had no id, assigned one");
    } else if seen.contains(&game.id) {
        let fresh = new_id();
        warn!(index, old = %game.id, new = %fresh, "duplicate id in import, reassigned");
        game.id = fresh;
    }
    game
}

fn text(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn photo(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn flag(map: &Map<String, Value>, key: &str) -> bool {
    match map.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "sim" | "yes" | "1"
        ),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    }
}

fn price(map: &Map<String, Value>) -> Option<f64> {
    let value = match map.get("preco") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Some(v),
        Some(v) => {
            warn!(price = v, "imported price is not a non-negative number, dropped");
            None
        }
        None => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> GameInput {
        GameInput::new("Halo", "Xbox", Condition::Boa).with_purchase("2001-11-15", 49.9)
    }

    #[test]
    fn accepts_complete_input() {
        assert!(validate_input(&valid()).is_ok());
    }

    #[test]
    fn accepts_free_text_condition_and_zero_price() {
        let mut input = valid();
        input.condition = Condition::custom("Lacrado");
        input.price = Some(0.0);
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn reports_every_failing_field_in_order() {
        let input = GameInput {
            price: Some(-1.0),
            ..Default::default()
        };
        let err = validate_input(&input).unwrap_err();
        assert_eq!(
            err.fields(),
            vec![
                Field::Name,
                Field::Platform,
                Field::Condition,
                Field::PurchaseDate,
                Field::Price
            ]
        );
    }

    #[test]
    fn rejects_blank_name() {
        let mut input = valid();
        input.name = "   ".into();
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.fields(), vec![Field::Name]);
    }

    #[test]
    fn rejects_negative_price() {
        let mut input = valid();
        input.price = Some(-1.0);
        assert_eq!(validate_input(&input).unwrap_err().fields(), vec![Field::Price]);
    }

    #[test]
    fn rejects_missing_or_garbled_date() {
        let mut input = valid();
        input.purchase_date = None;
        assert!(validate_input(&input).unwrap_err().has(Field::PurchaseDate));

        input.purchase_date = Some("15/11/2001".into());
        assert!(validate_input(&input).unwrap_err().has(Field::PurchaseDate));
    }

    #[test]
    fn rejects_nan_price() {
        let mut input = valid();
        input.price = Some(f64::NAN);
        assert!(validate_input(&input).unwrap_err().has(Field::Price));
    }

    #[test]
    fn sheet_link_must_be_a_spreadsheet() {
        assert!(validate_sheet_link("").is_ok());
        assert!(validate_sheet_link("https://docs.google.com/spreadsheets/d/abc").is_ok());
        let err = validate_sheet_link("https://example.com/sheet").unwrap_err();
        assert_eq!(err.fields(), vec![Field::SheetLink]);
    }

    #[test]
    fn object_payload_is_not_a_sequence() {
        let err = coerce_collection(json!({"nome": "Zelda"})).unwrap_err();
        assert!(matches!(err, ImportError::NotASequence { found: "an object" }));
    }

    #[test]
    fn non_object_entry_aborts() {
        let err = coerce_collection(json!([{"nome": "Zelda"}, 42])).unwrap_err();
        assert!(matches!(err, ImportError::NotARecord { index: 1, .. }));
    }

    #[test]
    fn missing_fields_get_defaults() {
        let games = coerce_collection(json!([{
            "id": "1",
            "nome": "Zelda",
            "plataforma": "Switch",
            "qualidade": "Ótima",
            "encarte": true,
            "data": "2017-03-03",
            "preco": 59.99,
            "foto1": "http://img/1.png",
            "foto3": "",
            "registrationDate": "2024-02-01T10:00:00.000Z"
        }]))
        .unwrap();

        assert_eq!(games.len(), 1);
        let game = &games[0];
        assert!(!game.has_box);
        assert_eq!(game.photo2, "");
        assert!(game.has_manual);
        assert_eq!(game.price, Some(59.99));
        assert_eq!(game.registration_date, "2024-02-01T10:00:00.000Z");
    }

    #[test]
    fn mistyped_fields_are_coerced() {
        let games = coerce_collection(json!([{
            "id": 7,
            "nome": 1942,
            "plataforma": null,
            "encarte": "sim",
            "box": 0,
            "data": 20170303,
            "preco": "12,50",
            "foto1": false
        }]))
        .unwrap();

        let game = &games[0];
        assert_eq!(game.id, "7");
        assert_eq!(game.name, "1942");
        assert_eq!(game.platform, "");
        assert!(game.has_manual);
        assert!(!game.has_box);
        assert_eq!(game.purchase_date, None);
        assert_eq!(game.price, Some(12.5));
        assert_eq!(game.photo1, "");
    }

    #[test]
    fn negative_or_garbage_price_becomes_null() {
        let games = coerce_collection(json!([{"preco": -3}, {"preco": "abc"}])).unwrap();
        assert_eq!(games[0].price, None);
        assert_eq!(games[1].price, None);
    }

    #[test]
    fn legacy_entries_get_ids_and_timestamps() {
        let games = coerce_collection(json!([{"nome": "A"}, {"nome": "B"}])).unwrap();
        assert!(!games[0].id.is_empty());
        assert_ne!(games[0].id, games[1].id);
        assert!(games[0].registered_at().is_some());
        assert!(check_collection(&games).is_ok());
    }

    #[test]
    fn duplicate_ids_are_reassigned() {
        let games = coerce_collection(json!([{"id": "x"}, {"id": "x"}])).unwrap();
        assert_eq!(games[0].id, "x");
        assert_ne!(games[1].id, "x");
    }

    #[test]
    fn empty_array_is_fine() {
        assert!(coerce_collection(json!([])).unwrap().is_empty());
    }

    #[test]
    fn check_collection_rejects_duplicates() {
        let a = crate::model::Game::from_input("same".into(), "t".into(), valid());
        let b = a.clone();
        let err = check_collection(&[a, b]).unwrap_err();
        assert!(matches!(err, ImportError::DuplicateId(id) if id == "same"));
    }
}
