use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Physical condition of the copy.
///
/// Stored as its display string. Anything other than the three standard
/// grades is kept verbatim in `Other`, so older exports survive untouched.
/// Build free text with [`Condition::custom`] or `From<String>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Otima,
    Boa,
    Ruim,
    Other(CustomCondition),
}

/// Free-text condition. Never spells one of the standard grades, so a
/// stored value always reads back as the same [`Condition`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomCondition(String);

impl CustomCondition {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Condition {
    pub fn as_str(&self) -> &str {
        match self {
            Condition::Otima => "Ótima",
            Condition::Boa => "Boa",
            Condition::Ruim => "Ruim",
            Condition::Other(s) => s.as_str(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// Free text, normalized to a standard grade when it spells one exactly.
    pub fn custom(text: impl Into<String>) -> Self {
        Self::from(text.into())
    }

    /// Parses user input, accepting unaccented and English spellings of the
    /// standard grades. Unknown text becomes `Other`.
    pub fn parse_loose(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "ótima" | "otima" | "great" => Condition::Otima,
            "boa" | "good" => Condition::Boa,
            "ruim" | "bad" | "poor" => Condition::Ruim,
            _ => Condition::custom(trimmed),
        }
    }
}

/// The unset condition, rejected by strict validation.
impl Default for Condition {
    fn default() -> Self {
        Condition::Other(CustomCondition(String::new()))
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Ótima" => Condition::Otima,
            "Boa" => Condition::Boa,
            "Ruim" => Condition::Ruim,
            _ => Condition::Other(CustomCondition(value)),
        }
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        match value {
            Condition::Other(s) => s.0,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A game in the collection, serialized with the same keys the
/// storage and export files have always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "plataforma")]
    pub platform: String,
    #[serde(rename = "qualidade")]
    pub condition: Condition,
    #[serde(rename = "encarte", default)]
    pub has_manual: bool,
    #[serde(rename = "box", default)]
    pub has_box: bool,
    /// ISO 8601 date, kept exactly as entered.
    #[serde(rename = "data", default)]
    pub purchase_date: Option<String>,
    #[serde(rename = "preco", default)]
    pub price: Option<f64>,
    #[serde(rename = "foto1", default)]
    pub photo1: String,
    #[serde(rename = "foto2", default)]
    pub photo2: String,
    #[serde(rename = "foto3", default)]
    pub photo3: String,
    /// RFC 3339 timestamp assigned once, when the game was first registered.
    #[serde(rename = "registrationDate")]
    pub registration_date: String,
}

impl Game {
    /// Builds a brand new record with a fresh id and the current time.
    pub fn new(input: GameInput) -> Self {
        Self::from_input(new_id(), now_timestamp(), input)
    }

    pub fn from_input(id: String, registration_date: String, input: GameInput) -> Self {
        Self {
            id,
            name: input.name,
            platform: input.platform,
            condition: input.condition,
            has_manual: input.has_manual,
            has_box: input.has_box,
            purchase_date: input.purchase_date,
            price: input.price,
            photo1: input.photo1,
            photo2: input.photo2,
            photo3: input.photo3,
            registration_date,
        }
    }

    /// The editable part of this record.
    pub fn input(&self) -> GameInput {
        GameInput {
            name: self.name.clone(),
            platform: self.platform.clone(),
            condition: self.condition.clone(),
            has_manual: self.has_manual,
            has_box: self.has_box,
            purchase_date: self.purchase_date.clone(),
            price: self.price,
            photo1: self.photo1.clone(),
            photo2: self.photo2.clone(),
            photo3: self.photo3.clone(),
        }
    }

    /// Replaces every editable field, leaving id and registration date alone.
    pub fn apply(&mut self, input: GameInput) {
        let id = std::mem::take(&mut self.id);
        let registration_date = std::mem::take(&mut self.registration_date);
        *self = Game::from_input(id, registration_date, input);
    }

    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    pub fn registered_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.registration_date).ok()
    }

    pub fn photos(&self) -> impl Iterator<Item = &str> {
        [&self.photo1, &self.photo2, &self.photo3]
            .into_iter()
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Everything a user may set on a game. Used for registration and edits.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameInput {
    pub name: String,
    pub platform: String,
    pub condition: Condition,
    pub has_manual: bool,
    pub has_box: bool,
    pub purchase_date: Option<String>,
    pub price: Option<f64>,
    pub photo1: String,
    pub photo2: String,
    pub photo3: String,
}

impl GameInput {
    pub fn new(name: impl Into<String>, platform: impl Into<String>, condition: Condition) -> Self {
        Self {
            name: name.into(),
            platform: platform.into(),
            condition,
            ..Default::default()
        }
    }

    pub fn with_purchase(mut self, date: impl Into<String>, price: f64) -> Self {
        self.purchase_date = Some(date.into());
        self.price = Some(price);
        self
    }

    pub fn with_manual(mut self, has_manual: bool) -> Self {
        self.has_manual = has_manual;
        self
    }

    pub fn with_box(mut self, has_box: bool) -> Self {
        self.has_box = has_box;
        self
    }

    pub fn with_photos<I, S>(mut self, photos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut photos = photos.into_iter().map(Into::into);
        self.photo1 = photos.next().unwrap_or_default();
        self.photo2 = photos.next().unwrap_or_default();
        self.photo3 = photos.next().unwrap_or_default();
        self
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zelda() -> GameInput {
        GameInput::new("Zelda", "Switch", Condition::Otima)
            .with_purchase("2017-03-03", 59.99)
            .with_box(true)
    }

    #[test]
    fn condition_keeps_unknown_text_verbatim() {
        let c: Condition = serde_json::from_str("\"Lacrado\"").unwrap();
        assert_eq!(c, Condition::custom("Lacrado"));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"Lacrado\"");

        let c: Condition = serde_json::from_str("\"Ótima\"").unwrap();
        assert_eq!(c, Condition::Otima);
    }

    #[test]
    fn custom_text_spelling_a_grade_is_that_grade() {
        assert_eq!(Condition::custom("Boa"), Condition::Boa);
        assert_eq!(Condition::custom("Ótima"), Condition::Otima);
        assert!(matches!(Condition::custom("boa"), Condition::Other(_)));

        for c in [Condition::custom("Boa"), Condition::custom("boa"), Condition::custom("")] {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(serde_json::from_str::<Condition>(&json).unwrap(), c);
        }
    }

    #[test]
    fn photos_skip_empty_slots() {
        let mut game = Game::new(zelda().with_photos(["", "b.jpg", "c.jpg"]));
        assert_eq!(game.photos().collect::<Vec<_>>(), vec!["b.jpg", "c.jpg"]);
        game.photo2.clear();
        assert_eq!(game.photos().collect::<Vec<_>>(), vec!["c.jpg"]);
    }

    #[test]
    fn loose_parse_accepts_unaccented_grades() {
        assert_eq!(Condition::parse_loose("otima"), Condition::Otima);
        assert_eq!(Condition::parse_loose(" RUIM "), Condition::Ruim);
        assert_eq!(
            Condition::parse_loose("Mint"),
            Condition::custom("Mint")
        );
    }

    #[test]
    fn serializes_with_storage_keys() {
        let game = Game::from_input("abc".into(), "2024-01-01T00:00:00.000Z".into(), zelda());
        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value["nome"], "Zelda");
        assert_eq!(value["plataforma"], "Switch");
        assert_eq!(value["qualidade"], "Ótima");
        assert_eq!(value["encarte"], false);
        assert_eq!(value["box"], true);
        assert_eq!(value["data"], "2017-03-03");
        assert_eq!(value["preco"], 59.99);
        assert_eq!(value["foto1"], "");
        assert_eq!(value["registrationDate"], "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn apply_keeps_identity() {
        let mut game = Game::new(zelda());
        let id = game.id.clone();
        let registered = game.registration_date.clone();

        game.apply(GameInput::new("Mario", "Wii", Condition::Boa).with_purchase("2010-01-01", 10.0));

        assert_eq!(game.id, id);
        assert_eq!(game.registration_date, registered);
        assert_eq!(game.name, "Mario");
        assert!(!game.has_box);
    }

    #[test]
    fn short_id_handles_short_ids() {
        let mut game = Game::new(zelda());
        assert_eq!(game.short_id().len(), 8);
        game.id = "1".into();
        assert_eq!(game.short_id(), "1");
    }

    #[test]
    fn new_games_have_parseable_timestamps() {
        let game = Game::new(zelda());
        assert!(game.registered_at().is_some());
    }
}
