use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A user-editable field of a game record, named by its storage key.
///
/// Declaration order is the order in which validation reports problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Platform,
    Condition,
    PurchaseDate,
    Price,
    SheetLink,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Platform => "plataforma",
            Field::Condition => "qualidade",
            Field::PurchaseDate => "data",
            Field::Price => "preco",
            Field::SheetLink => "googleSheetLink",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub reason: String,
}

/// Every field that failed strict validation, in [`Field`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        let mut errors = errors;
        errors.sort_by_key(|e| e.field);
        Self { errors }
    }

    pub fn single(field: Field, reason: impl Into<String>) -> Self {
        Self::new(vec![FieldError {
            field,
            reason: reason.into(),
        }])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn has(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{} {}", e.field, e.reason))
            .collect();
        write!(f, "Invalid game: {}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Why an import payload was refused. The existing collection is never touched.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("file is not valid JSON: {0}")]
    Malformed(String),

    #[error("expected a list of games, found {found}")]
    NotASequence { found: &'static str },

    #[error("entry {index} is not a game record (found {found})")]
    NotARecord { index: usize, found: &'static str },

    #[error("entry {index} has an empty id")]
    EmptyId { index: usize },

    #[error("id {0} appears more than once")]
    DuplicateId(String),

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ListGamesError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Game not found: {0}")]
    NotFound(String),

    #[error("More than one game matches '{0}', use a longer id")]
    Ambiguous(String),

    #[error("Kept for this session only, saving to disk failed: {0}")]
    Persistence(String),

    #[error("Import aborted: {0}")]
    Import(#[from] ImportError),

    #[error("Not supported: {0}")]
    Unsupported(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification used by UIs to pick a message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected, nothing changed.
    Validation,
    NotFound,
    /// Change applied in memory but not written to disk.
    Persistence,
    /// Import refused, nothing changed.
    Import,
    Other,
}

impl ListGamesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListGamesError::Validation(_) => ErrorKind::Validation,
            ListGamesError::NotFound(_) | ListGamesError::Ambiguous(_) => ErrorKind::NotFound,
            ListGamesError::Persistence(_) => ErrorKind::Persistence,
            ListGamesError::Import(_) => ErrorKind::Import,
            _ => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListGamesError>;
