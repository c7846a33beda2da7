use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Screens match on these,
// never on the human-readable message string.

/// Stable error code constants.
///
/// The presentation layer maps a code to an alert or inline message.
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const WRONG_MODE: &str = "WRONG_MODE";
    pub const INVALID_PERMUTATION: &str = "INVALID_PERMUTATION";
    pub const NOTHING_PENDING: &str = "NOTHING_PENDING";
    pub const ID_COLLISION: &str = "ID_COLLISION";
}

// ── ValidationError ─────────────────────────────────────────────────

/// A rule the editor form failed. Always recovered locally: the form stays
/// open and nothing is mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty after trimming.
    #[error("name is required")]
    EmptyName,

    /// The entity type requires a parent and none was chosen.
    #[error("a parent must be selected")]
    MissingParent,

    /// The chosen parent is not among the candidate parents.
    #[error("parent '{0}' does not exist")]
    UnknownParent(String),

    /// The entity type requires at least one associated item.
    #[error("at least one item must be selected")]
    EmptySelection,

    /// Color text does not match `#RRGGBB`.
    #[error("'{0}' is not a #RRGGBB color")]
    MalformedColor(String),
}

impl ValidationError {
    /// Message key under `error/validation/` used for localized alerts.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "empty_name",
            ValidationError::MissingParent => "missing_parent",
            ValidationError::UnknownParent(_) => "unknown_parent",
            ValidationError::EmptySelection => "empty_selection",
            ValidationError::MalformedColor(_) => "malformed_color",
        }
    }
}

// ── CatalogError ────────────────────────────────────────────────────

/// Unified error type for catalog operations.
///
/// Each variant maps to a stable error code (see [`error_code`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Form input broke a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Update referenced an id absent from the collection. Signals a caller
    /// bug: ids offered for editing always come from the current collection.
    #[error("record '{0}' not found")]
    NotFound(String),

    /// The operation is not available in the current list mode.
    #[error("{operation} is not available while {mode}")]
    WrongMode {
        operation: &'static str,
        mode: &'static str,
    },

    /// A reorder sequence is not a permutation of the current ids.
    #[error("invalid reorder: {0}")]
    InvalidPermutation(String),

    /// `confirm_delete` was called without a pending delete.
    #[error("no delete awaiting confirmation")]
    NothingPending,

    /// The id source kept returning ids already in the collection.
    #[error("no unused id available (last tried '{0}')")]
    IdCollision(String),
}

impl CatalogError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Validation(_) => error_code::VALIDATION_FAILED,
            CatalogError::NotFound(_) => error_code::NOT_FOUND,
            CatalogError::WrongMode { .. } => error_code::WRONG_MODE,
            CatalogError::InvalidPermutation(_) => error_code::INVALID_PERMUTATION,
            CatalogError::NothingPending => error_code::NOTHING_PENDING,
            CatalogError::IdCollision(_) => error_code::ID_COLLISION,
        }
    }

    /// The validation failure, if this error is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CatalogError::Validation(v) => Some(v),
            _ => None,
        }
    }
}
