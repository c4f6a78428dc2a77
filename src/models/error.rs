//! Errors returned by page operations and form validation.

use crate::models::record::RecordId;
use serde::Serialize;

/// What is wrong with a single form field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field is empty or whitespace only.
    Missing,
    /// Present but not acceptable (bad date, unknown option, ...).
    Invalid(String),
    /// Consent checkbox must be ticked.
    ConsentRequired,
    /// Key is not part of the form.
    UnknownField,
}

/// A validation failure attached to a form field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::Missing,
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::Invalid(reason.into()),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "{} is required", self.field),
            ViolationKind::Invalid(reason) => write!(f, "{}: {}", self.field, reason),
            ViolationKind::ConsentRequired => write!(f, "{} must be accepted", self.field),
            ViolationKind::UnknownField => write!(f, "{} is not a field of this form", self.field),
        }
    }
}

/// Errors that can occur during page operations.
#[derive(Clone, Debug, PartialEq)]
pub enum PageError {
    /// No record with this id in the page's list.
    RecordNotFound(RecordId),
    /// Draft or commit requested while no inline edit is active.
    NotEditing,
    /// A selection (tournament, game type, time control, tab) is not one of the offered options.
    UnknownOption { field: &'static str, value: String },
    /// Form submission was rejected.
    Validation(Vec<FieldViolation>),
    /// Search needs a game type and time control first.
    SearchNotReady,
    /// A search is already running.
    AlreadySearching,
    /// User exists but is not waiting for a game.
    NotChallengeable(RecordId),
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::RecordNotFound(id) => write!(f, "No record with id {}", id),
            PageError::NotEditing => write!(f, "Nothing is being edited"),
            PageError::UnknownOption { field, value } => {
                write!(f, "Unknown {}: {}", field, value)
            }
            PageError::Validation(violations) => {
                let parts: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                write!(f, "Invalid form: {}", parts.join("; "))
            }
            PageError::SearchNotReady => write!(f, "Select a game type and time control first"),
            PageError::AlreadySearching => write!(f, "Already searching for an opponent"),
            PageError::NotChallengeable(_) => write!(f, "Player is not looking for a game"),
        }
    }
}

impl std::error::Error for PageError {}

impl From<Vec<FieldViolation>> for PageError {
    fn from(violations: Vec<FieldViolation>) -> Self {
        PageError::Validation(violations)
    }
}
