//! Error types for catalog construction.

use std::fmt;
use thiserror::Error;

/// Kind of catalog record being loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Module,
    Area,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Module => write!(f, "module"),
            RecordKind::Area => write!(f, "area"),
        }
    }
}

/// A catalog record that cannot be turned into a [`Module`](crate::Module)
/// or [`Area`](crate::Area).
///
/// Raised at load time only. A catalog containing any malformed record is
/// rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MalformedRecordError {
    /// A required field is absent or blank.
    #[error("{kind} record {row}: missing required field '{field}'")]
    MissingField {
        kind: RecordKind,
        row: usize,
        field: &'static str,
    },

    /// The term is not one of the known teaching terms.
    #[error("module record {row}: unknown term '{value}'")]
    UnknownTerm { row: usize, value: String },

    /// The set number is not a non-negative integer.
    #[error("module record {row}: invalid set '{value}'")]
    InvalidSet { row: usize, value: String },

    /// The code is too short to carry the category marker.
    #[error("module record {row}: code '{code}' has no category marker at position {position}")]
    CodeTooShort {
        row: usize,
        code: String,
        position: usize,
    },

    /// Two area records share a name.
    #[error("area record {row}: duplicate area name '{name}'")]
    DuplicateArea { row: usize, name: String },
}

impl MalformedRecordError {
    /// 1-based position of the offending record in its input sequence.
    pub fn row(&self) -> usize {
        match self {
            Self::MissingField { row, .. }
            | Self::UnknownTerm { row, .. }
            | Self::InvalidSet { row, .. }
            | Self::CodeTooShort { row, .. }
            | Self::DuplicateArea { row, .. } => *row,
        }
    }

    /// Kind of record the error refers to.
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::MissingField { kind, .. } => *kind,
            Self::UnknownTerm { .. } | Self::InvalidSet { .. } | Self::CodeTooShort { .. } => {
                RecordKind::Module
            }
            Self::DuplicateArea { .. } => RecordKind::Area,
        }
    }
}

/// Result type for catalog construction.
pub type Result<T> = std::result::Result<T, MalformedRecordError>;
