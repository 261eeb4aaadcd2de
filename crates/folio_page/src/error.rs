use std::fmt;

use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

/// A validation failure of a [`Paginator`](crate::Paginator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid {0}")]
    InvalidField(Field),

    #[error("out of range: {0}")]
    OutOfRange(Field),
}

impl Error {
    /// The field that failed validation.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidField(field) | Self::OutOfRange(field) => *field,
        }
    }
}

/// Failure to parse the `[epp:.. tot:.. cur:..]` form of a paginator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Missing surrounding brackets: {0}")]
    MissingBrackets(String),

    #[error("Missing field, expected {0}")]
    MissingField(&'static str),

    #[error("Unexpected field: {0}")]
    UnexpectedField(String),

    #[error("Invalid number for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

/// One of the three fields of a [`Paginator`](crate::Paginator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    EntriesPerPage,
    TotalEntries,
    CurrentPage,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EntriesPerPage => "entries_per_page",
            Self::TotalEntries => "total_entries",
            Self::CurrentPage => "current_page",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}
