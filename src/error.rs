//! # Error Taxonomy
//!
//! Every failure the container can surface is a variant of [`Error`]. All
//! failures are synchronous and raised at the violating call; nothing is
//! retried or recovered internally, and a failed mutation leaves the store
//! untouched (a rejected `add` appends nothing, a rejected `set` replaces
//! nothing).
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `DuplicateColumn` | header construction |
//! | `RecordWidth` | `add`, `set` |
//! | `UnknownColumn` | every name-based operation |
//! | `IndexOutOfRange` | `get`, `set`, `remove` |
//! | `InvalidPattern` | match-mode selection, at pattern compile time |

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by container operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A column name appears more than once in a header. Carries the first
    /// offending name in header order.
    #[error("duplicated column \"{0}\"")]
    DuplicateColumn(String),

    /// A record's width does not match the header's column count.
    #[error("invalid number of values for record (found {found}, expected {expected})")]
    RecordWidth { expected: usize, found: usize },

    /// A column name is not declared by the header.
    #[error("unknown column \"{0}\"")]
    UnknownColumn(String),

    /// A record index is outside the store's current bounds.
    #[error("record index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A match-mode pattern failed to compile.
    #[error("invalid match pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl Error {
    /// Returns true if this is a `DuplicateColumn` error.
    pub fn is_duplicate_column(&self) -> bool {
        matches!(self, Error::DuplicateColumn(_))
    }

    /// Returns true if this is an `UnknownColumn` error.
    pub fn is_unknown_column(&self) -> bool {
        matches!(self, Error::UnknownColumn(_))
    }

    /// Returns true if this is a `RecordWidth` error.
    pub fn is_record_width(&self) -> bool {
        matches!(self, Error::RecordWidth { .. })
    }

    /// Returns true if this is an `IndexOutOfRange` error.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = Error::DuplicateColumn("toto".into());
        assert_eq!(err.to_string(), "duplicated column \"toto\"");

        let err = Error::RecordWidth {
            expected: 3,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "invalid number of values for record (found 4, expected 3)"
        );

        let err = Error::UnknownColumn("power".into());
        assert_eq!(err.to_string(), "unknown column \"power\"");
    }

    #[test]
    fn kind_predicates() {
        assert!(Error::DuplicateColumn("a".into()).is_duplicate_column());
        assert!(Error::UnknownColumn("a".into()).is_unknown_column());
        assert!(Error::RecordWidth {
            expected: 1,
            found: 2
        }
        .is_record_width());
        assert!(Error::IndexOutOfRange { index: 5, len: 2 }.is_index_out_of_range());
    }
}
