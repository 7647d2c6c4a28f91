//! # Selection Engine
//!
//! Predicate-based record selection over one or more named columns. A
//! [`Criteria`] is an ordered set of `(column, Criterion)` pairs; a record
//! is selected when every criterion holds (logical AND). An empty criteria
//! set is the first-class no-op path and selects every record.
//!
//! ## Comparison Kinds
//!
//! Each [`Criterion`] carries the payload its comparison needs, so the
//! three selection modes are a tagged variant rather than a mode flag
//! validated at runtime:
//!
//! | Variant | Payload | Passes when |
//! |---------|---------|-------------|
//! | `Equals` | literal `Value` | cell equals the literal under native equality |
//! | `Matches` | regex pattern | pattern matches the cell's text from its start |
//! | `Satisfies` | predicate closure | closure returns true for the cell |
//!
//! `Matches` anchors at the start of the value but does not require full
//! consumption: `"^J"` and `"J"` both select `"John"`, while `"ohn"` does
//! not. This is "starts-with" matching, not "contains" and not
//! "fully-matches".
//!
//! ## Evaluation Order
//!
//! Column names are resolved and patterns compiled once per `select` call,
//! before any record is visited. An unknown column or malformed pattern
//! therefore fails even when the store is empty. Per-record evaluation
//! short-circuits on the first failing criterion.

use crate::error::{Error, Result};
use crate::header::Header;
use crate::record::Record;
use crate::value::Value;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;

/// One comparison against a single column's cell.
pub enum Criterion {
    /// Native equality against a literal value.
    Equals(Value),
    /// Anchored-at-start regular-expression match against the cell's text.
    Matches(String),
    /// Caller-supplied predicate over the cell.
    Satisfies(Box<dyn Fn(&Value) -> bool>),
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Equals(v) => f.debug_tuple("Equals").field(v).finish(),
            Criterion::Matches(p) => f.debug_tuple("Matches").field(p).finish(),
            Criterion::Satisfies(_) => f.write_str("Satisfies(<predicate>)"),
        }
    }
}

/// Ordered, AND-combined selection criteria.
///
/// ```
/// use csvbuf::{Criteria, Value};
///
/// let criteria = Criteria::new()
///     .equals("first name", "John")
///     .matches("last name", "^(C|D)")
///     .satisfies("id", |v| matches!(v, Value::Int(i) if *i < 3));
/// assert_eq!(criteria.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Criteria {
    entries: Vec<(String, Criterion)>,
}

impl Criteria {
    /// Creates an empty criteria set (selects everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality criterion on the given column.
    pub fn equals(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries
            .push((column.into(), Criterion::Equals(value.into())));
        self
    }

    /// Adds an anchored pattern-match criterion on the given column.
    pub fn matches(mut self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.entries
            .push((column.into(), Criterion::Matches(pattern.into())));
        self
    }

    /// Adds a predicate criterion on the given column.
    pub fn satisfies<F>(mut self, column: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        self.entries
            .push((column.into(), Criterion::Satisfies(Box::new(predicate))));
        self
    }

    /// Adds a pre-built criterion on the given column.
    pub fn with(mut self, column: impl Into<String>, criterion: Criterion) -> Self {
        self.entries.push((column.into(), criterion));
        self
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no criteria were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves every column and compiles every pattern against a header.
    pub(crate) fn compile(&self, header: &Header) -> Result<CompiledCriteria<'_>> {
        let mut tests = Vec::with_capacity(self.entries.len());
        for (column, criterion) in &self.entries {
            let offset = header.position(column)?;
            let test = match criterion {
                Criterion::Equals(value) => CompiledTest::Equals(value),
                Criterion::Matches(pattern) => {
                    // ^(?:...) reproduces match-from-start without requiring
                    // the pattern to consume the whole value.
                    let anchored = format!("^(?:{})", pattern);
                    let regex = Regex::new(&anchored).map_err(|source| Error::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })?;
                    CompiledTest::Matches(regex)
                }
                Criterion::Satisfies(predicate) => CompiledTest::Satisfies(predicate.as_ref()),
            };
            tests.push((offset, test));
        }
        Ok(CompiledCriteria { tests })
    }
}

enum CompiledTest<'c> {
    Equals(&'c Value),
    Matches(Regex),
    Satisfies(&'c dyn Fn(&Value) -> bool),
}

/// Criteria with columns resolved to offsets and patterns compiled.
pub(crate) struct CompiledCriteria<'c> {
    tests: Vec<(usize, CompiledTest<'c>)>,
}

impl fmt::Debug for CompiledCriteria<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledCriteria")
            .field("tests", &self.tests.len())
            .finish()
    }
}

impl CompiledCriteria<'_> {
    /// Returns true if the record passes every criterion.
    pub(crate) fn matches(&self, record: &Record) -> bool {
        self.tests.iter().all(|(offset, test)| {
            let cell = &record[*offset];
            match test {
                CompiledTest::Equals(value) => *value == cell,
                CompiledTest::Matches(regex) => {
                    let text: Cow<'_, str> = match cell {
                        Value::Text(s) => Cow::Borrowed(s.as_str()),
                        other => Cow::Owned(other.to_string()),
                    };
                    regex.is_match(&text)
                }
                CompiledTest::Satisfies(predicate) => predicate(cell),
            }
        })
    }
}
