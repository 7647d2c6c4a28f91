//! # Record Representation
//!
//! A [`Record`] is one row: an ordered sequence of [`Value`]s positionally
//! aligned with a table's header. Width is enforced by the table at
//! insertion time, not here; a free-standing record can hold any number of
//! values until it is handed to a store.
//!
//! Values live in a `SmallVec` so typical rows (a handful of columns) stay
//! inline without a heap allocation for the spine.

use crate::value::Value;
use smallvec::SmallVec;

/// One row of values, aligned with a table header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    values: SmallVec<[Value; 8]>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at the given offset, if in bounds.
    pub fn get(&self, offset: usize) -> Option<&Value> {
        self.values.get(offset)
    }

    /// Appends a value.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Iterates over the values in column order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }
}

impl std::ops::Index<usize> for Record {
    type Output = Value;

    fn index(&self, offset: usize) -> &Value {
        &self.values[offset]
    }
}

impl From<Vec<Value>> for Record {
    fn from(values: Vec<Value>) -> Self {
        Self {
            values: SmallVec::from_vec(values),
        }
    }
}

impl FromIterator<Value> for Record {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
