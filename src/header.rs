//! # Header Index
//!
//! A [`Header`] is the ordered, unique list of column names that fixes a
//! table's structure. It is built once, validated for duplicate names at
//! construction, and never mutated afterwards.
//!
//! Alongside the ordered names the header keeps a name-to-offset map so
//! every name-based operation resolves a column in O(1). The map is a pure
//! function of the name list and is derived exactly once.

use crate::error::{Error, Result};
use hashbrown::HashMap;

/// Ordered, unique column names plus the derived name-to-offset index.
#[derive(Debug, Clone)]
pub struct Header {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Header {
    /// Builds a header from an ordered list of column names.
    ///
    /// Fails with [`Error::DuplicateColumn`] naming the first repeated
    /// column if any name appears more than once.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut counts: HashMap<&str, usize> = HashMap::with_capacity(names.len());
        for name in &names {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }
        // Report the first duplicated name in declaration order, not the
        // name whose second occurrence comes first.
        for name in &names {
            if counts[name.as_str()] > 1 {
                return Err(Error::DuplicateColumn(name.clone()));
            }
        }

        drop(counts);

        let positions = names
            .iter()
            .enumerate()
            .map(|(pos, name)| (name.clone(), pos))
            .collect();
        Ok(Self { names, positions })
    }

    /// Resolves a column name to its zero-based offset.
    ///
    /// Fails with [`Error::UnknownColumn`] if the name is not declared.
    pub fn position(&self, name: &str) -> Result<usize> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))
    }

    /// Returns true if the header declares the given column.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Returns the column names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the header declares no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the column names in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a Header {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_declaration_order() {
        let header = Header::new(["id", "first name", "last name"]).unwrap();
        assert_eq!(header.len(), 3);
        assert_eq!(header.position("id").unwrap(), 0);
        assert_eq!(header.position("first name").unwrap(), 1);
        assert_eq!(header.position("last name").unwrap(), 2);
    }

    #[test]
    fn duplicate_name_rejected() {
        let err = Header::new(["id", "toto", "toto"]).unwrap_err();
        match err {
            Error::DuplicateColumn(name) => assert_eq!(name, "toto"),
            other => panic!("expected DuplicateColumn, got {other:?}"),
        }
    }

    #[test]
    fn first_offender_is_named() {
        let err = Header::new(["a", "b", "a", "b"]).unwrap_err();
        match err {
            Error::DuplicateColumn(name) => assert_eq!(name, "a"),
            other => panic!("expected DuplicateColumn, got {other:?}"),
        }
    }

    #[test]
    fn first_offender_follows_declaration_order() {
        // "b" is declared first even though "a" repeats earlier.
        let err = Header::new(["b", "a", "a", "b"]).unwrap_err();
        match err {
            Error::DuplicateColumn(name) => assert_eq!(name, "b"),
            other => panic!("expected DuplicateColumn, got {other:?}"),
        }
    }

    #[test]
    fn unknown_name_rejected() {
        let header = Header::new(["id"]).unwrap();
        assert!(header.position("power").unwrap_err().is_unknown_column());
        assert!(!header.contains("power"));
        assert!(header.contains("id"));
    }

    #[test]
    fn empty_header_is_valid() {
        let header = Header::new(Vec::<String>::new()).unwrap();
        assert!(header.is_empty());
        assert_eq!(header.len(), 0);
    }

    #[test]
    fn iteration_yields_names_in_order() {
        let header = Header::new(["x", "y"]).unwrap();
        let collected: Vec<&String> = header.iter().collect();
        assert_eq!(collected, ["x", "y"]);
    }
}
