//! # Tabular Record Container
//!
//! [`Table`] is the aggregate root: a fixed [`Header`], an ordered mutable
//! sequence of [`Record`]s, and a replaceable record formatter. It behaves
//! like a lightweight in-memory CSV buffer with no backing file.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │                Table                 │
//! ├──────────────────────────────────────┤
//! │ Header (names + name→offset index)   │  fixed at construction
//! ├──────────────────────────────────────┤
//! │ Records (ordered, index-addressable) │  add / set / remove / clear
//! ├──────────────────────────────────────┤
//! │ Formatter (record → display string)  │  replaceable strategy
//! └──────────────────────────────────────┘
//! ```
//!
//! ## Access Paths
//!
//! The container exposes two explicit capability sets instead of one surface
//! pretending to be both a list and a map:
//!
//! - **Indexed sequence operations**: `get`, `set`, `remove`, `len`, `iter`.
//! - **Column-oriented views**: `columns`, `column_values`, `entries`,
//!   `value_columns`, `value_of`.
//!
//! ## Iteration
//!
//! `iter()` is a lazy, restartable traversal in storage order. Mutating the
//! table while an iterator is live is rejected by the borrow checker, so the
//! undefined mutate-during-traversal case cannot be expressed.
//!
//! ## Thread Safety
//!
//! The container is single-owner and synchronous. It holds no locks; callers
//! sharing a table across threads must supply external mutual exclusion.

use crate::error::{Error, Result};
use crate::header::Header;
use crate::record::Record;
use crate::select::Criteria;
use crate::value::Value;
use std::fmt;

/// Record formatter: maps a record and the header to a display string.
pub type Formatter = Box<dyn Fn(&Record, &Header) -> String>;

/// Minimum width the default formatter right-justifies column names to.
const NAME_JUSTIFY_WIDTH: usize = 20;

/// Default record formatter.
///
/// Renders one line per column in header order, each
/// `"<name right-justified to 20>: <value>"`, joined by newlines.
pub fn default_formatter(record: &Record, header: &Header) -> String {
    let lines: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>width$}: {}", name, record[i], width = NAME_JUSTIFY_WIDTH))
        .collect();
    lines.join("\n")
}

/// Schema-fixed, in-memory tabular record container.
///
/// ```
/// use csvbuf::{record, Criteria, Header, Table};
///
/// let mut table = Table::new(Header::new(["id", "first name", "last name"])?);
/// table.add(record![1, "John", "Carter"])?;
/// table.add(record![2, "John", "Dupond"])?;
///
/// let johns = table.select(&Criteria::new().equals("first name", "John"))?;
/// assert_eq!(johns.len(), 2);
/// # Ok::<(), csvbuf::Error>(())
/// ```
pub struct Table {
    header: Header,
    records: Vec<Record>,
    formatter: Formatter,
}

impl Table {
    /// Creates an empty table over the given header.
    pub fn new(header: Header) -> Self {
        Self {
            header,
            records: Vec::new(),
            formatter: Box::new(default_formatter),
        }
    }

    /// Creates an empty table directly from column names.
    ///
    /// Fails with [`Error::DuplicateColumn`] if a name repeats.
    pub fn with_columns<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(Header::new(names)?))
    }

    /// Returns the table's header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the column names in declaration order.
    pub fn columns(&self) -> &[String] {
        self.header.names()
    }

    // ------------------------------------------------------------------
    // Record store
    // ------------------------------------------------------------------

    /// Appends a record.
    ///
    /// Fails with [`Error::RecordWidth`] if the record's width does not
    /// match the header; the store is unchanged on failure. Value types are
    /// not checked.
    pub fn add(&mut self, record: impl Into<Record>) -> Result<()> {
        let record = record.into();
        self.check_width(&record)?;
        self.records.push(record);
        Ok(())
    }

    /// Removes every record. Header and formatter are unaffected.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns the record at the given index.
    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Replaces the record at the given index.
    ///
    /// Enforces the same width invariant as [`add`](Table::add).
    pub fn set(&mut self, index: usize, record: impl Into<Record>) -> Result<()> {
        let record = record.into();
        self.check_width(&record)?;
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange {
                index,
                len: self.records.len(),
            }),
        }
    }

    /// Removes and returns the record at the given index. Remaining records
    /// keep their relative order.
    pub fn remove(&mut self, index: usize) -> Result<Record> {
        if index >= self.records.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Returns the current record count.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    // ------------------------------------------------------------------
    // Column views
    // ------------------------------------------------------------------

    /// Returns the given column's value across all records, in store order.
    ///
    /// Resolves the column name once, then scans every record.
    pub fn column_values(&self, name: &str) -> Result<Vec<&Value>> {
        let offset = self.header.position(name)?;
        Ok(self.records.iter().map(|record| &record[offset]).collect())
    }

    /// Returns `(name, values)` pairs for every column, in header order.
    pub fn entries(&self) -> Vec<(&str, Vec<&Value>)> {
        self.header
            .iter()
            .enumerate()
            .map(|(offset, name)| {
                let values = self.records.iter().map(|record| &record[offset]).collect();
                (name.as_str(), values)
            })
            .collect()
    }

    /// Returns every column's values in header order, names omitted.
    pub fn value_columns(&self) -> Vec<Vec<&Value>> {
        self.header
            .iter()
            .enumerate()
            .map(|(offset, _)| self.records.iter().map(|record| &record[offset]).collect())
            .collect()
    }

    /// Returns a record's value for the given column.
    ///
    /// The record must have this table's width (any record obtained from the
    /// table does). Fails with [`Error::UnknownColumn`] for an undeclared
    /// name.
    pub fn value_of<'r>(&self, record: &'r Record, name: &str) -> Result<&'r Value> {
        let offset = self.header.position(name)?;
        Ok(&record[offset])
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Returns the records satisfying every criterion, in store order.
    ///
    /// An empty criteria set selects every record. Column names are resolved
    /// and patterns compiled before any record is visited, so
    /// [`Error::UnknownColumn`] and [`Error::InvalidPattern`] surface even
    /// with zero stored records. Selection never mutates the store; the
    /// result references the underlying records.
    pub fn select(&self, criteria: &Criteria) -> Result<Vec<&Record>> {
        let compiled = criteria.compile(&self.header)?;
        Ok(self
            .records
            .iter()
            .filter(|record| compiled.matches(record))
            .collect())
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Replaces the record formatter.
    pub fn set_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(&Record, &Header) -> String + 'static,
    {
        self.formatter = Box::new(formatter);
    }

    /// Returns the active record formatter.
    pub fn formatter(&self) -> &dyn Fn(&Record, &Header) -> String {
        self.formatter.as_ref()
    }

    /// Renders every record with the active formatter, in store order.
    pub fn render(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| (self.formatter)(record, &self.header))
            .collect()
    }

    fn check_width(&self, record: &Record) -> Result<()> {
        if record.len() != self.header.len() {
            return Err(Error::RecordWidth {
                expected: self.header.len(),
                found: record.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().join("\n"))
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("header", &self.header)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    fn sample() -> Table {
        let mut table = Table::with_columns(["id", "first name", "last name"]).unwrap();
        table.add(record![1, "John", "Carter"]).unwrap();
        table.add(record![2, "John", "Dupond"]).unwrap();
        table
    }

    #[test]
    fn add_enforces_width() {
        let mut table = sample();
        let err = table.add(record![1, 2, 3, 4]).unwrap_err();
        assert!(err.is_record_width());
        // A failed add leaves the store untouched.
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn get_set_remove_round_trip() {
        let mut table = sample();

        table.set(0, record![3, "John", "Dupond"]).unwrap();
        assert_eq!(table.get(0).unwrap(), &record![3, "John", "Dupond"]);

        let removed = table.remove(1).unwrap();
        assert_eq!(removed, record![2, "John", "Dupond"]);
        assert_eq!(table.len(), 1);

        assert!(table.get(5).unwrap_err().is_index_out_of_range());
        assert!(table.remove(1).unwrap_err().is_index_out_of_range());
        assert!(table
            .set(9, record![1, "a", "b"])
            .unwrap_err()
            .is_index_out_of_range());
    }

    #[test]
    fn set_checks_width_before_index() {
        let mut table = sample();
        let err = table.set(0, record![1]).unwrap_err();
        assert!(err.is_record_width());
        assert_eq!(table.get(0).unwrap(), &record![1, "John", "Carter"]);
    }

    #[test]
    fn clear_keeps_header_and_formatter() {
        let mut table = sample();
        table.set_formatter(|_, _| "custom".to_string());
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 3);

        table.add(record![9, "a", "b"]).unwrap();
        assert_eq!(table.render(), ["custom"]);
    }

    #[test]
    fn iteration_is_restartable() {
        let table = sample();
        let mut seen = 0;
        for _ in &table {
            seen += 1;
        }
        for _ in &table {
            seen += 1;
        }
        assert_eq!(seen, 2 * table.len());
    }

    #[test]
    fn column_views() {
        let table = sample();
        let ids = table.column_values("id").unwrap();
        assert_eq!(ids, [&Value::Int(1), &Value::Int(2)]);

        let entries = table.entries();
        assert_eq!(entries[0].0, "id");
        assert_eq!(entries[0].1, [&Value::Int(1), &Value::Int(2)]);
        assert_eq!(entries[1].0, "first name");
        assert_eq!(
            entries[1].1,
            [&Value::Text("John".into()), &Value::Text("John".into())]
        );

        let values = table.value_columns();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], [&Value::Int(1), &Value::Int(2)]);

        assert!(table.column_values("nope").unwrap_err().is_unknown_column());
    }

    #[test]
    fn value_of_resolves_by_name() {
        let table = sample();
        let record = table.get(1).unwrap();
        assert_eq!(table.value_of(record, "id").unwrap(), &Value::Int(2));
        assert!(table
            .value_of(record, "power")
            .unwrap_err()
            .is_unknown_column());
    }

    #[test]
    fn default_formatter_output() {
        let mut table = Table::with_columns(["id", "first", "last"]).unwrap();
        table.add(record![1, "John", "Carter"]).unwrap();

        let rendered = table.render();
        assert_eq!(rendered.len(), 1);
        let expected = format!(
            "{:>20}: 1\n{:>20}: John\n{:>20}: Carter",
            "id", "first", "last"
        );
        assert_eq!(rendered[0], expected);
    }

    #[test]
    fn display_joins_rendered_records() {
        let mut table = sample();
        table.set_formatter(|record, header| {
            header
                .iter()
                .enumerate()
                .map(|(i, name)| format!("{}={}", name, record[i]))
                .collect::<Vec<_>>()
                .join(",")
        });
        assert_eq!(
            table.to_string(),
            "id=1,first name=John,last name=Carter\nid=2,first name=John,last name=Dupond"
        );
    }

    #[test]
    fn empty_table_renders_empty_string() {
        let table = Table::with_columns(["a"]).unwrap();
        assert_eq!(table.to_string(), "");
        assert!(table.render().is_empty());
    }
}
