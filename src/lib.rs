//! # Csvbuf - In-Memory Tabular Record Container
//!
//! Csvbuf is a schema-fixed, row-oriented record container: a named, ordered
//! set of columns holding an ordered sequence of equal-width records. Think
//! of it as a lightweight in-memory CSV buffer with no backing file or
//! database.
//!
//! ## Quick Start
//!
//! ```
//! use csvbuf::{record, Criteria, Table, Value};
//!
//! let mut table = Table::with_columns(["id", "first name", "last name"])?;
//! table.add(record![1, "John", "Carter"])?;
//! table.add(record![2, "John", "Dupond"])?;
//!
//! // Equality selection.
//! let johns = table.select(&Criteria::new().equals("first name", "John"))?;
//! assert_eq!(johns.len(), 2);
//!
//! // Pattern selection, anchored at the start of the value.
//! let c_or_d = table.select(&Criteria::new().matches("last name", "^(C|D)"))?;
//! assert_eq!(c_or_d.len(), 2);
//!
//! // Predicate selection.
//! let small_ids = table.select(
//!     &Criteria::new().satisfies("id", |v| matches!(v, Value::Int(i) if *i < 2)),
//! )?;
//! assert_eq!(small_ids.len(), 1);
//! # Ok::<(), csvbuf::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Public API (Table)         │
//! ├─────────────────────────────────────┤
//! │  Header Index  │  Selection Engine  │
//! ├────────────────┼────────────────────┤
//! │  Record Store  │ Rendering Strategy │
//! ├─────────────────────────────────────┤
//! │       Dynamic Values (Value)        │
//! └─────────────────────────────────────┘
//! ```
//!
//! - **Header Index**: column name to offset, built once at construction,
//!   never mutated.
//! - **Record Store**: ordered, index-addressable, mutable record sequence;
//!   every record has exactly the header's width.
//! - **Selection Engine**: AND-combined per-column criteria under three
//!   comparison kinds (equality, anchored pattern match, predicate).
//! - **Rendering Strategy**: replaceable record-to-string function; the
//!   whole-container `Display` joins rendered records with newlines.
//!
//! ## Module Overview
//!
//! - [`table`]: the container and its views
//! - [`header`]: ordered unique column names and the position index
//! - [`record`]: fixed-width row of values
//! - [`select`]: criteria construction and evaluation
//! - [`value`]: dynamic value representation
//! - [`error`]: the failure taxonomy
//!
//! ## Scope
//!
//! No file I/O, no CSV parsing or writing, no type coercion, no persistence,
//! no concurrency control, no indexing beyond column-name lookup. Callers
//! sharing a table across threads supply their own mutual exclusion.

pub mod error;
pub mod header;
pub mod record;
pub mod select;
pub mod table;
pub mod value;

mod macros;

pub use error::{Error, Result};
pub use header::Header;
pub use record::Record;
pub use select::{Criteria, Criterion};
pub use table::{default_formatter, Formatter, Table};
pub use value::Value;
