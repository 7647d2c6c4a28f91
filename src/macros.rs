//! # Constructor Macros
//!
//! ## record!
//!
//! Builds a [`Record`](crate::Record) from a heterogeneous list of literals,
//! converting each through `Value::from`:
//!
//! ```
//! use csvbuf::record;
//!
//! let rec = record![1, "John", "Carter"];
//! assert_eq!(rec.len(), 3);
//! ```

/// Builds a `Record` from a comma-separated list of values.
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut rec = $crate::Record::new();
        $(rec.push($crate::Value::from($value));)+
        rec
    }};
}
