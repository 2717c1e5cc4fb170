//! # gnuplot Script Dialect
//!
//! Low-level helpers for spelling gnuplot script fragments. The builders in
//! [`crate::specs`] use these to assemble their clauses.
//!
//! ## Module Structure
//!
//! - [`format`]: option clauses, quoting, whitespace and separator cleanup
//! - [`column`]: column references for `stringcolumn(...)` and friends
//!
//! ## Usage Example
//!
//! ```
//! use plotspec::gnuplot::{column::ColumnIndex, format};
//!
//! let mut clause = String::new();
//! clause.push_str("'data.csv' ");
//! clause.push_str(&format::option_value("using", "1:2"));
//! clause.push_str(&format::option_value("title", &format::quoted("Series A")));
//! clause.push_str(&format::option_value("with", "lines"));
//!
//! assert_eq!(clause, "'data.csv' using 1:2 title 'Series A' with lines ");
//! assert_eq!(ColumnIndex::from("Name").to_string(), "'Name'");
//! ```

pub mod column;
pub mod format;
