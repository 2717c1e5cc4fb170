//! # Column References
//!
//! gnuplot addresses data-file columns either by 1-based number or by the
//! name found in the column header row.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a data column.
///
/// Renders as a bare number (`2`) or a single-quoted name (`'Price'`), which
/// is what gnuplot's `column()`/`stringcolumn()` functions accept.
///
/// ## Example
///
/// ```
/// use plotspec::gnuplot::column::ColumnIndex;
///
/// assert_eq!(ColumnIndex::from(3).to_string(), "3");
/// assert_eq!(ColumnIndex::from("Country").to_string(), "'Country'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnIndex {
    /// Column number: 1-based, with gnuplot's pseudo-columns `0` (row
    /// index) and `-1`/`-2` (block and dataset index)
    Number(i32),
    /// Column header name
    Name(String),
}

impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnIndex::Number(n) => write!(f, "{}", n),
            ColumnIndex::Name(name) => f.write_str(&super::format::quoted(name)),
        }
    }
}

impl From<i32> for ColumnIndex {
    fn from(value: i32) -> Self {
        ColumnIndex::Number(value)
    }
}

impl From<&str> for ColumnIndex {
    fn from(value: &str) -> Self {
        ColumnIndex::Name(value.to_string())
    }
}

impl From<String> for ColumnIndex {
    fn from(value: String) -> Self {
        ColumnIndex::Name(value)
    }
}

impl std::str::FromStr for ColumnIndex {
    type Err = std::convert::Infallible;

    /// Numeric strings become column numbers, anything else a column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i32>() {
            Ok(n) => ColumnIndex::Number(n),
            Err(_) => ColumnIndex::Name(s.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_renders_bare() {
        assert_eq!(ColumnIndex::Number(1).to_string(), "1");
    }

    #[test]
    fn test_name_renders_quoted() {
        assert_eq!(ColumnIndex::from("Name").to_string(), "'Name'");
        assert_eq!(ColumnIndex::from("O'Hara".to_string()).to_string(), "'O''Hara'");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("4".parse::<ColumnIndex>().unwrap(), ColumnIndex::Number(4));
        assert_eq!(
            "Year".parse::<ColumnIndex>().unwrap(),
            ColumnIndex::Name("Year".into())
        );
    }

    #[test]
    fn test_deserialize_untagged() {
        let n: ColumnIndex = serde_json::from_str("2").unwrap();
        let s: ColumnIndex = serde_json::from_str("\"Label\"").unwrap();
        assert_eq!(n, ColumnIndex::Number(2));
        assert_eq!(s, ColumnIndex::Name("Label".into()));
    }
}
