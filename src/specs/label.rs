//! # Legend Labels
//!
//! The legend entry of a plot clause has exactly one active mode. Modelling
//! it as an enum makes "last setter wins" the only possible behavior.

use serde::{Deserialize, Serialize};

use crate::gnuplot::format::{option_value, quoted};

/// Legend label mode of a plot clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// No override; gnuplot derives the label from the plot expression
    #[default]
    Auto,
    /// Literal legend text
    Text(String),
    /// Text from the header of the plotted column
    ColumnHeader,
    /// Text from the header of the column with this index
    IndexedColumnHeader(u32),
    /// No legend entry at all
    #[serde(rename = "none")]
    Suppressed,
}

impl Label {
    /// The title clause for this mode, with a trailing space, or an empty
    /// string for [`Label::Auto`].
    ///
    /// ## Example
    ///
    /// ```
    /// use plotspec::specs::Label;
    ///
    /// assert_eq!(Label::Text("A".into()).clause(), "title 'A' ");
    /// assert_eq!(Label::IndexedColumnHeader(3).clause(), "title columnheader(3) ");
    /// assert_eq!(Label::Suppressed.clause(), "notitle ");
    /// assert_eq!(Label::Auto.clause(), "");
    /// ```
    pub fn clause(&self) -> String {
        match self {
            Label::Auto => String::new(),
            Label::Text(text) => option_value("title", &quoted(text)),
            Label::ColumnHeader => option_value("title", "columnheader"),
            Label::IndexedColumnHeader(index) => {
                option_value("title", &format!("columnheader({})", index))
            }
            Label::Suppressed => "notitle ".to_string(),
        }
    }
}
