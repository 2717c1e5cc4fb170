//! # Plot Script
//!
//! The root container: a legend box setting plus the clauses of one `plot`
//! command.

use serde::{Deserialize, Serialize};

use crate::error::PlotSpecError;
use crate::specs::{BoxSpecs, PlotSpecs, Specs};

/// A gnuplot script fragment made of an optional `set key` line and one
/// `plot` command.
///
/// ## Example
///
/// ```
/// use plotspec::script::Script;
/// use plotspec::specs::*;
///
/// let script = Script::new()
///     .key(BoxSpecs::new().line_width(1.0))
///     .plot(PlotSpecs::new("'data.csv'", "1:2", "lines").label("A"))
///     .plot(PlotSpecs::new("sin(x)", "", "lines").label_none());
///
/// assert_eq!(
///     script.render()?,
///     "set key box lw 1\nplot 'data.csv' using 1:2 title 'A' with lines lw 2, sin(x) notitle with lines lw 2\n"
/// );
/// # Ok::<(), plotspec::PlotSpecError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<BoxSpecs>,
    #[serde(default)]
    plots: Vec<PlotSpecs>,
}

impl Script {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the legend box.
    pub fn key(mut self, key: BoxSpecs) -> Self {
        self.key = Some(key);
        self
    }

    /// Add a plot clause.
    pub fn plot(mut self, plot: PlotSpecs) -> Self {
        self.plots.push(plot);
        self
    }

    /// Add multiple plot clauses.
    pub fn plots<I>(mut self, plots: I) -> Self
    where
        I: IntoIterator<Item = PlotSpecs>,
    {
        self.plots.extend(plots);
        self
    }

    /// Number of plot clauses.
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    /// Whether the script has no plot clauses.
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Parse a script from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, PlotSpecError> {
        let script: Script = serde_json::from_str(json)?;
        tracing::debug!(
            plots = script.plots.len(),
            key = script.key.is_some(),
            "loaded script from JSON"
        );
        Ok(script)
    }

    /// Serialize the script to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PlotSpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the script as gnuplot text, one command per line.
    pub fn render(&self) -> Result<String, PlotSpecError> {
        if self.plots.is_empty() {
            return Err(PlotSpecError::EmptyScript);
        }

        let mut out = String::new();
        if let Some(key) = &self.key {
            out.push_str("set key ");
            out.push_str(key.repr().trim_end());
            out.push('\n');
        }

        let clauses: Vec<String> = self
            .plots
            .iter()
            .map(|plot| plot.repr().trim_end().to_string())
            .collect();
        out.push_str("plot ");
        out.push_str(&clauses.join(", "));
        out.push('\n');

        tracing::debug!(clauses = clauses.len(), bytes = out.len(), "rendered script");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{BoxSpecsOf, LineSpecsOf};

    #[test]
    fn test_empty_script_is_error() {
        let err = Script::new().render().unwrap_err();
        assert!(matches!(err, PlotSpecError::EmptyScript));
        assert!(Script::new().is_empty());
    }

    #[test]
    fn test_single_plot_without_key() {
        let script = Script::new().plot(PlotSpecs::new("sin(x)", "", "lines"));
        assert_eq!(script.render().unwrap(), "plot sin(x) with lines lw 2\n");
        assert_eq!(script.len(), 1);
    }

    #[test]
    fn test_hidden_key() {
        let script = Script::new()
            .key(BoxSpecs::new().show(false))
            .plot(PlotSpecs::new("x", "", "points"));
        assert_eq!(script.render().unwrap(), "set key nobox\nplot x with points lw 2\n");
    }

    #[test]
    fn test_key_without_line_specs() {
        let script = Script::new()
            .key(BoxSpecs::new())
            .plot(PlotSpecs::new("x", "", "points"));
        assert!(script.render().unwrap().starts_with("set key box\n"));
    }

    #[test]
    fn test_plots_extend() {
        let script = Script::new().plots(vec![
            PlotSpecs::new("a", "", "lines"),
            PlotSpecs::new("b", "", "lines").line_width(1.0),
        ]);
        assert_eq!(
            script.render().unwrap(),
            "plot a with lines lw 2, b with lines lw 1\n"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let script = Script::new()
            .key(BoxSpecs::new().line_color("gray"))
            .plot(PlotSpecs::new("'d.csv'", "1:2", "lines").label("A").xtics(1));
        let json = script.to_json().unwrap();
        let parsed = Script::from_json(&json).unwrap();
        assert_eq!(parsed, script);
        assert_eq!(parsed.render().unwrap(), script.render().unwrap());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        let err = Script::from_json(r#"{"plots": [{"using": "1:2"}]}"#).unwrap_err();
        assert!(matches!(err, PlotSpecError::Json(_)));
    }
}
