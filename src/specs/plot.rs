//! # Plot Specs
//!
//! One clause of a gnuplot `plot` command: what to plot, which columns, the
//! plot style, the legend label, tic labels and the line, point and fill
//! style options.

use serde::{Deserialize, Serialize};

use super::{
    FillSpecs, FillSpecsOf, Label, LineSpecs, LineSpecsOf, PointSpecs, PointSpecsOf, Specs,
};
use crate::config::SpecsConfig;
use crate::gnuplot::column::ColumnIndex;
use crate::gnuplot::format::{collapse_whitespace, option_value, trim_right};

fn default_line() -> LineSpecs {
    LineSpecs::new().line_width(SpecsConfig::DEFAULT.line_width)
}

/// Deserialize line options on top of the default line width, so a JSON
/// `"line"` object without `"width"` behaves like the builder setters.
fn deserialize_plot_line<'de, D>(deserializer: D) -> Result<LineSpecs, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let line = LineSpecs::deserialize(deserializer)?;
    if line.width().is_some() {
        return Ok(line);
    }
    Ok(line.line_width(SpecsConfig::DEFAULT.line_width))
}

/// Options for a single plotted element.
///
/// `what`, `using` and `with` are stored verbatim; the backend is the one
/// that validates them.
///
/// ## Example
///
/// ```
/// use plotspec::specs::{PlotSpecs, Specs};
///
/// let plot = PlotSpecs::new("'data.csv'", "1:2", "lines")
///     .label("Series A")
///     .xtics(1);
///
/// assert_eq!(
///     plot.repr(),
///     "'data.csv' using 1:2:xtic(stringcolumn(1)) title 'Series A' with lines lw 2 "
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSpecs {
    what: String,
    #[serde(default)]
    using: String,
    #[serde(default)]
    with: String,
    #[serde(default)]
    label: Label,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    xtic: Option<ColumnIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ytic: Option<ColumnIndex>,
    #[serde(default = "default_line", deserialize_with = "deserialize_plot_line")]
    line: LineSpecs,
    #[serde(default)]
    point: PointSpecs,
    #[serde(default)]
    fill: FillSpecs,
}

impl PlotSpecs {
    /// Create plot specs with the default style preset.
    ///
    /// - `what`: the data source or function, e.g. `"'data.csv'"`, `"sin(x)"`
    /// - `using`: the column selection, e.g. `"1:2"`, `"4:6:8:9"` (may be empty)
    /// - `with`: the plot style, e.g. `"lines"`, `"linespoints"`, `"dots"`
    pub fn new(what: impl Into<String>, using: impl Into<String>, with: impl Into<String>) -> Self {
        Self::with_config(&SpecsConfig::DEFAULT, what, using, with)
    }

    /// Create plot specs starting from a style preset.
    pub fn with_config(
        config: &SpecsConfig,
        what: impl Into<String>,
        using: impl Into<String>,
        with: impl Into<String>,
    ) -> Self {
        let mut point = PointSpecs::new();
        if let Some(size) = config.point_size {
            point = point.point_size(size);
        }
        Self {
            what: what.into(),
            using: using.into(),
            with: with.into(),
            label: Label::Auto,
            xtic: None,
            ytic: None,
            line: LineSpecs::new().line_width(config.line_width),
            point,
            fill: FillSpecs::new(),
        }
    }

    /// The plotted data source or function.
    pub fn what(&self) -> &str {
        &self.what
    }

    /// The active legend label mode.
    pub fn label_mode(&self) -> &Label {
        &self.label
    }

    /// Set the legend label to literal text.
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = Label::Text(text.into());
        self
    }

    /// Take the legend label from the header of the plotted column.
    pub fn label_from_column_header(mut self) -> Self {
        self.label = Label::ColumnHeader;
        self
    }

    /// Take the legend label from the header of the column at `index`.
    pub fn label_from_column_header_at(mut self, index: u32) -> Self {
        self.label = Label::IndexedColumnHeader(index);
        self
    }

    /// Leave this element out of the legend.
    pub fn label_none(mut self) -> Self {
        self.label = Label::Suppressed;
        self
    }

    /// Let the backend derive the legend label from the plot expression.
    pub fn label_default(mut self) -> Self {
        self.label = Label::Auto;
        self
    }

    /// Use the strings in column `column` as *x* tic labels.
    pub fn xtics(mut self, column: impl Into<ColumnIndex>) -> Self {
        self.xtic = Some(column.into());
        self
    }

    /// Use the strings in column `column` as *y* tic labels.
    pub fn ytics(mut self, column: impl Into<ColumnIndex>) -> Self {
        self.ytic = Some(column.into());
        self
    }

    /// The full `using` expression: the base column selection followed by
    /// the tic label columns, separated by `:`.
    ///
    /// Separators in the base selection are kept as written, except trailing
    /// ones. Unset tic columns add nothing.
    pub fn using_expr(&self) -> String {
        let mut expr = trim_right(&self.using, ':').to_string();
        let tics = [
            self.xtic.as_ref().map(|c| format!("xtic(stringcolumn({}))", c)),
            self.ytic.as_ref().map(|c| format!("ytic(stringcolumn({}))", c)),
        ];
        for tic in tics.into_iter().flatten() {
            if !expr.is_empty() {
                expr.push(':');
            }
            expr.push_str(&tic);
        }
        expr
    }
}

impl Specs for PlotSpecs {
    fn repr(&self) -> String {
        tracing::trace!(what = %self.what, label = ?self.label, "rendering plot clause");

        let mut s = String::new();
        s.push_str(&self.what);
        s.push(' ');
        s.push_str(&option_value("using", &self.using_expr()));
        s.push_str(&self.label.clause());
        s.push_str(&option_value("with", &self.with));
        s.push_str(&self.line.repr());
        s.push(' ');
        s.push_str(&self.point.repr());
        s.push(' ');
        s.push_str(&self.fill.repr());
        s.push(' ');
        collapse_whitespace(&s)
    }
}

impl LineSpecsOf for PlotSpecs {
    fn line_specs(&self) -> &LineSpecs {
        &self.line
    }

    fn line_specs_mut(&mut self) -> &mut LineSpecs {
        &mut self.line
    }
}

impl PointSpecsOf for PlotSpecs {
    fn point_specs(&self) -> &PointSpecs {
        &self.point
    }

    fn point_specs_mut(&mut self) -> &mut PointSpecs {
        &mut self.point
    }
}

impl FillSpecsOf for PlotSpecs {
    fn fill_specs(&self) -> &FillSpecs {
        &self.fill
    }

    fn fill_specs_mut(&mut self) -> &mut FillSpecs {
        &mut self.fill
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_using_without_tics() {
        let plot = PlotSpecs::new("'data.csv'", "1:2", "lines");
        assert_eq!(plot.using_expr(), "1:2");
    }

    #[test]
    fn test_using_empty_with_xtics() {
        let plot = PlotSpecs::new("'data.csv'", "", "boxes").xtics(1);
        assert_eq!(plot.using_expr(), "xtic(stringcolumn(1))");
    }

    #[test]
    fn test_using_with_both_tics() {
        let plot = PlotSpecs::new("'data.csv'", "2:3", "points")
            .xtics("Name")
            .ytics(4);
        assert_eq!(
            plot.using_expr(),
            "2:3:xtic(stringcolumn('Name')):ytic(stringcolumn(4))"
        );
    }

    #[test]
    fn test_using_only_ytics_has_no_gap() {
        let plot = PlotSpecs::new("'data.csv'", "1:2", "points").ytics(1);
        assert_eq!(plot.using_expr(), "1:2:ytic(stringcolumn(1))");
    }

    #[test]
    fn test_using_keeps_leading_and_embedded_separators() {
        let plot = PlotSpecs::new("'data.csv'", ":2::", "lines");
        assert_eq!(plot.using_expr(), ":2");
        let plot = PlotSpecs::new("'data.csv'", "1::3", "lines");
        assert_eq!(plot.using_expr(), "1::3");
    }

    #[test]
    fn test_tics_overwrite_per_axis() {
        let plot = PlotSpecs::new("'d'", "1", "lines")
            .xtics(1)
            .ytics(2)
            .xtics(3);
        assert_eq!(
            plot.using_expr(),
            "1:xtic(stringcolumn(3)):ytic(stringcolumn(2))"
        );
    }

    #[test]
    fn test_last_label_mode_wins() {
        let plot = PlotSpecs::new("sin(x)", "", "lines")
            .label("A")
            .label_from_column_header()
            .label_from_column_header_at(2)
            .label_none()
            .label_default();
        assert_eq!(plot.label_mode(), &Label::Auto);
        assert!(!plot.repr().contains("title"));

        let plot = plot.label_none().label("B");
        assert!(plot.repr().contains("title 'B'"));
        assert!(!plot.repr().contains("notitle"));

        let plot = plot.label_from_column_header_at(5);
        assert!(plot.repr().contains("title columnheader(5)"));
        assert!(!plot.repr().contains("'B'"));
    }

    #[test]
    fn test_label_none_renders_notitle() {
        let plot = PlotSpecs::new("sin(x)", "", "lines").label_none();
        assert_eq!(plot.repr(), "sin(x) notitle with lines lw 2 ");
    }

    #[test]
    fn test_repr_clause_order() {
        let repr = PlotSpecs::new("'data.csv'", "1:2", "lines")
            .label("A")
            .repr();
        let positions: Vec<usize> = ["'data.csv'", "using 1:2", "title 'A'", "with lines"]
            .iter()
            .map(|needle| repr.find(needle).expect(needle))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", repr);
    }

    #[test]
    fn test_repr_is_idempotent() {
        let plot = PlotSpecs::new("'data.csv'", "1:2", "boxes")
            .label_from_column_header()
            .fill_density(0.5)
            .point_type(3);
        assert_eq!(plot.repr(), plot.repr());
    }

    #[test]
    fn test_repr_collapses_whitespace() {
        let plot = PlotSpecs::new("f(x)", "", "");
        assert_eq!(plot.repr(), "f(x) lw 2 ");
    }

    #[test]
    fn test_repr_with_all_families() {
        let plot = PlotSpecs::new("'data.csv'", "1:2", "boxes")
            .label("Counts")
            .line_color("black")
            .point_size(2.0)
            .fill_density(0.3)
            .border_show(true);
        assert_eq!(
            plot.repr(),
            "'data.csv' using 1:2 title 'Counts' with boxes lw 2 lc rgb 'black' ps 2 fs solid 0.3 border "
        );
    }

    #[test]
    fn test_with_config_applies_preset() {
        let plot = PlotSpecs::with_config(&SpecsConfig::PRESENTATION, "x", "", "points");
        assert_eq!(plot.line_specs().width(), Some(3.0));
        assert_eq!(plot.point_specs().size(), Some(1.5));
    }

    #[test]
    fn test_deserialize_defaults() {
        let plot: PlotSpecs = serde_json::from_str(r#"{"what": "sin(x)"}"#).unwrap();
        assert_eq!(plot, PlotSpecs::new("sin(x)", "", ""));
    }

    #[test]
    fn test_deserialize_line_keeps_default_width() {
        let plot: PlotSpecs =
            serde_json::from_str(r#"{"what": "sin(x)", "line": {"color": "red"}}"#).unwrap();
        assert_eq!(plot, PlotSpecs::new("sin(x)", "", "").line_color("red"));
        assert_eq!(plot.repr(), "sin(x) lw 2 lc rgb 'red' ");
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "what": "'data.csv'",
            "using": "1:2",
            "with": "lines",
            "label": {"text": "A"},
            "xtic": "Name",
            "line": {"width": 1, "color": "red"}
        }"#;
        let plot: PlotSpecs = serde_json::from_str(json).unwrap();
        let expected = PlotSpecs::new("'data.csv'", "1:2", "lines")
            .label("A")
            .xtics("Name")
            .line_width(1.0)
            .line_color("red");
        assert_eq!(plot, expected);
    }
}
