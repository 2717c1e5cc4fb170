//! # Line Specs
//!
//! Line style options: style index, type, width, color and dash pattern.

use serde::{Deserialize, Serialize};

use super::{Specs, join_tokens};
use crate::gnuplot::format::{number, quoted};

/// Line style options of a plot element.
///
/// All options start unset; unset options are left out of the output so the
/// backend's own defaults apply.
///
/// ## Example
///
/// ```
/// use plotspec::specs::{LineSpecs, LineSpecsOf, Specs};
///
/// let line = LineSpecs::new().line_width(1.5).line_color("red").dash_type(2);
/// assert_eq!(line.repr(), "lw 1.5 lc rgb 'red' dt 2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSpecs {
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dash: Option<u32>,
}

impl LineSpecs {
    /// Create line specs with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured line width, if any.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// The configured line color, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

impl Specs for LineSpecs {
    fn repr(&self) -> String {
        join_tokens(&[
            self.style.map(|v| format!("ls {}", v)).unwrap_or_default(),
            self.kind.map(|v| format!("lt {}", v)).unwrap_or_default(),
            self.width
                .map(|v| format!("lw {}", number(v)))
                .unwrap_or_default(),
            self.color
                .as_deref()
                .map(|c| format!("lc rgb {}", quoted(c)))
                .unwrap_or_default(),
            self.dash.map(|v| format!("dt {}", v)).unwrap_or_default(),
        ])
    }
}

/// Capability trait: builders that embed [`LineSpecs`].
///
/// Implementors only provide access to the embedded value; the chained
/// setters come for free.
pub trait LineSpecsOf: Sized {
    /// Access the embedded line specs.
    fn line_specs(&self) -> &LineSpecs;

    /// Mutable access to the embedded line specs.
    fn line_specs_mut(&mut self) -> &mut LineSpecs;

    /// Use a predefined line style (`set style line <n>`).
    fn line_style(mut self, value: u32) -> Self {
        self.line_specs_mut().style = Some(value);
        self
    }

    /// Set the line type.
    fn line_type(mut self, value: i32) -> Self {
        self.line_specs_mut().kind = Some(value);
        self
    }

    /// Set the line width.
    fn line_width(mut self, value: f64) -> Self {
        self.line_specs_mut().width = Some(value);
        self
    }

    /// Set the line color: a name (`"red"`) or hex string (`"#ff0000"`).
    fn line_color(mut self, value: impl Into<String>) -> Self {
        self.line_specs_mut().color = Some(value.into());
        self
    }

    /// Set the dash type.
    fn dash_type(mut self, value: u32) -> Self {
        self.line_specs_mut().dash = Some(value);
        self
    }
}

impl LineSpecsOf for LineSpecs {
    fn line_specs(&self) -> &LineSpecs {
        self
    }

    fn line_specs_mut(&mut self) -> &mut LineSpecs {
        self
    }
}
