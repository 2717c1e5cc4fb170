//! # Fill Specs
//!
//! Area fill options for filled plot styles (`boxes`, `filledcurves`, ...).

use serde::{Deserialize, Serialize};

use super::{Specs, join_tokens};
use crate::gnuplot::format::{number, quoted};

/// How an area is filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStyle {
    /// No fill
    Empty,
    /// Solid fill with optional density in `0.0..=1.0`
    Solid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        density: Option<f64>,
    },
    /// Hatch pattern by index
    Pattern(u32),
}

/// Fill options of a plot element.
///
/// ## Example
///
/// ```
/// use plotspec::specs::{FillSpecs, FillSpecsOf, Specs};
///
/// let fill = FillSpecs::new()
///     .fill_density(0.4)
///     .fill_transparent(true)
///     .border_show(false)
///     .fill_color("gray");
/// assert_eq!(fill.repr(), "fs transparent solid 0.4 noborder fc rgb 'gray'");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillSpecs {
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<FillStyle>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    transparent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    border: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl FillSpecs {
    /// Create fill specs with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured fill style, if any.
    pub fn style(&self) -> Option<FillStyle> {
        self.style
    }

    /// The `fs ...` part of the clause.
    fn fillstyle_tokens(&self) -> Vec<String> {
        if self.style.is_none() && self.border.is_none() {
            return Vec::new();
        }

        let mut tokens = vec!["fs".to_string()];
        // gnuplot only accepts `transparent` directly before `solid` or `pattern`
        let transparent = self.transparent && !matches!(self.style, None | Some(FillStyle::Empty));
        if transparent {
            tokens.push("transparent".into());
        }
        match self.style {
            Some(FillStyle::Empty) => tokens.push("empty".into()),
            Some(FillStyle::Solid { density: Some(d) }) => {
                tokens.push(format!("solid {}", number(d)))
            }
            Some(FillStyle::Solid { density: None }) => tokens.push("solid".into()),
            Some(FillStyle::Pattern(n)) => tokens.push(format!("pattern {}", n)),
            None => {}
        }
        match self.border {
            Some(true) => tokens.push("border".into()),
            Some(false) => tokens.push("noborder".into()),
            None => {}
        }
        tokens
    }
}

impl Specs for FillSpecs {
    fn repr(&self) -> String {
        let mut tokens = self.fillstyle_tokens();
        if let Some(color) = &self.color {
            tokens.push(format!("fc rgb {}", quoted(color)));
        }
        join_tokens(&tokens)
    }
}

/// Capability trait: builders that embed [`FillSpecs`].
pub trait FillSpecsOf: Sized {
    /// Access the embedded fill specs.
    fn fill_specs(&self) -> &FillSpecs;

    /// Mutable access to the embedded fill specs.
    fn fill_specs_mut(&mut self) -> &mut FillSpecs;

    /// Fill solid. Keeps a density set earlier.
    fn fill_solid(mut self) -> Self {
        let specs = self.fill_specs_mut();
        if !matches!(specs.style, Some(FillStyle::Solid { .. })) {
            specs.style = Some(FillStyle::Solid { density: None });
        }
        self
    }

    /// Fill solid with the given density, clamped to `0.0..=1.0`.
    ///
    /// `NaN` is not clamped and renders as `solid NaN`.
    fn fill_density(mut self, value: f64) -> Self {
        self.fill_specs_mut().style = Some(FillStyle::Solid {
            density: Some(value.clamp(0.0, 1.0)),
        });
        self
    }

    /// Fill with a hatch pattern.
    fn fill_pattern(mut self, value: u32) -> Self {
        self.fill_specs_mut().style = Some(FillStyle::Pattern(value));
        self
    }

    /// Do not fill.
    fn fill_empty(mut self) -> Self {
        self.fill_specs_mut().style = Some(FillStyle::Empty);
        self
    }

    /// Make solid or pattern fills transparent.
    fn fill_transparent(mut self, value: bool) -> Self {
        self.fill_specs_mut().transparent = value;
        self
    }

    /// Set the fill color.
    fn fill_color(mut self, value: impl Into<String>) -> Self {
        self.fill_specs_mut().color = Some(value.into());
        self
    }

    /// Show or hide the border of filled areas.
    fn border_show(mut self, value: bool) -> Self {
        self.fill_specs_mut().border = Some(value);
        self
    }
}

impl FillSpecsOf for FillSpecs {
    fn fill_specs(&self) -> &FillSpecs {
        self
    }

    fn fill_specs_mut(&mut self) -> &mut FillSpecs {
        self
    }
}
