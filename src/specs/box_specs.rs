//! # Box Specs
//!
//! A border box (e.g. around the legend) drawn with line specs.

use serde::{Deserialize, Serialize};

use super::{LineSpecs, LineSpecsOf, Specs};

fn default_true() -> bool {
    true
}

/// A box that can be shown or hidden, styled with [`LineSpecs`].
///
/// ## Example
///
/// ```
/// use plotspec::specs::{BoxSpecs, BoxSpecsOf, LineSpecsOf, Specs};
///
/// let frame = BoxSpecs::new().line_width(1.0);
/// assert_eq!(frame.repr(), "box lw 1 ");
///
/// let hidden = frame.show(false);
/// assert_eq!(hidden.repr(), "nobox");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpecs {
    #[serde(default)]
    line: LineSpecs,
    #[serde(default = "default_true")]
    show: bool,
}

impl Default for BoxSpecs {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxSpecs {
    /// Create a visible box with unset line specs.
    pub fn new() -> Self {
        Self {
            line: LineSpecs::new(),
            show: true,
        }
    }

    /// Whether the box is drawn.
    pub fn is_shown(&self) -> bool {
        self.show
    }
}

impl Specs for BoxSpecs {
    fn repr(&self) -> String {
        if !self.show {
            return "nobox".to_string();
        }
        format!("box {} ", self.line.repr())
    }
}

impl LineSpecsOf for BoxSpecs {
    fn line_specs(&self) -> &LineSpecs {
        &self.line
    }

    fn line_specs_mut(&mut self) -> &mut LineSpecs {
        &mut self.line
    }
}

/// Capability trait: builders that embed [`BoxSpecs`].
///
/// Builders that own a box (a legend, a frame) get `show` returning
/// themselves, so it chains with their other setters.
pub trait BoxSpecsOf: Sized {
    /// Access the embedded box specs.
    fn box_specs(&self) -> &BoxSpecs;

    /// Mutable access to the embedded box specs.
    fn box_specs_mut(&mut self) -> &mut BoxSpecs;

    /// Show (`true`) or hide (`false`) the box.
    fn show(mut self, value: bool) -> Self {
        self.box_specs_mut().show = value;
        self
    }
}

impl BoxSpecsOf for BoxSpecs {
    fn box_specs(&self) -> &BoxSpecs {
        self
    }

    fn box_specs_mut(&mut self) -> &mut BoxSpecs {
        self
    }
}
