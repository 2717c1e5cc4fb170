//! # Style Defaults
//!
//! This module defines the default style values new builders start from.
//!
//! ## Presets
//!
//! | Preset | Line width | Point size |
//! |--------|------------|------------|
//! | DEFAULT | 2 | backend default |
//! | PRESENTATION | 3 | 1.5 |
//!
//! ## Usage
//!
//! ```
//! use plotspec::config::SpecsConfig;
//! use plotspec::specs::{PlotSpecs, Specs};
//!
//! let config = SpecsConfig::PRESENTATION;
//! let plot = PlotSpecs::with_config(&config, "sin(x)", "", "lines");
//! assert_eq!(plot.repr(), "sin(x) with lines lw 3 ps 1.5 ");
//! ```

/// # Specs Configuration
///
/// Initial style values applied when a [`PlotSpecs`](crate::specs::PlotSpecs)
/// is constructed. Everything not listed here starts unset and is left to the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecsConfig {
    /// Preset name
    pub name: &'static str,

    /// Line width for new plot clauses
    pub line_width: f64,

    /// Point size for new plot clauses (`None` leaves it to the backend)
    pub point_size: Option<f64>,
}

impl SpecsConfig {
    /// Default preset: `lw 2`, nothing else.
    pub const DEFAULT: Self = Self {
        name: "default",
        line_width: 2.0,
        point_size: None,
    };

    /// Heavier strokes and markers for slides and projectors.
    pub const PRESENTATION: Self = Self {
        name: "presentation",
        line_width: 3.0,
        point_size: Some(1.5),
    };

    /// All built-in presets.
    pub const ALL: &'static [Self] = &[Self::DEFAULT, Self::PRESENTATION];

    /// Look up a preset by name (case-insensitive).
    ///
    /// ## Example
    ///
    /// ```
    /// use plotspec::config::SpecsConfig;
    ///
    /// assert_eq!(SpecsConfig::by_name("Presentation"), Some(SpecsConfig::PRESENTATION));
    /// assert_eq!(SpecsConfig::by_name("poster"), None);
    /// ```
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
            .copied()
    }
}

impl Default for SpecsConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
