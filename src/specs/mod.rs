//! # Plot Style Specs
//!
//! Fluent builders for the style options of a gnuplot plot clause.
//!
//! ## Design
//!
//! Each style family (line, point, fill) is a flat value type. Builders embed
//! one value per family and pick up that family's chained setters through a
//! capability trait ([`LineSpecsOf`], [`PointSpecsOf`], [`FillSpecsOf`]).
//! Setters take `self` by value and return it, so calls chain:
//!
//! ```
//! use plotspec::specs::*;
//!
//! let plot = PlotSpecs::new("'data.csv'", "1:2", "linespoints")
//!     .label("Measured")
//!     .line_color("#1f77b4")
//!     .point_type(7)
//!     .point_size(0.8);
//!
//! assert_eq!(
//!     plot.repr(),
//!     "'data.csv' using 1:2 title 'Measured' with linespoints lw 2 lc rgb '#1f77b4' pt 7 ps 0.8 "
//! );
//! ```
//!
//! ## Specs Trait
//!
//! Everything that renders to gnuplot text implements [`Specs`]. `repr()`
//! never mutates, so it can be called any number of times.

mod box_specs;
mod fill;
mod label;
mod line;
mod plot;
mod point;

pub use box_specs::*;
pub use fill::*;
pub use label::*;
pub use line::*;
pub use plot::*;
pub use point::*;

/// Trait for anything with a gnuplot text representation.
pub trait Specs {
    /// Render the current state as a gnuplot script fragment.
    fn repr(&self) -> String;
}

impl<T: Specs + ?Sized> Specs for &T {
    fn repr(&self) -> String {
        (*self).repr()
    }
}

impl Specs for Box<dyn Specs> {
    fn repr(&self) -> String {
        self.as_ref().repr()
    }
}

/// Join the non-empty tokens of a style clause with single spaces.
pub(crate) fn join_tokens(tokens: &[String]) -> String {
    tokens
        .iter()
        .filter(|t| !t.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_tokens_skips_empty() {
        let tokens = vec!["lw 2".to_string(), String::new(), "dt 3".to_string()];
        assert_eq!(join_tokens(&tokens), "lw 2 dt 3");
        assert_eq!(join_tokens(&[]), "");
    }

    #[test]
    fn test_boxed_specs() {
        let specs: Vec<Box<dyn Specs>> = vec![
            Box::new(LineSpecs::new().line_width(1.0)),
            Box::new(BoxSpecs::new().show(false)),
        ];
        let reprs: Vec<String> = specs.iter().map(|s| s.repr()).collect();
        assert_eq!(reprs, vec!["lw 1".to_string(), "nobox".to_string()]);
    }
}
