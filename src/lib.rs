//! # plotspec - gnuplot Plot Style Builders
//!
//! plotspec is a small library for describing how gnuplot should draw plot
//! elements. It provides:
//!
//! - **Style builders**: line, point, fill and box options with chained setters
//! - **Plot clauses**: data source, column selection, plot style, legend label
//!   and tic labels rendered as one clause of a `plot` command
//! - **Scripts**: a `set key` line plus a full `plot` command, loadable from JSON
//!
//! It only produces text. Running gnuplot is up to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use plotspec::specs::*;
//!
//! let plot = PlotSpecs::new("'data.csv'", "1:2", "lines")
//!     .label("Series A")
//!     .xtics(1)
//!     .line_color("#d62728");
//!
//! assert_eq!(
//!     plot.repr(),
//!     "'data.csv' using 1:2:xtic(stringcolumn(1)) title 'Series A' with lines lw 2 lc rgb '#d62728' "
//! );
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`specs`] | Style and plot clause builders |
//! | [`script`] | `set key` + `plot` command container |
//! | [`gnuplot`] | Clause formatting helpers and column references |
//! | [`config`] | Style presets |
//! | [`error`] | Error types |

pub mod config;
pub mod error;
pub mod gnuplot;
pub mod script;
pub mod specs;

// Re-exports for convenience
pub use config::SpecsConfig;
pub use error::PlotSpecError;
pub use script::Script;
