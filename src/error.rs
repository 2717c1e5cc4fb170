//! # Error Types
//!
//! Builders never fail. Errors only come from the surfaces around them:
//! loading JSON scripts, file I/O in the CLI, and rendering a script that
//! has nothing to plot.

use thiserror::Error;

/// Main error type for plotspec operations
#[derive(Debug, Error)]
pub enum PlotSpecError {
    /// Malformed or mistyped JSON script
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A script with no plot clauses (gnuplot rejects a bare `plot`)
    #[error("Script has no plot clauses")]
    EmptyScript,

    /// Style preset name not in `SpecsConfig::ALL`
    #[error("Unknown preset '{0}'. Run `plotspec presets` to see available presets.")]
    UnknownPreset(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
