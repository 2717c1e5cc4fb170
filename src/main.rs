//! # plotspec CLI
//!
//! Command-line interface for generating gnuplot plot commands.
//!
//! ## Usage
//!
//! ```bash
//! # Render a JSON script description to gnuplot text
//! plotspec render plot.json
//!
//! # Write it to a file instead of stdout
//! plotspec render plot.json --output plot.gp
//!
//! # Print a single plot clause
//! plotspec clause --what "'data.csv'" --using 1:2 --label "Series A" --xtics 1
//!
//! # List style presets
//! plotspec presets
//! ```
//!
//! Set `RUST_LOG=plotspec=debug` to see what is being rendered.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use plotspec::{
    PlotSpecError, Script, SpecsConfig,
    gnuplot::column::ColumnIndex,
    specs::{LineSpecsOf, PlotSpecs, Specs},
};

/// plotspec - gnuplot plot command generator
#[derive(Parser, Debug)]
#[command(name = "plotspec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a JSON script description to gnuplot text
    Render {
        /// JSON script file
        file: PathBuf,

        /// Write to this file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print a single plot clause
    Clause(ClauseArgs),

    /// List style presets
    Presets,
}

#[derive(Args, Debug)]
struct ClauseArgs {
    /// Data source or function (e.g. "'data.csv'", "sin(x)")
    #[arg(long)]
    what: String,

    /// Column selection (e.g. "1:2")
    #[arg(long, default_value = "")]
    using: String,

    /// Plot style (e.g. lines, points, boxes)
    #[arg(long, default_value = "lines")]
    with: String,

    /// Legend text
    #[arg(long, conflicts_with_all = ["no_label", "column_header"])]
    label: Option<String>,

    /// Leave the element out of the legend
    #[arg(long, conflicts_with = "column_header")]
    no_label: bool,

    /// Take the legend text from the column header
    #[arg(long)]
    column_header: bool,

    /// Column with x tic labels (number or name)
    #[arg(long, value_name = "COLUMN", value_parser = parse_column)]
    xtics: Option<ColumnIndex>,

    /// Column with y tic labels (number or name)
    #[arg(long, value_name = "COLUMN", value_parser = parse_column)]
    ytics: Option<ColumnIndex>,

    /// Line width (overrides the preset)
    #[arg(long)]
    line_width: Option<f64>,

    /// Line color (name or #rrggbb)
    #[arg(long)]
    line_color: Option<String>,

    /// Style preset
    #[arg(long, default_value = "default")]
    preset: String,
}

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install a stderr subscriber, but only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Numbers select a column by index, anything else by header name.
fn parse_column(s: &str) -> Result<ColumnIndex, std::convert::Infallible> {
    s.parse()
}

fn run(cli: Cli) -> Result<(), PlotSpecError> {
    match cli.command {
        Commands::Render { file, output } => {
            let text = render_script(&file, output.as_deref())?;
            if output.is_none() {
                print!("{}", text);
            }
        }
        Commands::Clause(args) => {
            let plot = build_clause(args)?;
            println!("{}", plot.repr().trim_end());
        }
        Commands::Presets => {
            println!("Available presets:");
            for preset in SpecsConfig::ALL {
                let point_size = preset
                    .point_size
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {:<14} line width {:<4} point size {}",
                    preset.name, preset.line_width, point_size
                );
            }
        }
    }

    Ok(())
}

/// Render a JSON script file, writing the text to `output` when given.
fn render_script(file: &Path, output: Option<&Path>) -> Result<String, PlotSpecError> {
    let json = std::fs::read_to_string(file)?;
    let text = Script::from_json(&json)?.render()?;

    if let Some(path) = output {
        std::fs::write(path, &text)?;
        tracing::info!(path = %path.display(), "wrote script");
    }
    Ok(text)
}

/// Build a plot clause from the `clause` subcommand flags.
fn build_clause(args: ClauseArgs) -> Result<PlotSpecs, PlotSpecError> {
    let config = SpecsConfig::by_name(&args.preset)
        .ok_or_else(|| PlotSpecError::UnknownPreset(args.preset.clone()))?;

    let mut plot = PlotSpecs::with_config(&config, args.what, args.using, args.with);
    if let Some(text) = args.label {
        plot = plot.label(text);
    } else if args.no_label {
        plot = plot.label_none();
    } else if args.column_header {
        plot = plot.label_from_column_header();
    }
    if let Some(column) = args.xtics {
        plot = plot.xtics(column);
    }
    if let Some(column) = args.ytics {
        plot = plot.ytics(column);
    }
    if let Some(width) = args.line_width {
        plot = plot.line_width(width);
    }
    if let Some(color) = args.line_color {
        plot = plot.line_color(color);
    }
    Ok(plot)
}
