//! Squircle CLI
//!
//! Usage:
//!   squircle [OPTIONS] --width <W> --height <H> [PARAMS]
//!
//! Options:
//!   -r, --corner-radius <R>   Shared corner radius
//!   -s, --smoothing <S>       Corner smoothing (0 circular, 1 fully smoothed)
//!   -p, --path-only           Print only the SVG path data
//!   --data-uri                Print the SVG as a base64 data URI
//!   -h, --help                Print help

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::Parser;
use thiserror::Error;

use squircle::{
    generate_path, render_svg, ParamsError, SquircleParams, StrokeAlignment, SvgConfig,
};

#[derive(Parser)]
#[command(name = "squircle")]
#[command(about = "Generate smoothed-corner rectangle paths and SVG backgrounds")]
struct Cli {
    /// Parameters file (TOML); command-line flags override its values
    params: Option<PathBuf>,

    /// Box width
    #[arg(long)]
    width: f64,

    /// Box height
    #[arg(long)]
    height: f64,

    /// Shared corner radius
    #[arg(short = 'r', long)]
    corner_radius: Option<f64>,

    /// Top-left corner radius
    #[arg(long)]
    top_left: Option<f64>,

    /// Top-right corner radius
    #[arg(long)]
    top_right: Option<f64>,

    /// Bottom-right corner radius
    #[arg(long)]
    bottom_right: Option<f64>,

    /// Bottom-left corner radius
    #[arg(long)]
    bottom_left: Option<f64>,

    /// Corner smoothing, required without a parameters file
    #[arg(short, long)]
    smoothing: Option<f64>,

    /// Keep smoothing when corners overflow their edges
    #[arg(long)]
    preserve_smoothing: bool,

    /// Fill color
    #[arg(long)]
    fill: Option<String>,

    /// Stroke color
    #[arg(long)]
    stroke: Option<String>,

    /// Stroke width
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Center the stroke on the outline instead of insetting it
    #[arg(long)]
    center_stroke: bool,

    /// Id used for clip path and gradient definitions
    #[arg(long, default_value = "squircle")]
    id: String,

    /// Print only the SVG path data
    #[arg(short, long, conflicts_with = "data_uri")]
    path_only: bool,

    /// Print the SVG as a base64 data URI
    #[arg(long)]
    data_uri: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("error loading parameters '{path}': {source}")]
    Params {
        path: PathBuf,
        #[source]
        source: ParamsError,
    },

    #[error("--smoothing is required when no parameters file is given")]
    MissingSmoothing,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let params = load_params(cli)?;
    let path = generate_path(&params.to_spec(cli.width, cli.height));

    if cli.path_only {
        return Ok(path.to_svg_d());
    }

    let config = SvgConfig::new().with_id(cli.id.clone());
    let svg = render_svg(&path, &params.style(), &config);

    if cli.data_uri {
        Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)))
    } else {
        Ok(svg)
    }
}

/// Parameters from the file (if any) with command-line overrides applied
fn load_params(cli: &Cli) -> Result<SquircleParams, CliError> {
    let mut params = match &cli.params {
        Some(path) => SquircleParams::from_file(path).map_err(|source| CliError::Params {
            path: path.clone(),
            source,
        })?,
        None => SquircleParams::new(cli.smoothing.ok_or(CliError::MissingSmoothing)?),
    };

    if let Some(smoothing) = cli.smoothing {
        params.corner_smoothing = smoothing;
    }
    if let Some(radius) = cli.corner_radius {
        params.corner_radius = radius;
    }
    if cli.top_left.is_some() {
        params.top_left_corner_radius = cli.top_left;
    }
    if cli.top_right.is_some() {
        params.top_right_corner_radius = cli.top_right;
    }
    if cli.bottom_right.is_some() {
        params.bottom_right_corner_radius = cli.bottom_right;
    }
    if cli.bottom_left.is_some() {
        params.bottom_left_corner_radius = cli.bottom_left;
    }
    if cli.preserve_smoothing {
        params.preserve_smoothing = true;
    }
    if let Some(fill) = &cli.fill {
        params.fill_color = fill.clone();
        params.fill_gradient_colors = None;
    }
    if let Some(stroke) = &cli.stroke {
        params.stroke_color = stroke.clone();
        params.stroke_gradient_colors = None;
    }
    if let Some(width) = cli.stroke_width {
        params.stroke_width = width;
    }
    if cli.center_stroke {
        params.stroke_alignment = StrokeAlignment::Center;
    }

    Ok(params)
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}
