//! SVG renderer for squircle paths
//!
//! This module takes a SquirclePath plus styling and produces an SVG string
//! with the squircle as a filled and optionally stroked background.

pub mod config;
pub mod style;
pub mod svg;

pub use config::SvgConfig;
pub use style::{Paint, SquircleStyle, StrokeAlignment};
pub use svg::{render_svg, render_svg_with_content, SvgBuilder};
