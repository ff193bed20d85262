//! Squircle - smoothed-corner rectangle backgrounds as SVG
//!
//! This library generates the path of a rounded rectangle whose corners follow
//! Figma's corner-smoothing model, and renders it as an SVG background with
//! optional gradients and an inside-aligned stroke.
//!
//! # Example
//!
//! ```rust
//! use squircle::{get_svg_path, SquircleSpec};
//!
//! let spec = SquircleSpec::new(100.0, 100.0)
//!     .with_corner_radius(20.0)
//!     .with_corner_smoothing(0.6);
//! let d = get_svg_path(&spec);
//! assert!(d.starts_with("M "));
//! assert!(d.ends_with(" Z"));
//! ```

pub mod geometry;
pub mod log;
pub mod measure;
pub mod params;
pub mod path;
pub mod renderer;
pub mod squircle;
pub mod view;

pub use geometry::{BoundingBox, Point};
pub use measure::{LayoutRect, Measurement, Size};
pub use params::{ParamsError, SquircleParams};
pub use path::{PathSegment, SquirclePath};
pub use renderer::{render_svg, Paint, SquircleStyle, StrokeAlignment, SvgConfig};
pub use squircle::{generate_path, get_svg_path, Corner, CornerRadii, SquircleSpec};
pub use view::SquircleView;

/// Render a squircle background of the given size with default configuration
///
/// # Example
///
/// ```rust
/// use squircle::{render, SquircleParams};
///
/// let params = SquircleParams::new(0.6).with_corner_radius(16.0);
/// let svg = render(&params, 200.0, 80.0);
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains(r#"viewBox="0 0 200 80""#));
/// ```
pub fn render(params: &SquircleParams, width: f64, height: f64) -> String {
    render_with_config(params, width, height, &SvgConfig::default())
}

/// Render a squircle background with custom SVG configuration
///
/// # Example
///
/// ```rust
/// use squircle::{render_with_config, SquircleParams, SvgConfig};
///
/// let params = SquircleParams::new(1.0)
///     .with_corner_radius(12.0)
///     .with_stroke("#333", 2.0);
/// let config = SvgConfig::new().with_id("card").with_standalone(false);
///
/// let svg = render_with_config(&params, 120.0, 60.0, &config);
/// assert!(svg.contains(r#"clip-path="url(#card-clip)""#));
/// ```
pub fn render_with_config(
    params: &SquircleParams,
    width: f64,
    height: f64,
    config: &SvgConfig,
) -> String {
    let path = generate_path(&params.to_spec(width, height));
    render_svg(&path, &params.style(), config)
}
