//! Squircle parameters as supplied by the user
//!
//! Parameters mirror the component props: a shared corner radius with
//! optional per-corner overrides, the smoothing coefficient, and fill/stroke
//! styling. They can be loaded from TOML.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::style::DEFAULT_COLOR;
use crate::renderer::{Paint, SquircleStyle, StrokeAlignment};
use crate::squircle::SquircleSpec;

/// Errors that can occur when loading parameters
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("Failed to read parameters file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse parameters TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Geometry and styling for a squircle background
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SquircleParams {
    #[serde(default)]
    pub corner_radius: f64,
    #[serde(default)]
    pub top_left_corner_radius: Option<f64>,
    #[serde(default)]
    pub top_right_corner_radius: Option<f64>,
    #[serde(default)]
    pub bottom_right_corner_radius: Option<f64>,
    #[serde(default)]
    pub bottom_left_corner_radius: Option<f64>,
    pub corner_smoothing: f64,
    #[serde(default)]
    pub preserve_smoothing: bool,
    #[serde(default = "default_color")]
    pub fill_color: String,
    #[serde(default)]
    pub fill_gradient_colors: Option<Vec<String>>,
    #[serde(default = "default_color")]
    pub stroke_color: String,
    #[serde(default)]
    pub stroke_gradient_colors: Option<Vec<String>>,
    #[serde(default)]
    pub stroke_width: f64,
    #[serde(default)]
    pub stroke_alignment: StrokeAlignment,
}

impl SquircleParams {
    /// Parameters with defaults for everything but smoothing
    pub fn new(corner_smoothing: f64) -> Self {
        Self {
            corner_radius: 0.0,
            top_left_corner_radius: None,
            top_right_corner_radius: None,
            bottom_right_corner_radius: None,
            bottom_left_corner_radius: None,
            corner_smoothing,
            preserve_smoothing: false,
            fill_color: default_color(),
            fill_gradient_colors: None,
            stroke_color: default_color(),
            stroke_gradient_colors: None,
            stroke_width: 0.0,
            stroke_alignment: StrokeAlignment::default(),
        }
    }

    /// Load parameters from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ParamsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load parameters from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ParamsError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the shared corner radius
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the fill color
    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = color.into();
        self
    }

    /// Set the stroke color and width
    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke_color = color.into();
        self.stroke_width = width;
        self
    }

    /// Geometry for a box of the given size
    pub fn to_spec(&self, width: f64, height: f64) -> SquircleSpec {
        SquircleSpec {
            width,
            height,
            corner_radius: self.corner_radius,
            top_left_corner_radius: self.top_left_corner_radius,
            top_right_corner_radius: self.top_right_corner_radius,
            bottom_right_corner_radius: self.bottom_right_corner_radius,
            bottom_left_corner_radius: self.bottom_left_corner_radius,
            corner_smoothing: self.corner_smoothing,
            preserve_smoothing: self.preserve_smoothing,
        }
    }

    /// Fill and stroke styling; gradients take precedence over solid colors
    pub fn style(&self) -> SquircleStyle {
        SquircleStyle {
            fill: Paint::from_colors(&self.fill_color, self.fill_gradient_colors.clone()),
            stroke: Paint::from_colors(&self.stroke_color, self.stroke_gradient_colors.clone()),
            stroke_width: self.stroke_width,
            stroke_alignment: self.stroke_alignment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SquircleParams::from_str("corner_smoothing = 0.6").expect("Should parse");
        assert_eq!(params, SquircleParams::new(0.6));
        assert_eq!(params.fill_color, "#000");
        assert_eq!(params.stroke_width, 0.0);
    }

    #[test]
    fn test_parse_full() {
        let toml_str = r##"
corner_radius = 20
top_left_corner_radius = 4.5
corner_smoothing = 1
preserve_smoothing = true
fill_gradient_colors = ["#ff0000", "#0000ff"]
stroke_color = "white"
stroke_width = 2
stroke_alignment = "center"
"##;
        let params = SquircleParams::from_str(toml_str).expect("Should parse");
        assert_eq!(params.corner_radius, 20.0);
        assert_eq!(params.top_left_corner_radius, Some(4.5));
        assert!(params.preserve_smoothing);
        assert_eq!(params.stroke_alignment, StrokeAlignment::Center);

        let style = params.style();
        assert_eq!(
            style.fill,
            Paint::LinearGradient(vec!["#ff0000".to_string(), "#0000ff".to_string()])
        );
        assert_eq!(style.stroke, Paint::solid("white"));
    }

    #[test]
    fn test_missing_smoothing_is_error() {
        let result = SquircleParams::from_str("corner_radius = 10");
        assert!(matches!(result, Err(ParamsError::ParseError(_))));
    }

    #[test]
    fn test_unknown_field_is_error() {
        let result = SquircleParams::from_str("corner_smoothing = 0.5\nradius = 3");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = SquircleParams::from_str(invalid);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_spec_carries_overrides() {
        let mut params = SquircleParams::new(0.6).with_corner_radius(12.0);
        params.bottom_left_corner_radius = Some(0.0);
        let spec = params.to_spec(200.0, 100.0);
        assert_eq!(spec.width, 200.0);
        assert_eq!(spec.corner_radius, 12.0);
        assert_eq!(spec.bottom_left_corner_radius, Some(0.0));
        assert_eq!(spec.corner_smoothing, 0.6);
    }
}
