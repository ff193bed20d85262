//! Fill and stroke styling for the squircle background

use serde::Deserialize;

/// Default color for fill and stroke
pub const DEFAULT_COLOR: &str = "#000";

/// How a fill or stroke is painted
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// A single color
    Solid(String),
    /// Horizontal linear gradient with evenly spaced stops
    LinearGradient(Vec<String>),
}

impl Paint {
    pub fn solid(color: impl Into<String>) -> Self {
        Paint::Solid(color.into())
    }

    /// Gradient when colors are present, otherwise the solid fallback
    pub fn from_colors(color: impl Into<String>, gradient: Option<Vec<String>>) -> Self {
        match gradient {
            Some(colors) if !colors.is_empty() => Paint::LinearGradient(colors),
            _ => Paint::Solid(color.into()),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::solid(DEFAULT_COLOR)
    }
}

/// Where the stroke sits relative to the path outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeAlignment {
    /// Entirely inside the outline (doubled width, clipped to the path)
    #[default]
    Inside,
    /// Straddling the outline
    Center,
}

/// Resolved styling for one squircle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SquircleStyle {
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: f64,
    pub stroke_alignment: StrokeAlignment,
}

impl SquircleStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill paint
    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    /// Set the stroke paint and width
    pub fn with_stroke(mut self, stroke: Paint, width: f64) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }

    /// Set the stroke alignment
    pub fn with_stroke_alignment(mut self, alignment: StrokeAlignment) -> Self {
        self.stroke_alignment = alignment;
        self
    }

    /// Whether a stroke is drawn at all
    pub fn has_stroke(&self) -> bool {
        self.stroke_width.is_finite() && self.stroke_width > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = SquircleStyle::default();
        assert_eq!(style.fill, Paint::solid("#000"));
        assert_eq!(style.stroke, Paint::solid("#000"));
        assert_eq!(style.stroke_alignment, StrokeAlignment::Inside);
        assert!(!style.has_stroke());
    }

    #[test]
    fn test_paint_from_colors() {
        assert_eq!(Paint::from_colors("red", None), Paint::solid("red"));
        assert_eq!(Paint::from_colors("red", Some(vec![])), Paint::solid("red"));
        assert_eq!(
            Paint::from_colors("red", Some(vec!["#fff".to_string(), "#000".to_string()])),
            Paint::LinearGradient(vec!["#fff".to_string(), "#000".to_string()])
        );
    }

    #[test]
    fn test_has_stroke() {
        let style = SquircleStyle::new().with_stroke(Paint::solid("red"), 2.0);
        assert!(style.has_stroke());
        let style = style.with_stroke(Paint::solid("red"), -1.0);
        assert!(!style.has_stroke());
        let style = style.with_stroke(Paint::solid("red"), f64::NAN);
        assert!(!style.has_stroke());
    }
}
