//! SVG generation from squircle paths

use crate::path::{fmt_num, SquirclePath};

use super::{Paint, SquircleStyle, StrokeAlignment, SvgConfig};

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    elements: Vec<String>,
    content: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            elements: vec![],
            content: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        self.indent_at(self.indent)
    }

    fn indent_at(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a horizontal linear gradient with evenly distributed stops.
    ///
    /// Stop `i` of `n` sits at `i / (n - 1)`; a single stop sits at 0%.
    pub fn add_linear_gradient(&mut self, id: &str, colors: &[String]) {
        let nl = self.newline();
        let inner = self.indent_at(3);
        let outer = self.indent_at(2);
        let last = colors.len().saturating_sub(1);

        let stops: String = colors
            .iter()
            .enumerate()
            .map(|(index, color)| {
                let offset = if last == 0 {
                    0.0
                } else {
                    index as f64 / last as f64 * 100.0
                };
                format!(
                    r#"{nl}{inner}<stop offset="{}%" stop-color="{}"/>"#,
                    fmt_num(offset),
                    escape_xml(color)
                )
            })
            .collect();

        self.defs.push(format!(
            r#"<linearGradient id="{}" x1="0%" y1="0%" x2="100%" y2="0%">{}{nl}{outer}</linearGradient>"#,
            id, stops
        ));
    }

    /// Add a clip path whose region is the given path data
    pub fn add_clip_path(&mut self, id: &str, d: &str) {
        let nl = self.newline();
        let inner = self.indent_at(3);
        let outer = self.indent_at(2);

        self.defs.push(format!(
            r#"<clipPath id="{}">{nl}{inner}<path d="{}"/>{nl}{outer}</clipPath>"#,
            id, d
        ));
    }

    /// Add the background path element
    pub fn add_path(&mut self, d: &str, attrs: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<path class="{}background" d="{}"{}/>"#,
            self.indent_str(),
            prefix,
            d,
            attrs
        ));
    }

    /// Add nested content drawn above the background
    pub fn add_content(&mut self, fragment: &str) {
        self.content
            .push(format!("{}{}", self.indent_str(), fragment));
    }

    /// Build the final SVG string for a box of the given size
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 {} {}">"#,
            fmt_num(width),
            fmt_num(height)
        ));
        svg.push_str(nl);

        if !self.defs.is_empty() {
            svg.push_str(&self.indent_at(1));
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(&self.indent_at(2));
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(&self.indent_at(1));
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Content (rendered on top)
        for fragment in &self.content {
            svg.push_str(fragment);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a squircle path to an SVG string
pub fn render_svg(path: &SquirclePath, style: &SquircleStyle, config: &SvgConfig) -> String {
    render_svg_with_content(path, style, config, &[])
}

/// Render a squircle path with SVG fragments layered above it.
///
/// An inside stroke is drawn at twice the requested width and clipped to the
/// path itself, so only the inner half remains visible.
pub fn render_svg_with_content(
    path: &SquirclePath,
    style: &SquircleStyle,
    config: &SvgConfig,
    content: &[String],
) -> String {
    let d = path.to_svg_d();
    let mut builder = SvgBuilder::new(config.clone());

    let fill = paint_attr(&mut builder, &style.fill, &config.fill_gradient_id());

    if !style.has_stroke() {
        builder.add_path(&d, &format!(r#" fill="{}""#, fill));
    } else {
        let stroke = paint_attr(&mut builder, &style.stroke, &config.stroke_gradient_id());

        match style.stroke_alignment {
            StrokeAlignment::Inside => {
                let clip_id = config.clip_id();
                builder.add_clip_path(&clip_id, &d);
                builder.add_path(
                    &d,
                    &format!(
                        r#" clip-path="url(#{})" fill="{}" stroke="{}" stroke-width="{}""#,
                        clip_id,
                        fill,
                        stroke,
                        fmt_num(style.stroke_width * 2.0)
                    ),
                );
            }
            StrokeAlignment::Center => {
                builder.add_path(
                    &d,
                    &format!(
                        r#" fill="{}" stroke="{}" stroke-width="{}""#,
                        fill,
                        stroke,
                        fmt_num(style.stroke_width)
                    ),
                );
            }
        }
    }

    for fragment in content {
        builder.add_content(fragment);
    }

    builder.build(path.width, path.height)
}

/// Attribute value for a paint, registering a gradient definition if needed
fn paint_attr(builder: &mut SvgBuilder, paint: &Paint, gradient_id: &str) -> String {
    match paint {
        Paint::Solid(color) => escape_xml(color),
        Paint::LinearGradient(colors) => {
            builder.add_linear_gradient(gradient_id, colors);
            format!("url(#{})", gradient_id)
        }
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::path::PathSegment;
    use pretty_assertions::assert_eq;

    fn rect_path() -> SquirclePath {
        SquirclePath {
            width: 100.0,
            height: 50.0,
            segments: vec![
                PathSegment::MoveTo(Point::new(100.0, 0.0)),
                PathSegment::LineTo(Point::new(100.0, 50.0)),
                PathSegment::LineTo(Point::new(0.0, 50.0)),
                PathSegment::LineTo(Point::new(0.0, 0.0)),
                PathSegment::LineTo(Point::new(100.0, 0.0)),
                PathSegment::Close,
            ],
        }
    }

    fn fragment_config() -> SvgConfig {
        SvgConfig::new().with_standalone(false)
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_render_fill_only() {
        let svg = render_svg(&rect_path(), &SquircleStyle::default(), &fragment_config());
        let expected = [
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 100 50">"#,
            r##"  <path class="squircle-background" d="M 100 0 L 100 50 L 0 50 L 0 0 L 100 0 Z" fill="#000"/>"##,
            "</svg>",
        ]
        .join("\n");
        assert_eq!(svg, expected);
    }

    #[test]
    fn test_render_standalone_declaration() {
        let svg = render_svg(&rect_path(), &SquircleStyle::default(), &SvgConfig::default());
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    }

    #[test]
    fn test_render_inside_stroke_clips() {
        let style = SquircleStyle::new().with_stroke(Paint::solid("red"), 3.0);
        let svg = render_svg(&rect_path(), &style, &fragment_config().with_id("card"));

        assert!(svg.contains(r#"<clipPath id="card-clip">"#));
        assert!(svg.contains(r#"clip-path="url(#card-clip)""#));
        assert!(svg.contains(r#"stroke="red""#));
        assert!(svg.contains(r#"stroke-width="6""#));
    }

    #[test]
    fn test_render_center_stroke_has_no_clip() {
        let style = SquircleStyle::new()
            .with_stroke(Paint::solid("red"), 3.0)
            .with_stroke_alignment(StrokeAlignment::Center);
        let svg = render_svg(&rect_path(), &style, &fragment_config());

        assert!(!svg.contains("clipPath"));
        assert!(!svg.contains("<defs>"));
        assert!(svg.contains(r#"stroke-width="3""#));
    }

    #[test]
    fn test_render_gradients() {
        let style = SquircleStyle::new()
            .with_fill(Paint::LinearGradient(vec![
                "#f00".to_string(),
                "#0f0".to_string(),
                "#00f".to_string(),
            ]))
            .with_stroke(Paint::LinearGradient(vec!["#fff".to_string()]), 1.0);
        let svg = render_svg(&rect_path(), &style, &fragment_config());

        assert!(svg.contains(r##"<stop offset="0%" stop-color="#f00"/>"##));
        assert!(svg.contains(r##"<stop offset="50%" stop-color="#0f0"/>"##));
        assert!(svg.contains(r##"<stop offset="100%" stop-color="#00f"/>"##));
        assert!(svg.contains(r#"fill="url(#squircle-fill-gradient)""#));
        assert!(svg.contains(r#"stroke="url(#squircle-stroke-gradient)""#));
        // A single-color gradient puts its only stop at the start
        assert!(svg.contains(r##"<stop offset="0%" stop-color="#fff"/>"##));
    }

    #[test]
    fn test_render_gradient_fill_without_stroke() {
        let style = SquircleStyle::new().with_fill(Paint::LinearGradient(vec![
            "#f00".to_string(),
            "#00f".to_string(),
        ]));
        let svg = render_svg(&rect_path(), &style, &fragment_config());
        assert!(svg.contains("<linearGradient"));
        assert!(!svg.contains("clipPath"));
    }

    #[test]
    fn test_content_rendered_after_background() {
        let content = vec![r#"<text x="10" y="20">Hi</text>"#.to_string()];
        let svg = render_svg_with_content(
            &rect_path(),
            &SquircleStyle::default(),
            &fragment_config(),
            &content,
        );
        let background = svg.find("<path").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(background < text);
    }

    #[test]
    fn test_compact_output() {
        let svg = render_svg(
            &rect_path(),
            &SquircleStyle::default(),
            &fragment_config().with_pretty_print(false),
        );
        assert!(!svg.contains('\n'));
        assert!(svg.contains("><path"));
    }
}
