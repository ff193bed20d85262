//! A squircle background behind nested content

use crate::measure::LayoutRect;
use crate::params::SquircleParams;
use crate::path::SquirclePath;
use crate::renderer::{render_svg_with_content, SvgConfig};
use crate::squircle::generate_path;

/// Nested SVG content with a squircle background sized to its layout box.
///
/// The background is regenerated from the latest measurement on every
/// render; nothing is drawn before the first layout event.
#[derive(Debug, Clone)]
pub struct SquircleView {
    params: SquircleParams,
    config: SvgConfig,
    rect: LayoutRect,
    children: Vec<String>,
}

impl SquircleView {
    pub fn new(params: SquircleParams) -> Self {
        Self {
            params,
            config: SvgConfig::default(),
            rect: LayoutRect::new(),
            children: vec![],
        }
    }

    /// Set the SVG output configuration
    pub fn with_config(mut self, config: SvgConfig) -> Self {
        self.config = config;
        self
    }

    /// Append an SVG fragment drawn above the background
    pub fn with_child(mut self, fragment: impl Into<String>) -> Self {
        self.children.push(fragment.into());
        self
    }

    pub fn params(&self) -> &SquircleParams {
        &self.params
    }

    /// Forward a layout event; true when the size changed
    pub fn on_layout(&mut self, width: f64, height: f64) -> bool {
        self.rect.on_layout(width, height)
    }

    /// Background path for the current size
    pub fn path(&self) -> Option<SquirclePath> {
        self.rect
            .render(|size| generate_path(&self.params.to_spec(size.width, size.height)))
    }

    /// Render the background and children, `None` until measured
    pub fn render(&self) -> Option<String> {
        let path = self.path()?;
        Some(render_svg_with_content(
            &path,
            &self.params.style(),
            &self.config,
            &self.children,
        ))
    }
}
