//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Base id for clip paths and gradients, unique per squircle in a document
    pub id: String,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "squircle-" for "squircle-background")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            id: "squircle".to_string(),
            standalone: true,
            pretty_print: true,
            class_prefix: Some("squircle-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base id for generated definitions
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    pub(crate) fn clip_id(&self) -> String {
        format!("{}-clip", self.id)
    }

    pub(crate) fn fill_gradient_id(&self) -> String {
        format!("{}-fill-gradient", self.id)
    }

    pub(crate) fn stroke_gradient_id(&self) -> String {
        format!("{}-stroke-gradient", self.id)
    }
}
