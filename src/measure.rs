//! Layout measurement for the squircle background
//!
//! The host's layout pass reports the allocated box size through
//! [`LayoutRect::on_layout`]. Nothing is rendered until the first
//! measurement arrives, and each new measurement replaces the last.

use crate::log::debug;

/// Allocated box size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Measurement state of a layout region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Measurement {
    #[default]
    Unmeasured,
    Measured(Size),
}

/// Tracks the last-observed size of a layout region
#[derive(Debug, Clone, Default)]
pub struct LayoutRect {
    state: Measurement,
}

impl LayoutRect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a layout event.
    ///
    /// Returns true when the size differs from the previous measurement, so
    /// callers re-render once per size change.
    pub fn on_layout(&mut self, width: f64, height: f64) -> bool {
        let next = Measurement::Measured(Size::new(width, height));
        if self.state == next {
            return false;
        }
        debug!("layout measured {}x{}", width, height);
        self.state = next;
        true
    }

    pub fn state(&self) -> Measurement {
        self.state
    }

    /// Latest measured size, if any
    pub fn size(&self) -> Option<Size> {
        match self.state {
            Measurement::Measured(size) => Some(size),
            Measurement::Unmeasured => None,
        }
    }

    pub fn is_measured(&self) -> bool {
        self.size().is_some()
    }

    /// Invoke `f` with the measured size; `None` until the first layout
    pub fn render<R>(&self, f: impl FnOnce(Size) -> R) -> Option<R> {
        self.size().map(f)
    }
}
