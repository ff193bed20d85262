//! Squircle path generation
//!
//! Builds a closed contour for a rectangle whose corners follow the
//! smoothed-corner model used by Figma: each corner is a circular arc section
//! flanked by two cubic transition curves, with the smoothing coefficient
//! trading arc length for longer, flatter transitions.
//!
//! The generator is a pure function of [`SquircleSpec`]. Malformed input is
//! clamped rather than rejected, so [`generate_path`] never fails.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

use crate::geometry::Point;
use crate::log::{debug, warn};
use crate::path::{PathSegment, SquirclePath};

/// Lengths below this are treated as zero when deciding which curves to emit
const EPSILON: f64 = 1e-9;

/// Per-corner radii for a rounded rectangle.
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Uniform radius on all four corners.
    pub const fn all(r: f64) -> Self {
        Self::new(r, r, r, r)
    }

    /// No rounding.
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Radius of one corner
    pub fn get(&self, corner: Corner) -> f64 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }
}

/// A corner of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Traversal order of the contour, starting from the top edge
    pub const CLOCKWISE: [Corner; 4] = [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ];

    /// Local frame of the corner: `along` points in the direction of travel on
    /// the edge entering the corner, `across` in the direction of travel on the
    /// edge leaving it.
    fn frame(self, width: f64, height: f64) -> CornerFrame {
        let (vertex, along, across) = match self {
            Corner::TopRight => (Point::new(width, 0.0), (1.0, 0.0), (0.0, 1.0)),
            Corner::BottomRight => (Point::new(width, height), (0.0, 1.0), (-1.0, 0.0)),
            Corner::BottomLeft => (Point::new(0.0, height), (-1.0, 0.0), (0.0, -1.0)),
            Corner::TopLeft => (Point::new(0.0, 0.0), (0.0, -1.0), (1.0, 0.0)),
        };
        CornerFrame {
            vertex,
            along,
            across,
        }
    }
}

struct CornerFrame {
    vertex: Point,
    along: (f64, f64),
    across: (f64, f64),
}

impl CornerFrame {
    /// Point at local coordinates relative to the corner vertex
    fn at(&self, along: f64, across: f64) -> Point {
        Point::new(
            self.vertex.x + along * self.along.0 + across * self.across.0,
            self.vertex.y + along * self.along.1 + across * self.across.1,
        )
    }
}

/// Input geometry for one squircle
#[derive(Debug, Clone, PartialEq)]
pub struct SquircleSpec {
    pub width: f64,
    pub height: f64,
    /// Shared radius for corners without an override
    pub corner_radius: f64,
    pub top_left_corner_radius: Option<f64>,
    pub top_right_corner_radius: Option<f64>,
    pub bottom_right_corner_radius: Option<f64>,
    pub bottom_left_corner_radius: Option<f64>,
    /// 0 is a circular corner, 1 is fully smoothed
    pub corner_smoothing: f64,
    /// Keep the requested smoothing when the corner does not fit its budget,
    /// compressing the transition curves instead
    pub preserve_smoothing: bool,
}

impl SquircleSpec {
    /// A square-cornered box of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            corner_radius: 0.0,
            top_left_corner_radius: None,
            top_right_corner_radius: None,
            bottom_right_corner_radius: None,
            bottom_left_corner_radius: None,
            corner_smoothing: 0.0,
            preserve_smoothing: false,
        }
    }

    /// Set the shared corner radius
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the corner smoothing coefficient
    pub fn with_corner_smoothing(mut self, smoothing: f64) -> Self {
        self.corner_smoothing = smoothing;
        self
    }

    /// Override a single corner's radius
    pub fn with_corner(mut self, corner: Corner, radius: f64) -> Self {
        let slot = match corner {
            Corner::TopLeft => &mut self.top_left_corner_radius,
            Corner::TopRight => &mut self.top_right_corner_radius,
            Corner::BottomRight => &mut self.bottom_right_corner_radius,
            Corner::BottomLeft => &mut self.bottom_left_corner_radius,
        };
        *slot = Some(radius);
        self
    }

    /// Set whether smoothing is preserved for oversized corners
    pub fn with_preserve_smoothing(mut self, preserve: bool) -> Self {
        self.preserve_smoothing = preserve;
        self
    }

    /// Resolve per-corner radii, falling back to the shared radius.
    ///
    /// Negative and non-finite radii resolve to 0.
    pub fn resolved_radii(&self) -> CornerRadii {
        let shared = self.corner_radius;
        CornerRadii {
            top_left: sanitize_length(self.top_left_corner_radius.unwrap_or(shared), "radius"),
            top_right: sanitize_length(self.top_right_corner_radius.unwrap_or(shared), "radius"),
            bottom_right: sanitize_length(
                self.bottom_right_corner_radius.unwrap_or(shared),
                "radius",
            ),
            bottom_left: sanitize_length(
                self.bottom_left_corner_radius.unwrap_or(shared),
                "radius",
            ),
        }
    }
}

/// A corner radius after clamping, with the edge length its curve may occupy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedCorner {
    pub radius: f64,
    pub budget: f64,
}

/// All four corners after clamping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedCorners {
    pub top_left: NormalizedCorner,
    pub top_right: NormalizedCorner,
    pub bottom_right: NormalizedCorner,
    pub bottom_left: NormalizedCorner,
    /// Factor applied to every radius, 1 when nothing overflows
    pub scale: f64,
}

impl NormalizedCorners {
    pub fn get(&self, corner: Corner) -> NormalizedCorner {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// Clamped radii without budgets
    pub fn radii(&self) -> CornerRadii {
        CornerRadii::new(
            self.top_left.radius,
            self.top_right.radius,
            self.bottom_right.radius,
            self.bottom_left.radius,
        )
    }
}

/// Clamp radii so that no edge carries more rounding than its length.
///
/// Every radius is multiplied by the worst edge's `length / (r_a + r_b)`
/// ratio (capped at 1), which keeps the radii's proportions. Each corner's
/// budget is its proportional share of the shorter of its two edges.
pub fn normalize_radii(radii: CornerRadii, width: f64, height: f64) -> NormalizedCorners {
    let CornerRadii {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = radii;

    let edges = [(tl, tr, width), (tr, br, height), (br, bl, width), (bl, tl, height)];
    let scale = edges
        .iter()
        .filter(|(a, b, _)| a + b > 0.0)
        .map(|(a, b, length)| length / (a + b))
        .fold(1.0_f64, f64::min);

    let share = |radius: f64, adjacent: f64, length: f64| {
        if radius + adjacent <= 0.0 {
            0.0
        } else {
            radius / (radius + adjacent) * length
        }
    };
    let corner = |radius: f64, horizontal: f64, vertical: f64| NormalizedCorner {
        radius: radius * scale,
        budget: share(radius, horizontal, width).min(share(radius, vertical, height)),
    };

    NormalizedCorners {
        top_left: corner(tl, tr, bl),
        top_right: corner(tr, tl, br),
        bottom_right: corner(br, bl, tr),
        bottom_left: corner(bl, br, tl),
        scale,
    }
}

/// Curve lengths for one corner, measured along its local frame.
///
/// `p` is the distance from the corner vertex to where the curve leaves the
/// straight edge. `a`, `b` and `c` split the entry transition along the edge,
/// `d` is its offset across it, and `arc_section_length` is the projected
/// length of the circular section on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerPathParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub p: f64,
    pub arc_section_length: f64,
    pub corner_radius: f64,
    /// Smoothing actually applied after fitting to the budget
    pub smoothing: f64,
}

/// Compute the curve lengths for a corner.
pub fn corner_path_params(
    corner_radius: f64,
    corner_smoothing: f64,
    preserve_smoothing: bool,
    budget: f64,
) -> CornerPathParams {
    if corner_radius <= 0.0 {
        return CornerPathParams::default();
    }

    let mut smoothing = corner_smoothing;
    let mut p = (1.0 + smoothing) * corner_radius;

    if !preserve_smoothing {
        let max_smoothing = (budget / corner_radius - 1.0).max(0.0);
        smoothing = smoothing.min(max_smoothing);
        p = p.min(budget);
    }

    let arc_measure = 90.0 * (1.0 - smoothing);
    let arc_section_length = (arc_measure / 2.0).to_radians().sin() * corner_radius * SQRT_2;

    let angle_alpha = (90.0 - arc_measure) / 2.0;
    let p3_to_p4_distance = corner_radius * (angle_alpha / 2.0).to_radians().tan();

    let angle_beta = (45.0 * smoothing).to_radians();
    let c = p3_to_p4_distance * angle_beta.cos();
    let d = c * angle_beta.tan();

    let mut b = (p - arc_section_length - c - d) / 3.0;
    let mut a = 2.0 * b;

    if preserve_smoothing && p > budget {
        let p1_to_p3_max_distance = budget - d - arc_section_length - c;
        let min_a = p1_to_p3_max_distance / 6.0;
        let max_b = p1_to_p3_max_distance - min_a;

        b = b.min(max_b);
        a = p1_to_p3_max_distance - b;
        p = p.min(budget);
    }

    CornerPathParams {
        a,
        b,
        c,
        d,
        p,
        arc_section_length,
        corner_radius,
        smoothing,
    }
}

/// Generate the closed squircle contour for a spec.
///
/// The contour runs clockwise from the top-right corner's tangent point on the
/// top edge, emitting each corner followed by the straight edge to the next
/// one, and ends with an explicit line back to the start before closing.
pub fn generate_path(spec: &SquircleSpec) -> SquirclePath {
    let width = sanitize_length(spec.width, "width");
    let height = sanitize_length(spec.height, "height");
    let smoothing = sanitize_smoothing(spec.corner_smoothing);

    let radii = spec.resolved_radii();
    let corners = normalize_radii(radii, width, height);
    if corners.scale < 1.0 {
        debug!(
            "scaling corner radii {:?} by {} to fit {}x{}",
            radii, corners.scale, width, height
        );
    }

    let params_for = |corner: Corner| {
        let normalized = corners.get(corner);
        corner_path_params(
            normalized.radius,
            smoothing,
            spec.preserve_smoothing,
            normalized.budget,
        )
    };

    let mut segments = Vec::with_capacity(18);
    let mut start = None;

    for corner in Corner::CLOCKWISE {
        let frame = corner.frame(width, height);
        let params = params_for(corner);
        let entry = frame.at(-params.p, 0.0);

        match start {
            None => {
                segments.push(PathSegment::MoveTo(entry));
                start = Some(entry);
            }
            Some(_) => segments.push(PathSegment::LineTo(entry)),
        }

        push_corner(&frame, &params, &mut segments);
    }

    if let Some(start) = start {
        segments.push(PathSegment::LineTo(start));
    }
    segments.push(PathSegment::Close);

    debug!(
        "generated squircle {}x{} with {} segments",
        width,
        height,
        segments.len()
    );

    SquirclePath {
        width,
        height,
        segments,
    }
}

/// Generate the squircle and serialize it as an SVG `d` string
pub fn get_svg_path(spec: &SquircleSpec) -> String {
    generate_path(spec).to_svg_d()
}

/// Emit entry transition, arc section and exit transition for one corner
fn push_corner(frame: &CornerFrame, params: &CornerPathParams, segments: &mut Vec<PathSegment>) {
    let CornerPathParams {
        a,
        b,
        c,
        d,
        p,
        arc_section_length,
        corner_radius,
        smoothing,
    } = *params;

    if corner_radius <= 0.0 {
        return;
    }

    let has_transitions = a + b + c > EPSILON || d > EPSILON;

    if has_transitions {
        segments.push(PathSegment::CubicTo {
            ctrl1: frame.at(-p + a, 0.0),
            ctrl2: frame.at(-p + a + b, 0.0),
            end: frame.at(-p + a + b + c, d),
        });
    }

    if arc_section_length > EPSILON {
        // The arc spans the middle of the quarter circle, inset by beta at
        // both ends; its tangents are perpendicular to the radii there.
        let beta = FRAC_PI_4 * smoothing;
        let span = FRAC_PI_2 - 2.0 * beta;
        let handle = 4.0 / 3.0 * (span / 4.0).tan() * corner_radius;
        let (sin, cos) = beta.sin_cos();

        let (start_along, start_across) = (-p + a + b + c, d);
        let (end_along, end_across) = (-d, p - a - b - c);

        segments.push(PathSegment::CubicTo {
            ctrl1: frame.at(start_along + handle * cos, start_across + handle * sin),
            ctrl2: frame.at(end_along - handle * sin, end_across - handle * cos),
            end: frame.at(end_along, end_across),
        });
    }

    if has_transitions {
        segments.push(PathSegment::CubicTo {
            ctrl1: frame.at(0.0, p - a - b),
            ctrl2: frame.at(0.0, p - a),
            end: frame.at(0.0, p),
        });
    }
}

fn sanitize_length(value: f64, what: &str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("clamping invalid {} {} to 0", what, value);
        0.0
    }
}

fn sanitize_smoothing(value: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        warn!("clamping invalid corner smoothing {} to 0", value);
        0.0
    } else if value > 1.0 {
        warn!("clamping corner smoothing {} to 1", value);
        1.0
    } else {
        value
    }
}
