//! Path segments and SVG `d` attribute serialization
//!
//! A [`SquirclePath`] is the generator's output: a single closed contour in
//! absolute box coordinates, together with the box size it was computed for.

use crate::geometry::{BoundingBox, Point};

/// A segment in a resolved path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Cubic Bezier curve
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
    /// Close path back to start
    Close,
}

impl PathSegment {
    /// End point of the segment, `None` for `Close`
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
            PathSegment::CubicTo { end, .. } => Some(*end),
            PathSegment::Close => None,
        }
    }
}

/// A closed squircle contour ready for SVG rendering
#[derive(Debug, Clone, PartialEq)]
pub struct SquirclePath {
    /// Box width the path was generated for
    pub width: f64,
    /// Box height the path was generated for
    pub height: f64,
    pub segments: Vec<PathSegment>,
}

impl SquirclePath {
    /// Convert to SVG path `d` attribute string
    ///
    /// Coordinates are absolute, rounded to 4 decimal places and printed in
    /// their shortest form.
    pub fn to_svg_d(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.segments.len());

        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) => {
                    parts.push(format!("M {} {}", fmt_num(p.x), fmt_num(p.y)));
                }
                PathSegment::LineTo(p) => {
                    parts.push(format!("L {} {}", fmt_num(p.x), fmt_num(p.y)));
                }
                PathSegment::CubicTo { ctrl1, ctrl2, end } => {
                    parts.push(format!(
                        "C {} {} {} {} {} {}",
                        fmt_num(ctrl1.x),
                        fmt_num(ctrl1.y),
                        fmt_num(ctrl2.x),
                        fmt_num(ctrl2.y),
                        fmt_num(end.x),
                        fmt_num(end.y)
                    ));
                }
                PathSegment::Close => parts.push("Z".to_string()),
            }
        }

        parts.join(" ")
    }

    /// First point of the contour
    pub fn start_point(&self) -> Option<Point> {
        match self.segments.first() {
            Some(PathSegment::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Last drawn point before the closing `Z`
    pub fn end_point(&self) -> Option<Point> {
        self.segments.iter().rev().find_map(PathSegment::end_point)
    }

    /// Number of cubic segments
    pub fn curve_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::CubicTo { .. }))
            .count()
    }

    /// Number of straight line segments
    pub fn line_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::LineTo(_)))
            .count()
    }

    /// Bounding box of every point, control points included
    pub fn bounds(&self) -> BoundingBox {
        let mut points = self.segments.iter().flat_map(|seg| match seg {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => vec![*p],
            PathSegment::CubicTo { ctrl1, ctrl2, end } => vec![*ctrl1, *ctrl2, *end],
            PathSegment::Close => vec![],
        });

        let Some(first) = points.next() else {
            return BoundingBox::zero();
        };
        points.fold(BoundingBox::at(first), |bounds, p| {
            bounds.expand_to_include(p)
        })
    }
}

/// Format a coordinate with at most 4 decimal places
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        // Also folds -0 into 0
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}
