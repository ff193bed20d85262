//! Core geometric types shared by the path generator and the renderer

/// A 2D point in box coordinates (origin at the top-left corner, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A bounding box representing the spatial extent of a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Zero-sized box at a point
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_to_include() {
        let bounds = BoundingBox::at(Point::new(10.0, 10.0))
            .expand_to_include(Point::new(0.0, 20.0))
            .expand_to_include(Point::new(30.0, 5.0));
        assert_eq!(bounds, BoundingBox::new(0.0, 5.0, 30.0, 15.0));
    }

    #[test]
    fn test_contains_edges() {
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(100.0, 50.0)));
        assert!(!bounds.contains(Point::new(100.1, 50.0)));
    }

    #[test]
    fn test_distance() {
        let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }
}
