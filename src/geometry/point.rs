use std::fmt;

/// 2D point with f64 coordinates.
///
/// Any f64 is accepted, including NaN and infinities. Those propagate through
/// [`Point2D::distance_to`] instead of being rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// The point (0, 0).
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// Computed as `sqrt(dx * dx + dy * dy)`. Identical finite points yield
    /// exactly `0.0`, and the result does not depend on argument order.
    #[inline]
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Display string of the form `(x, y)`. Not meant to be parsed back.
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Point2D::ORIGIN
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(value: (f64, f64)) -> Self {
        Point2D::new(value.0, value.1)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(value: [f64; 2]) -> Self {
        Point2D::new(value[0], value[1])
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
