pub mod delaunay;
pub mod exact;
pub mod intersection;
pub mod min_circle;
pub mod predicates;

pub use delaunay::*;
pub use exact::*;
pub use intersection::*;
pub use min_circle::*;
pub use predicates::*;

use std::fmt;

/// A point in the plane. Integral input coordinates up to 2^53 are represented exactly,
/// which is what the exact predicates rely on.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        // -0.0 and 0.0 are the same point
        Self { x: x + 0.0, y: y + 0.0 }
    }

    /// Floating point squared distance; use [`compare_distance`] for exact comparisons
    pub fn squared_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Key for hashing points by value
    pub fn bits(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x as f64, y as f64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negative_zero() {
        assert_eq!(Point::new(-0.0, 1.0).bits(), Point::new(0.0, 1.0).bits());
        assert_eq!(Point::from((3i64, 4i64)).distance(&Point::default()), 5.0);
    }
}
