use std::fmt;

use super::EPSILON;

/// A single sample `(x, y)` of a tabulated function.
///
/// Points are plain values. Setters do not enforce ordering; that is the job
/// of the function that stores the point. Because `Point` is `Copy`, a point
/// read from a function is detached from it and can be changed freely.
///
/// # Examples
///
/// ```rust
/// use tabfn::Point;
///
/// let mut p = Point::new(1.0, 2.0);
/// p.set_y(3.0);
/// assert_eq!(p, Point::from((1.0, 3.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Returns true if both x-coordinates coincide within [`EPSILON`].
    pub fn same_x(&self, other: &Point) -> bool {
        (self.x - other.x).abs() <= EPSILON
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
