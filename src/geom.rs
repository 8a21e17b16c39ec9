#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in scene space. Pointer coordinates are used directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The two stored corners (or endpoints) of a corner-bearing element.
///
/// Order is not canonical while a gesture is in progress: `x1 > x2` and
/// `y1 > y2` are both legal until [`crate::transform::canonicalize`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Corners {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Corners {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[must_use]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[must_use]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.x1.min(self.x2)
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x1.max(self.x2)
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.y1.min(self.y2)
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y1.max(self.y2)
    }

    /// Signed horizontal extent (`x2 - x1`).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed vertical extent (`y2 - y1`).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Whether `pt` lies inside the axis-aligned box spanned by the corners,
    /// edges included, regardless of corner order.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.min_x() <= pt.x && pt.x <= self.max_x() && self.min_y() <= pt.y && pt.y <= self.max_y()
    }
}
