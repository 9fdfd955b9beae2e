//! Geometry primitives shared by layout, tracing and assembly
//!
//! All coordinates are in millimeters in a bottom-up (Cartesian) space
//! unless a function says otherwise.

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Mirror across the horizontal axis of a canvas `height` tall.
    /// Converts between top-down raster rows and bottom-up sheet space.
    pub fn flip_y(self, height: f64) -> Self {
        Self::new(self.x, height - self.y)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An axis-aligned rectangle anchored at its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when the interiors intersect. Shared edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }

    /// Corners counter-clockwise from the lower-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.top()),
            Point::new(self.x, self.top()),
        ]
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.top().max(other.top()) - y,
        )
    }

    /// Closed outline of the rectangle
    pub fn to_polyline(&self) -> Polyline {
        let mut outline = Polyline::from_points(self.corners().to_vec());
        outline.close();
        outline
    }
}

/// An ordered run of points, optionally closed back to its start
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Append the first point again and mark the polyline closed
    pub fn close(&mut self) {
        if let Some(&first) = self.points.first() {
            self.points.push(first);
            self.closed = true;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Polyline {
        Polyline {
            points: self.points.iter().map(|p| p.offset(dx, dy)).collect(),
            closed: self.closed,
        }
    }

    /// Bounding box of all points, `None` when empty
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}
