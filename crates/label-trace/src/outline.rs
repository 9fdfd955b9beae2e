//! Path to polyline assembly

use label_layout::{Point, Polyline, Rect};

use crate::flatten::{DEFAULT_CURVE_SEGMENTS, flatten};
use crate::path::PathCommand;

/// Polylines produced from one parsed path, in drawing order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    pub polylines: Vec<Polyline>,
}

impl Outline {
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.polylines.len()
    }

    pub fn extend(&mut self, other: Outline) {
        self.polylines.extend(other.polylines);
    }

    /// Bounding box over every polyline, `None` when nothing was traced
    pub fn bounds(&self) -> Option<Rect> {
        self.polylines
            .iter()
            .filter_map(Polyline::bounds)
            .reduce(|a, b| a.union(&b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineOptions {
    /// Emit `canvas_height - y` instead of `y`
    pub flip_y: bool,
    pub canvas_height: f64,
    pub curve_segments: usize,
    /// Translation applied to every point before the flip
    pub offset: Point,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            flip_y: false,
            canvas_height: 0.0,
            curve_segments: DEFAULT_CURVE_SEGMENTS,
            offset: Point::default(),
        }
    }
}

impl OutlineOptions {
    pub fn flipped(canvas_height: f64) -> Self {
        Self {
            flip_y: true,
            canvas_height,
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_curve_segments(mut self, segments: usize) -> Self {
        self.curve_segments = segments;
        self
    }

    fn emit(&self, point: Point) -> Point {
        let moved = point.offset(self.offset.x, self.offset.y);
        if self.flip_y {
            moved.flip_y(self.canvas_height)
        } else {
            moved
        }
    }
}

/// Pen state while walking a command list. Points are kept in path space
/// until the polyline is flushed.
struct Pen<'a> {
    options: &'a OutlineOptions,
    position: Point,
    start: Point,
    current: Option<Polyline>,
    done: Vec<Polyline>,
}

impl<'a> Pen<'a> {
    fn new(options: &'a OutlineOptions) -> Self {
        Self {
            options,
            position: Point::default(),
            start: Point::default(),
            current: None,
            done: Vec::new(),
        }
    }

    fn flush(&mut self) {
        let Some(polyline) = self.current.take() else {
            return;
        };
        if !polyline.is_empty() {
            let points = polyline.points.iter().map(|&p| self.options.emit(p));
            let mut emitted = Polyline::from_points(points.collect());
            emitted.closed = polyline.closed;
            self.done.push(emitted);
        }
    }

    fn move_to(&mut self, to: Point) {
        self.flush();
        self.position = to;
        self.start = to;
        self.current = Some(Polyline::from_points(vec![to]));
    }

    /// Polyline receiving drawing commands, started at the pen if none is open
    fn active(&mut self) -> &mut Polyline {
        let position = self.position;
        if self.current.is_none() {
            self.start = position;
        }
        self.current
            .get_or_insert_with(|| Polyline::from_points(vec![position]))
    }

    fn line_to(&mut self, to: Point) {
        self.active().push(to);
        self.position = to;
    }

    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        let points = flatten(self.position, ctrl1, ctrl2, to, self.options.curve_segments);
        let polyline = self.active();
        for point in points {
            polyline.push(point);
        }
        self.position = to;
    }

    fn close(&mut self) {
        let start = self.start;
        if let Some(polyline) = self.current.as_mut() {
            polyline.push(start);
            polyline.closed = true;
        }
        self.position = start;
    }

    fn finish(mut self) -> Outline {
        self.flush();
        Outline {
            polylines: self.done,
        }
    }
}

/// Turn parsed commands into polylines.
///
/// A move flushes the open polyline and starts a new one. Close appends the
/// start point and returns the pen there; the polyline stays open until the
/// next move or the end of input.
pub fn to_outline(commands: &[PathCommand], options: &OutlineOptions) -> Outline {
    let mut pen = Pen::new(options);

    for command in commands {
        let at = pen.position;
        match *command {
            PathCommand::MoveTo { mode, to } => pen.move_to(mode.resolve(at, to)),
            PathCommand::LineTo { mode, to } => pen.line_to(mode.resolve(at, to)),
            PathCommand::Horizontal { mode, x } => {
                let to = mode.resolve(at, Point::new(x, 0.0));
                pen.line_to(Point::new(to.x, at.y));
            }
            PathCommand::Vertical { mode, y } => {
                let to = mode.resolve(at, Point::new(0.0, y));
                pen.line_to(Point::new(at.x, to.y));
            }
            PathCommand::CubicTo {
                mode,
                ctrl1,
                ctrl2,
                to,
            } => pen.curve_to(
                mode.resolve(at, ctrl1),
                mode.resolve(at, ctrl2),
                mode.resolve(at, to),
            ),
            PathCommand::Close => pen.close(),
        }
    }

    pen.finish()
}
