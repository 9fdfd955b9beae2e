//! Perforation placement
//!
//! Only a handful of arities have dedicated rules. Any other positive count
//! is spread along the horizontal midline.

use crate::constants::DEFAULT_SQUARE_HOLE_MM;
use crate::geometry::{Point, Polyline, Rect};
use crate::types::{HoleShape, Perforation};

/// A single planned hole, positioned relative to the label's lower-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hole {
    Circle {
        center: Point,
        radius: f64,
    },
    Square {
        center: Point,
        width: f64,
        height: f64,
    },
}

impl Hole {
    pub fn center(&self) -> Point {
        match self {
            Hole::Circle { center, .. } | Hole::Square { center, .. } => *center,
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Hole {
        match *self {
            Hole::Circle { center, radius } => Hole::Circle {
                center: center.offset(dx, dy),
                radius,
            },
            Hole::Square {
                center,
                width,
                height,
            } => Hole::Square {
                center: center.offset(dx, dy),
                width,
                height,
            },
        }
    }

    /// Closed outline for square holes, `None` for circles
    pub fn outline(&self) -> Option<Polyline> {
        match *self {
            Hole::Circle { .. } => None,
            Hole::Square {
                center,
                width,
                height,
            } => {
                let corner = center.offset(-width / 2.0, -height / 2.0);
                Some(Rect::new(corner.x, corner.y, width, height).to_polyline())
            }
        }
    }
}

/// Hole centers for `count` perforations on a `width` x `height` label
pub fn hole_centers(count: u32, width: f64, height: f64, distance: f64) -> Vec<Point> {
    let mid = height / 2.0;

    match count {
        0 => Vec::new(),
        1 => vec![Point::new(distance, mid)],
        2 => vec![Point::new(distance, mid), Point::new(width - distance, mid)],
        4 => vec![
            Point::new(distance, distance),
            Point::new(width - distance, distance),
            Point::new(distance, height - distance),
            Point::new(width - distance, height - distance),
        ],
        n => {
            let spacing = (width - 2.0 * distance) / (n - 1) as f64;
            (0..n)
                .map(|i| Point::new(distance + i as f64 * spacing, mid))
                .collect()
        }
    }
}

/// Plan the holes of a perforation pattern for one label.
///
/// Nothing is planned when the pattern has no usable size, even with a
/// positive count.
pub fn plan_holes(perforation: &Perforation, width: f64, height: f64) -> Vec<Hole> {
    let sized = perforation.size_mm > 0.0;
    let square_overrides =
        perforation.square_width_mm.is_some() && perforation.square_height_mm.is_some();

    if !sized && !square_overrides {
        return Vec::new();
    }

    let centers = hole_centers(perforation.count, width, height, perforation.distance_mm);

    match perforation.shape {
        HoleShape::Circle => {
            if !sized {
                return Vec::new();
            }
            let radius = perforation.size_mm / 2.0;
            centers
                .into_iter()
                .map(|center| Hole::Circle { center, radius })
                .collect()
        }
        HoleShape::Square => {
            let fallback = if sized {
                perforation.size_mm
            } else {
                DEFAULT_SQUARE_HOLE_MM
            };
            let side_w = perforation.square_width_mm.unwrap_or(fallback);
            let side_h = perforation.square_height_mm.unwrap_or(fallback);
            centers
                .into_iter()
                .map(|center| Hole::Square {
                    center,
                    width: side_w,
                    height: side_h,
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(count: u32, size: f64, distance: f64) -> Perforation {
        Perforation {
            count,
            size_mm: size,
            distance_mm: distance,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_holes() {
        assert!(hole_centers(0, 50.0, 20.0, 5.0).is_empty());
        assert!(plan_holes(&circle(0, 3.0, 5.0), 50.0, 20.0).is_empty());
    }

    #[test]
    fn test_single_hole_on_left_midline() {
        assert_eq!(
            hole_centers(1, 50.0, 20.0, 5.0),
            vec![Point::new(5.0, 10.0)]
        );
    }

    #[test]
    fn test_two_holes_mirror() {
        assert_eq!(
            hole_centers(2, 50.0, 20.0, 5.0),
            vec![Point::new(5.0, 10.0), Point::new(45.0, 10.0)]
        );
    }

    #[test]
    fn test_four_corner_holes() {
        assert_eq!(
            hole_centers(4, 50.0, 20.0, 5.0),
            vec![
                Point::new(5.0, 5.0),
                Point::new(45.0, 5.0),
                Point::new(5.0, 15.0),
                Point::new(45.0, 15.0),
            ]
        );
    }

    #[test]
    fn test_even_spacing_for_other_counts() {
        let centers = hole_centers(3, 50.0, 20.0, 5.0);
        assert_eq!(
            centers,
            vec![
                Point::new(5.0, 10.0),
                Point::new(25.0, 10.0),
                Point::new(45.0, 10.0),
            ]
        );

        let centers = hole_centers(5, 50.0, 20.0, 5.0);
        assert_eq!(centers.len(), 5);
        assert_eq!(centers[4], Point::new(45.0, 10.0));
    }

    #[test]
    fn test_circle_radius_is_half_size() {
        let holes = plan_holes(&circle(2, 4.0, 5.0), 50.0, 20.0);
        assert_eq!(holes.len(), 2);
        assert_eq!(
            holes[0],
            Hole::Circle {
                center: Point::new(5.0, 10.0),
                radius: 2.0,
            }
        );
    }

    #[test]
    fn test_unsized_pattern_plans_nothing() {
        assert!(plan_holes(&circle(4, 0.0, 5.0), 50.0, 20.0).is_empty());

        let square = Perforation {
            count: 2,
            shape: HoleShape::Square,
            square_width_mm: Some(2.0),
            ..Default::default()
        };
        assert!(plan_holes(&square, 50.0, 20.0).is_empty());
    }

    #[test]
    fn test_square_dimensions() {
        let sized = Perforation {
            count: 1,
            size_mm: 4.0,
            distance_mm: 5.0,
            shape: HoleShape::Square,
            square_height_mm: Some(2.0),
            ..Default::default()
        };
        let holes = plan_holes(&sized, 50.0, 20.0);
        assert_eq!(
            holes[0],
            Hole::Square {
                center: Point::new(5.0, 10.0),
                width: 4.0,
                height: 2.0,
            }
        );

        let overrides_only = Perforation {
            count: 1,
            distance_mm: 5.0,
            shape: HoleShape::Square,
            square_width_mm: Some(6.0),
            square_height_mm: Some(3.0),
            ..Default::default()
        };
        let holes = plan_holes(&overrides_only, 50.0, 20.0);
        assert_eq!(holes.len(), 1);
        let outline = holes[0].outline().unwrap();
        assert_eq!(outline.points[0], Point::new(2.0, 8.5));
        assert_eq!(outline.points[2], Point::new(8.0, 11.5));
    }
}
