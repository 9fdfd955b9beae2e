//! Cubic Bézier flattening

use label_layout::Point;

/// Segments per curve when nothing else is configured
pub const DEFAULT_CURVE_SEGMENTS: usize = 12;

/// Sample a cubic Bézier at `t = i / segments` for `i` in `1..=segments`.
///
/// The start point is not emitted, so consecutive curves chain without
/// duplicates. A `segments` of 0 is treated as 1. The last point is
/// exactly `p3`.
pub fn flatten(p0: Point, p1: Point, p2: Point, p3: Point, segments: usize) -> Vec<Point> {
    let n = segments.max(1);

    (1..=n)
        .map(|i| {
            if i == n {
                return p3;
            }
            let t = i as f64 / n as f64;
            let mt = 1.0 - t;
            let a = mt * mt * mt;
            let b = 3.0 * mt * mt * t;
            let c = 3.0 * mt * t * t;
            let d = t * t * t;
            Point::new(
                a * p0.x + b * p1.x + c * p2.x + d * p3.x,
                a * p0.y + b * p1.y + c * p2.y + d * p3.y,
            )
        })
        .collect()
}
