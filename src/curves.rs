use kurbo::{BezPath, PathEl, Point};
use std::f64::consts::PI;
use std::fmt::Write as _;

/// Growth rate of the equiangular spiral, r = r0 * e^(GROWTH * t).
const SPIRAL_GROWTH: f64 = 0.12;

/// Samples per full spiral turn before Bezier smoothing.
const SAMPLES_PER_TURN: f64 = 60.0;

/// Chord-fraction control point placement used when no other smoothing is
/// requested.
pub const DEFAULT_SMOOTHING: f64 = 0.22;

/// An immutable parametric curve: a structured path command list.
///
/// Curves are composed as `kurbo` path elements and only serialized to the
/// textual SVG path grammar at the output boundary, so numeric precision
/// stays out of the geometry code.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve {
    path: BezPath,
}

impl Curve {
    pub fn new(path: BezPath) -> Self {
        Self { path }
    }

    /// True for the degenerate case (no commands at all).
    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    pub fn elements(&self) -> &[PathEl] {
        self.path.elements()
    }

    /// Serialize to SVG path data with fixed 2-decimal coordinates.
    pub fn to_path_data(&self) -> String {
        write_path_data(self.path.elements())
    }
}

/// Serialize path elements to the SVG path grammar, 2-decimal fixed
/// precision. Consumers that round-trip curves through text compare at
/// this precision, so it must stay stable.
pub fn write_path_data(elements: &[PathEl]) -> String {
    let mut d = String::new();
    for el in elements {
        if !d.is_empty() {
            d.push(' ');
        }
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M {:.2} {:.2}", p.x, p.y);
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L {:.2} {:.2}", p.x, p.y);
            }
            PathEl::QuadTo(c, p) => {
                let _ = write!(d, "Q {:.2} {:.2} {:.2} {:.2}", c.x, c.y, p.x, p.y);
            }
            PathEl::CurveTo(c1, c2, p) => {
                let _ = write!(
                    d,
                    "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                    c1.x, c1.y, c2.x, c2.y, p.x, p.y
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

/// Raw spiral sample points, before smoothing into Bezier segments.
///
/// Empty when the step count computed from `turns` falls below one; that is
/// the documented degenerate case, not an error.
pub fn spiral_samples(center: Point, initial_radius: f64, turns: f64, rotation: f64) -> Vec<Point> {
    let steps = (SAMPLES_PER_TURN * turns.abs()).floor() as i64;
    if steps < 1 {
        return Vec::new();
    }
    let steps = steps.max(6);

    let mut points = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let t = (i as f64 / steps as f64) * turns * 2.0 * PI;
        let r = initial_radius * (SPIRAL_GROWTH * t).exp();
        points.push(Point::new(
            center.x + r * (t + rotation).cos(),
            center.y + r * (t + rotation).sin(),
        ));
    }
    points
}

/// Logarithmic spiral as a smooth cubic-Bezier chain.
///
/// Control points sit at `smoothing` fraction of the chord from each
/// endpoint, which only needs the adjacent sample pair (no neighbor
/// lookahead).
pub fn spiral(center: Point, initial_radius: f64, turns: f64, rotation: f64, smoothing: f64) -> Curve {
    let points = spiral_samples(center, initial_radius, turns, rotation);
    if points.len() < 2 {
        return Curve::default();
    }

    let mut path = BezPath::new();
    path.move_to(points[0]);
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let chord = p1 - p0;
        path.curve_to(p0 + chord * smoothing, p1 - chord * smoothing, p1);
    }
    Curve::new(path)
}

/// Closed teardrop leaf: one cubic from `origin` out to the tip, then a
/// quadratic back through a control point behind the origin.
pub fn leaf(origin: Point, angle: f64, length: f64) -> Curve {
    let at = |theta: f64, dist: f64| Point::new(origin.x + dist * theta.cos(), origin.y + dist * theta.sin());

    let c1 = at(angle - 0.9, length * 0.35);
    let c2 = at(angle + 0.9, length * 0.35);
    let tip = at(angle, length);
    let back = at(angle + PI, length * 0.15);

    let mut path = BezPath::new();
    path.move_to(origin);
    path.curve_to(c1, c2, tip);
    path.quad_to(back, origin);
    path.close_path();
    Curve::new(path)
}
