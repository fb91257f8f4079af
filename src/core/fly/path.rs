//! Randomized cubic Bézier flight paths.
//!
//! The random part of a path is captured in [`ControlDraws`], so the curve
//! itself ([`bezier_path`]) is a pure function of its inputs.

use rand::Rng;

use super::config::clamp_randomness;
use super::geometry::{Point, Size};

/// Range of the control point offset along the start→end line
const CONTROL_FRACTION_MIN: f64 = 0.1;
const CONTROL_FRACTION_SPAN: f64 = 0.2;

/// Random draws that shape one flight path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlDraws {
    /// Position of P1 along the line, in `[0.1, 0.3]` from the start
    pub first_fraction: f64,
    /// Position of P2 along the line, in `[0.1, 0.3]` from the end
    pub second_fraction: f64,
    /// Lateral draw for P1 in `[0, 1)`; 0.5 means no displacement
    pub first_lateral: f64,
    /// Lateral draw for P2 in `[0, 1)`; 0.5 means no displacement
    pub second_lateral: f64,
}

impl ControlDraws {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self {
            first_fraction: CONTROL_FRACTION_MIN + rng.gen_range(0.0..1.0) * CONTROL_FRACTION_SPAN,
            second_fraction: CONTROL_FRACTION_MIN + rng.gen_range(0.0..1.0) * CONTROL_FRACTION_SPAN,
            first_lateral: rng.gen_range(0.0..1.0),
            second_lateral: rng.gen_range(0.0..1.0),
        }
    }

    /// Draws that place both control points on the straight line
    pub fn centered(first_fraction: f64, second_fraction: f64) -> Self {
        Self {
            first_fraction,
            second_fraction,
            first_lateral: 0.5,
            second_lateral: 0.5,
        }
    }
}

/// Sampled flight keyframes: sprite top-left positions and their time
/// fractions, both of length `samples + 1`
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPath {
    pub points: Vec<Point>,
    pub times: Vec<f64>,
}

impl FlightPath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Position at `progress` (clamped to `[0, 1]`) with linear easing
    /// between keyframes
    pub fn position_at(&self, progress: f64) -> Option<Point> {
        let progress = progress.clamp(0.0, 1.0);
        let first = self.first()?;
        let start_time = *self.times.first()?;

        if progress <= start_time {
            return Some(first);
        }

        for window in 0..self.times.len().min(self.points.len()).saturating_sub(1) {
            let (t0, t1) = (self.times[window], self.times[window + 1]);
            if progress <= t1 {
                let span = t1 - t0;
                let local = if span > 0.0 { (progress - t0) / span } else { 1.0 };
                let (p0, p1) = (self.points[window], self.points[window + 1]);
                return Some(p0 + (p1 - p0) * local);
            }
        }

        self.last()
    }
}

/// Generates a randomized flight path from `start` to `end` (sprite centers)
pub fn generate_path<R: Rng>(
    start: Point,
    end: Point,
    sprite: Size,
    randomness: f64,
    samples: usize,
    rng: &mut R,
) -> FlightPath {
    let draws = ControlDraws::sample(rng);
    bezier_path(start, end, sprite, randomness, samples, draws)
}

/// Evaluates the cubic Bézier defined by `start`, `end` and the control
/// points derived from `draws`, returning sprite top-left keyframes
pub fn bezier_path(
    start: Point,
    end: Point,
    sprite: Size,
    randomness: f64,
    samples: usize,
    draws: ControlDraws,
) -> FlightPath {
    let samples = samples.max(1);
    let randomness = clamp_randomness(randomness);
    let delta = end - start;
    let length = delta.length();

    // Coincident endpoints have no direction; keep the curve on the point.
    let perpendicular = if length > 0.0 {
        Point::new(-delta.y / length, delta.x / length)
    } else {
        Point::default()
    };

    let wobble = length * randomness;
    let p0 = start;
    let p1 = start
        + delta * draws.first_fraction
        + perpendicular * ((draws.first_lateral - 0.5) * wobble);
    let p2 = end - delta * draws.second_fraction
        + perpendicular * ((draws.second_lateral - 0.5) * wobble);
    let p3 = end;

    let mut points = Vec::with_capacity(samples + 1);
    let mut times = Vec::with_capacity(samples + 1);

    for i in 0..=samples {
        let t = i as f64 / samples as f64;
        let point = cubic_bezier(p0, p1, p2, p3, t);
        points.push(point.to_top_left(sprite));
        times.push(t);
    }

    FlightPath { points, times }
}

fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + p1 * (3.0 * mt * mt * t) + p2 * (3.0 * mt * t * t) + p3 * (t * t * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const EPSILON: f64 = 1e-9;
    const SPRITE: Size = Size::new(10.0, 10.0);

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_path_length_and_times() {
        let mut rng = SmallRng::seed_from_u64(7);
        let path = generate_path(
            Point::new(10.0, 20.0),
            Point::new(400.0, -50.0),
            SPRITE,
            0.4,
            5,
            &mut rng,
        );

        assert_eq!(path.points.len(), 6);
        assert_eq!(path.times.len(), 6);
        assert_eq!(path.times[0], 0.0);
        assert_eq!(*path.times.last().unwrap(), 1.0);
        assert!(path.times.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_endpoints_match_start_and_end() {
        let start = Point::new(-30.0, 75.5);
        let end = Point::new(640.0, 12.25);

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let path = generate_path(start, end, SPRITE, 2.0, 8, &mut rng);

            assert_close(path.first().unwrap().to_center(SPRITE), start);
            assert_close(path.last().unwrap().to_center(SPRITE), end);
        }
    }

    #[test]
    fn test_zero_randomness_stays_on_axis() {
        let path = bezier_path(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            SPRITE,
            0.0,
            4,
            ControlDraws::centered(0.2, 0.2),
        );

        let midpoint = path.points[2].to_center(SPRITE);
        assert!(midpoint.y.abs() < EPSILON);
        assert!((midpoint.x - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_randomness_ignores_lateral_draws() {
        let mut rng = SmallRng::seed_from_u64(42);
        let path = generate_path(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            SPRITE,
            0.0,
            4,
            &mut rng,
        );

        for point in &path.points {
            assert!(point.to_center(SPRITE).y.abs() < EPSILON);
        }
    }

    #[test]
    fn test_draws_within_documented_ranges() {
        let mut rng = SmallRng::seed_from_u64(1234);
        for _ in 0..500 {
            let draws = ControlDraws::sample(&mut rng);
            assert!((0.1..=0.3).contains(&draws.first_fraction));
            assert!((0.1..=0.3).contains(&draws.second_fraction));
            assert!((0.0..1.0).contains(&draws.first_lateral));
            assert!((0.0..1.0).contains(&draws.second_lateral));
        }
    }

    #[test]
    fn test_lateral_draws_bend_the_curve() {
        let draws = ControlDraws {
            first_fraction: 0.2,
            second_fraction: 0.2,
            first_lateral: 1.0,
            second_lateral: 1.0,
        };
        let path = bezier_path(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            SPRITE,
            1.0,
            2,
            draws,
        );

        // Perpendicular of +x is +y; both controls pushed by 0.5 * 100.
        let midpoint = path.points[1].to_center(SPRITE);
        assert!((midpoint.y - 37.5).abs() < EPSILON);
    }

    #[test]
    fn test_unusable_randomness_gives_straight_path() {
        let draws = ControlDraws {
            first_fraction: 0.2,
            second_fraction: 0.2,
            first_lateral: 1.0,
            second_lateral: 1.0,
        };

        for randomness in [f64::NAN, f64::INFINITY, -1.0] {
            let path = bezier_path(
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                SPRITE,
                randomness,
                4,
                draws,
            );

            assert!(path.points.iter().all(Point::is_finite), "{randomness}");
            for point in &path.points {
                assert!(point.to_center(SPRITE).y.abs() < EPSILON, "{randomness}");
            }
        }
    }

    #[test]
    fn test_coincident_endpoints_do_not_produce_nan() {
        let point = Point::new(50.0, 50.0);
        let mut rng = SmallRng::seed_from_u64(3);
        let path = generate_path(point, point, SPRITE, 0.4, 5, &mut rng);

        assert!(path.points.iter().all(Point::is_finite));
        for p in &path.points {
            assert_close(p.to_center(SPRITE), point);
        }
    }

    #[test]
    fn test_zero_samples_still_yields_endpoints() {
        let mut rng = SmallRng::seed_from_u64(9);
        let path = generate_path(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            SPRITE,
            0.4,
            0,
            &mut rng,
        );

        assert_eq!(path.times, vec![0.0, 1.0]);
    }

    #[test]
    fn test_position_at_interpolates_linearly() {
        let path = FlightPath {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 20.0),
            ],
            times: vec![0.0, 0.5, 1.0],
        };

        assert_eq!(path.position_at(0.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(path.position_at(0.25), Some(Point::new(5.0, 0.0)));
        assert_eq!(path.position_at(0.75), Some(Point::new(10.0, 10.0)));
        assert_eq!(path.position_at(1.0), Some(Point::new(10.0, 20.0)));
        assert_eq!(path.position_at(3.0), Some(Point::new(10.0, 20.0)));
        assert_eq!(path.position_at(-1.0), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_position_at_empty_path() {
        let path = FlightPath {
            points: Vec::new(),
            times: Vec::new(),
        };

        assert!(path.position_at(0.5).is_none());
        assert!(path.is_empty());
    }
}
