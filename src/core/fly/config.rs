//! Fly animation configuration

use std::time::Duration;

use super::geometry::Size;

/// Default sprite width in pixels
pub const DEFAULT_SPRITE_WIDTH: f64 = 40.0;
/// Default sprite height in pixels
pub const DEFAULT_SPRITE_HEIGHT: f64 = 40.0;
/// Default duration of one flight leg
pub const DEFAULT_FLIGHT_DURATION: Duration = Duration::from_millis(2500);
/// Default pause at an anchor before taking off again
pub const DEFAULT_PAUSE_DURATION: Duration = Duration::from_millis(2000);
/// Default duration of the pre-flight flip
pub const DEFAULT_FLIP_DURATION: Duration = Duration::from_millis(150);
/// Default lateral wobble of the flight path, relative to its length
pub const DEFAULT_PATH_RANDOMNESS: f64 = 0.4;
/// Default number of curve segments sampled per flight
pub const DEFAULT_PATH_SAMPLES: usize = 5;

/// Timing and shape parameters for the fly animation
#[derive(Debug, Clone, PartialEq)]
pub struct FlyConfig {
    pub sprite: Size,
    pub flight_duration: Duration,
    pub pause_duration: Duration,
    pub flip_duration: Duration,
    /// Perpendicular displacement of the control points as a fraction of
    /// the path length. 0 gives a straight line.
    pub path_randomness: f64,
    pub path_samples: usize,
}

impl Default for FlyConfig {
    fn default() -> Self {
        Self {
            sprite: Size::new(DEFAULT_SPRITE_WIDTH, DEFAULT_SPRITE_HEIGHT),
            flight_duration: DEFAULT_FLIGHT_DURATION,
            pause_duration: DEFAULT_PAUSE_DURATION,
            flip_duration: DEFAULT_FLIP_DURATION,
            path_randomness: DEFAULT_PATH_RANDOMNESS,
            path_samples: DEFAULT_PATH_SAMPLES,
        }
    }
}

impl FlyConfig {
    pub fn with_sprite(mut self, width: f64, height: f64) -> Self {
        self.sprite = Size::new(width, height);
        self
    }

    pub fn with_flight_duration(mut self, duration: Duration) -> Self {
        self.flight_duration = duration;
        self
    }

    pub fn with_pause_duration(mut self, duration: Duration) -> Self {
        self.pause_duration = duration;
        self
    }

    pub fn with_flip_duration(mut self, duration: Duration) -> Self {
        self.flip_duration = duration;
        self
    }

    /// Negative or non-finite factors collapse to a straight path
    pub fn with_path_randomness(mut self, randomness: f64) -> Self {
        self.path_randomness = clamp_randomness(randomness);
        self
    }

    /// At least one segment is always sampled
    pub fn with_path_samples(mut self, samples: usize) -> Self {
        self.path_samples = samples.max(1);
        self
    }
}

/// Randomness usable as a wobble factor: finite and not negative
pub fn clamp_randomness(randomness: f64) -> f64 {
    if randomness.is_finite() {
        randomness.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FlyConfig::default();

        assert_eq!(config.sprite, Size::new(40.0, 40.0));
        assert_eq!(config.flight_duration, Duration::from_secs_f64(2.5));
        assert_eq!(config.pause_duration, Duration::from_millis(2000));
        assert_eq!(config.flip_duration, Duration::from_millis(150));
        assert_eq!(config.path_randomness, 0.4);
        assert_eq!(config.path_samples, 5);
    }

    #[test]
    fn test_builder_overrides() {
        let config = FlyConfig::default()
            .with_flight_duration(Duration::from_millis(500))
            .with_pause_duration(Duration::from_millis(1000))
            .with_path_randomness(2.0)
            .with_sprite(32.0, 24.0);

        assert_eq!(config.flight_duration, Duration::from_millis(500));
        assert_eq!(config.pause_duration, Duration::from_millis(1000));
        assert_eq!(config.path_randomness, 2.0);
        assert_eq!(config.sprite, Size::new(32.0, 24.0));
        assert_eq!(config.flip_duration, DEFAULT_FLIP_DURATION);
    }

    #[test]
    fn test_invalid_randomness_is_sanitized() {
        assert_eq!(FlyConfig::default().with_path_randomness(-1.0).path_randomness, 0.0);
        assert_eq!(
            FlyConfig::default().with_path_randomness(f64::NAN).path_randomness,
            0.0
        );
    }

    #[test]
    fn test_zero_samples_become_one() {
        assert_eq!(FlyConfig::default().with_path_samples(0).path_samples, 1);
    }

    #[test]
    fn test_clamp_randomness() {
        assert_eq!(clamp_randomness(2.0), 2.0);
        assert_eq!(clamp_randomness(-0.5), 0.0);
        assert_eq!(clamp_randomness(f64::NAN), 0.0);
        assert_eq!(clamp_randomness(f64::NEG_INFINITY), 0.0);
    }
}
