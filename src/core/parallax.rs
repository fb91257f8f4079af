//! Accelerating parallax for the hero background.
//!
//! The background moves at `base_factor` px per scrolled px during the
//! first interval, and that speed grows by `rate` every `interval` px.

pub const DEFAULT_BASE_FACTOR: f64 = 0.6;
pub const DEFAULT_RATE: f64 = 1.1;
pub const DEFAULT_INTERVAL: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub base_factor: f64,
    pub rate: f64,
    pub interval: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            base_factor: DEFAULT_BASE_FACTOR,
            rate: DEFAULT_RATE,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl Parallax {
    /// Vertical translation in px for a page scroll of `scroll_y`.
    /// Always `<= 0`: the background moves up.
    pub fn translate_y(&self, scroll_y: f64) -> f64 {
        if !scroll_y.is_finite() || scroll_y <= 0.0 || self.interval <= 0.0 {
            return 0.0;
        }

        let full_intervals = (scroll_y / self.interval).floor();
        let remainder = scroll_y - full_intervals * self.interval;

        let accumulated = if full_intervals > 0.0 {
            let geometric_sum = if (self.rate - 1.0).abs() < f64::EPSILON {
                full_intervals
            } else {
                (self.rate.powf(full_intervals) - 1.0) / (self.rate - 1.0)
            };
            self.base_factor * self.interval * geometric_sum
        } else {
            0.0
        };

        let partial = self.base_factor * self.rate.powf(full_intervals) * remainder;

        -(accumulated + partial)
    }
}
