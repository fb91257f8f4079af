//! Decorative fly animation.
//!
//! A small sprite hops between named anchor elements on the page: it
//! rests, turns to face its next destination, and flies there along a
//! randomized curve. This module holds everything that does not touch the
//! DOM; the component lives in `ui::fly`.

mod config;
mod geometry;
mod path;
mod sequencer;

use std::time::Duration;

pub use config::*;
pub use geometry::{
    AnchorKey, AnchorMap, Measure, Offset, OffsetMap, Point, Rect, Size, resolve,
};
pub use path::{ControlDraws, FlightPath, bezier_path, generate_path};
pub use sequencer::{
    Effect, Event, FlightSequence, FlightSequencer, FlyError, PendingLeg, Phase, SequencerState,
    scale_x, transition,
};

/// Timing used by the hero section: short hops, long wobble
pub fn hero_config() -> FlyConfig {
    FlyConfig::default()
        .with_flight_duration(Duration::from_millis(500))
        .with_pause_duration(Duration::from_millis(1000))
        .with_path_randomness(2.0)
}

/// Anchor offsets used by the hero section
pub fn hero_offsets() -> OffsetMap {
    OffsetMap::from([
        (AnchorKey::Pill, Offset::y(-690.0)),
        (AnchorKey::Cta, Offset::y(-710.0)),
        (AnchorKey::Ipad, Offset::y(-690.0)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_config() {
        let config = hero_config();

        assert_eq!(config.flight_duration, Duration::from_millis(500));
        assert_eq!(config.pause_duration, Duration::from_millis(1000));
        assert_eq!(config.path_randomness, 2.0);
        assert_eq!(config.flip_duration, DEFAULT_FLIP_DURATION);
        assert_eq!(config.sprite, Size::new(40.0, 40.0));
    }

    #[test]
    fn test_hero_offsets_lift_the_cta_highest() {
        let offsets = hero_offsets();

        assert_eq!(offsets[&AnchorKey::Pill], Offset::y(-690.0));
        assert_eq!(offsets[&AnchorKey::Cta], Offset::y(-710.0));
        assert_eq!(offsets[&AnchorKey::Ipad], Offset::y(-690.0));
    }
}
