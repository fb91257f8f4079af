//! Flight sequencer state machine.
//!
//! The fly cycles through a [`FlightSequence`] forever. Each leg runs
//! pause → flip → fly → commit. Transitions are pure: [`transition`] takes
//! the current state and an [`Event`] and returns the next state plus the
//! [`Effect`]s the driver has to carry out. Completion of the single
//! continuation effect in each batch (`Wait`, `Flip`, `Fly`, `RequestLeg`)
//! is reported back as the next event.

use std::time::Duration;

use super::config::FlyConfig;
use super::geometry::{AnchorKey, Point};
use super::path::{ControlDraws, FlightPath, bezier_path};

/// Errors raised while setting up a fly animation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlyError {
    #[error("flight sequence needs at least 2 anchors, got {0}")]
    SequenceTooShort(usize),
}

/// Ordered, cyclic list of anchors the fly visits
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSequence {
    keys: Vec<AnchorKey>,
}

impl FlightSequence {
    pub fn new(keys: Vec<AnchorKey>) -> Result<Self, FlyError> {
        if keys.len() < 2 {
            return Err(FlyError::SequenceTooShort(keys.len()));
        }
        Ok(Self { keys })
    }

    /// pill → cta → ipad → cta, the loop flown over the hero section
    pub fn hero() -> Self {
        Self {
            keys: vec![AnchorKey::Pill, AnchorKey::Cta, AnchorKey::Ipad, AnchorKey::Cta],
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[AnchorKey] {
        &self.keys
    }

    pub fn first(&self) -> AnchorKey {
        self.keys[0]
    }

    /// Index following `cursor`, wrapping to 0 after the last entry
    pub fn next_index(&self, cursor: usize) -> usize {
        (cursor + 1) % self.keys.len()
    }

    /// Source and destination of the leg starting at `cursor`
    pub fn leg(&self, cursor: usize) -> (AnchorKey, AnchorKey) {
        let cursor = cursor % self.keys.len();
        (self.keys[cursor], self.keys[self.next_index(cursor)])
    }
}

impl Default for FlightSequence {
    fn default() -> Self {
        Self::hero()
    }
}

/// What the sequencer does after the pre-flight pause
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingLeg {
    /// Fly between two sprite centers
    Fly { start: Point, end: Point },
    /// Destination unavailable; advance without moving
    Skip,
}

/// Sequencer phases
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Waiting for the container and the first anchor
    Uninitialized,
    /// Resting on an anchor, optionally with a leg queued behind the pause
    Idle { pending: Option<PendingLeg> },
    /// Turning to face the flight direction
    Flipping {
        start: Point,
        end: Point,
        mirrored: bool,
    },
    /// In the air towards `end_top_left`
    Flying { end_top_left: Point },
}

/// Mutable state of one fly
#[derive(Debug, Clone, PartialEq)]
pub struct SequencerState {
    /// Index of the current leg's source anchor
    pub cursor: usize,
    /// Last committed sprite top-left
    pub position: Option<Point>,
    /// Whether the sprite is horizontally mirrored
    pub mirrored: bool,
    pub has_flipped_once: bool,
    pub phase: Phase,
}

impl Default for SequencerState {
    fn default() -> Self {
        Self {
            cursor: 0,
            position: None,
            mirrored: true,
            has_flipped_once: false,
            phase: Phase::Uninitialized,
        }
    }
}

impl SequencerState {
    pub fn is_initialized(&self) -> bool {
        self.phase != Phase::Uninitialized
    }
}

/// Inputs to the sequencer
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Container mounted; carries the resolved first anchor
    Mounted { first_anchor: Option<Point> },
    /// Anchors of the current leg, resolved right before the leg starts
    LegRequested {
        source: Option<Point>,
        destination: Option<Point>,
    },
    PauseElapsed,
    /// Flip finished; carries the random draws for the upcoming path
    FlipDone { draws: ControlDraws },
    FlightDone,
}

/// Work the driver performs on behalf of the sequencer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Move the sprite instantly
    Place { top_left: Point, mirrored: bool },
    /// Make the sprite visible
    Show,
    /// Sleep, then send [`Event::PauseElapsed`]
    Wait(Duration),
    /// Animate the facing, then send [`Event::FlipDone`]
    Flip { mirrored: bool, duration: Duration },
    /// Animate along `path`, then send [`Event::FlightDone`]
    Fly { path: FlightPath, duration: Duration },
    /// Resolve the current leg's anchors and send [`Event::LegRequested`]
    RequestLeg,
}

impl Effect {
    /// Whether this effect produces the next event when it completes
    pub fn is_continuation(&self) -> bool {
        !matches!(self, Effect::Place { .. } | Effect::Show)
    }
}

/// Horizontal scale applied to the sprite for a facing
pub fn scale_x(mirrored: bool) -> f64 {
    if mirrored { -1.0 } else { 1.0 }
}

/// Computes the next state and effects for `event`.
///
/// Events that do not apply to the current phase leave the state untouched
/// and produce no effects.
pub fn transition(
    state: &SequencerState,
    event: Event,
    sequence: &FlightSequence,
    config: &FlyConfig,
) -> (SequencerState, Vec<Effect>) {
    let mut next = state.clone();

    let effects = match (&state.phase, event) {
        (Phase::Uninitialized, Event::Mounted { first_anchor }) => match first_anchor {
            Some(center) => {
                let top_left = center.to_top_left(config.sprite);
                next.cursor = 0;
                next.position = Some(top_left);
                next.mirrored = true;
                next.has_flipped_once = false;
                next.phase = Phase::Idle { pending: None };
                vec![
                    Effect::Place {
                        top_left,
                        mirrored: true,
                    },
                    Effect::Show,
                    Effect::RequestLeg,
                ]
            }
            None => {
                leptos::logging::warn!(
                    "[FlyAnimation] First anchor '{}' not resolvable yet, staying hidden",
                    sequence.first()
                );
                Vec::new()
            }
        },

        (
            Phase::Idle { pending: None },
            Event::LegRequested {
                source,
                destination,
            },
        ) => {
            let start = state.position.map(|p| p.to_center(config.sprite)).or(source);
            let (from, to) = sequence.leg(state.cursor);

            match (start, destination) {
                (Some(start), Some(end)) => {
                    next.phase = Phase::Idle {
                        pending: Some(PendingLeg::Fly { start, end }),
                    };
                    vec![Effect::Wait(config.pause_duration)]
                }
                (Some(_), None) => {
                    leptos::logging::warn!(
                        "[FlyAnimation] Destination '{}' unavailable, skipping leg {} -> {}",
                        to,
                        from,
                        to
                    );
                    next.phase = Phase::Idle {
                        pending: Some(PendingLeg::Skip),
                    };
                    vec![Effect::Wait(config.pause_duration)]
                }
                (None, Some(end)) => {
                    let top_left = end.to_top_left(config.sprite);
                    next.position = Some(top_left);
                    next.cursor = sequence.next_index(state.cursor);
                    vec![
                        Effect::Place {
                            top_left,
                            mirrored: state.mirrored,
                        },
                        Effect::RequestLeg,
                    ]
                }
                (None, None) => {
                    leptos::logging::error!(
                        "[FlyAnimation] Critical error: cannot determine path {} -> {}. Skipping this leg.",
                        from,
                        to
                    );
                    next.cursor = sequence.next_index(state.cursor);
                    vec![Effect::Wait(config.pause_duration)]
                }
            }
        }

        (Phase::Idle { pending }, Event::PauseElapsed) => match pending {
            Some(PendingLeg::Fly { start, end }) => {
                let mirrored = if state.has_flipped_once {
                    !state.mirrored
                } else {
                    false
                };
                next.phase = Phase::Flipping {
                    start: *start,
                    end: *end,
                    mirrored,
                };
                vec![Effect::Flip {
                    mirrored,
                    duration: config.flip_duration,
                }]
            }
            Some(PendingLeg::Skip) => {
                next.cursor = sequence.next_index(state.cursor);
                next.phase = Phase::Idle { pending: None };
                vec![Effect::RequestLeg]
            }
            None => vec![Effect::RequestLeg],
        },

        (
            Phase::Flipping {
                start,
                end,
                mirrored,
            },
            Event::FlipDone { draws },
        ) => {
            next.mirrored = *mirrored;
            next.has_flipped_once = true;

            let path = bezier_path(
                *start,
                *end,
                config.sprite,
                config.path_randomness,
                config.path_samples,
                draws,
            );
            let end_top_left = path
                .last()
                .unwrap_or_else(|| end.to_top_left(config.sprite));

            next.phase = Phase::Flying { end_top_left };
            vec![Effect::Fly {
                path,
                duration: config.flight_duration,
            }]
        }

        (Phase::Flying { end_top_left }, Event::FlightDone) => {
            next.position = Some(*end_top_left);
            next.cursor = sequence.next_index(state.cursor);
            next.phase = Phase::Idle { pending: None };
            vec![Effect::RequestLeg]
        }

        (phase, event) => {
            leptos::logging::warn!("[FlyAnimation] Ignoring {:?} while {:?}", event, phase);
            Vec::new()
        }
    };

    (next, effects)
}

/// Owns a fly's sequence, configuration and state
#[derive(Debug, Clone)]
pub struct FlightSequencer {
    sequence: FlightSequence,
    config: FlyConfig,
    state: SequencerState,
}

impl FlightSequencer {
    pub fn new(sequence: FlightSequence, config: FlyConfig) -> Self {
        Self {
            sequence,
            config,
            state: SequencerState::default(),
        }
    }

    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    pub fn sequence(&self) -> &FlightSequence {
        &self.sequence
    }

    pub fn config(&self) -> &FlyConfig {
        &self.config
    }

    /// Source and destination of the leg the cursor points at
    pub fn current_leg(&self) -> (AnchorKey, AnchorKey) {
        self.sequence.leg(self.state.cursor)
    }

    /// Applies `event` and returns the effects to perform
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        let (next, effects) = transition(&self.state, event, &self.sequence, &self.config);
        self.state = next;
        effects
    }

    pub fn mount(&mut self, first_anchor: Option<Point>) -> Vec<Effect> {
        self.handle(Event::Mounted { first_anchor })
    }

    pub fn begin_leg(&mut self, source: Option<Point>, destination: Option<Point>) -> Vec<Effect> {
        self.handle(Event::LegRequested {
            source,
            destination,
        })
    }

    pub fn pause_elapsed(&mut self) -> Vec<Effect> {
        self.handle(Event::PauseElapsed)
    }

    pub fn flip_done(&mut self, draws: ControlDraws) -> Vec<Effect> {
        self.handle(Event::FlipDone { draws })
    }

    pub fn flight_done(&mut self) -> Vec<Effect> {
        self.handle(Event::FlightDone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FlyConfig {
        FlyConfig::default()
            .with_pause_duration(Duration::from_millis(1000))
            .with_flip_duration(Duration::from_millis(100))
            .with_flight_duration(Duration::from_millis(500))
            .with_sprite(40.0, 40.0)
    }

    fn mounted() -> FlightSequencer {
        let mut sequencer = FlightSequencer::new(FlightSequence::hero(), config());
        sequencer.handle(Event::Mounted {
            first_anchor: Some(Point::new(100.0, 100.0)),
        });
        sequencer
    }

    fn draws() -> ControlDraws {
        ControlDraws::centered(0.2, 0.2)
    }

    #[test]
    fn test_sequence_requires_two_anchors() {
        assert_eq!(
            FlightSequence::new(vec![AnchorKey::Pill]),
            Err(FlyError::SequenceTooShort(1))
        );
        assert_eq!(
            FlightSequence::new(Vec::new()),
            Err(FlyError::SequenceTooShort(0))
        );
        assert!(FlightSequence::new(vec![AnchorKey::Pill, AnchorKey::Cta]).is_ok());
    }

    #[test]
    fn test_sequence_leg_wraps() {
        let sequence = FlightSequence::hero();

        assert_eq!(sequence.leg(0), (AnchorKey::Pill, AnchorKey::Cta));
        assert_eq!(sequence.leg(2), (AnchorKey::Ipad, AnchorKey::Cta));
        assert_eq!(sequence.leg(3), (AnchorKey::Cta, AnchorKey::Pill));
        assert_eq!(sequence.next_index(3), 0);
    }

    #[test]
    fn test_mount_places_sprite_mirrored_and_requests_leg() {
        let mut sequencer = FlightSequencer::new(FlightSequence::hero(), config());

        let effects = sequencer.handle(Event::Mounted {
            first_anchor: Some(Point::new(100.0, 100.0)),
        });

        assert_eq!(
            effects,
            vec![
                Effect::Place {
                    top_left: Point::new(80.0, 80.0),
                    mirrored: true,
                },
                Effect::Show,
                Effect::RequestLeg,
            ]
        );
        assert_eq!(sequencer.state().position, Some(Point::new(80.0, 80.0)));
        assert_eq!(sequencer.state().phase, Phase::Idle { pending: None });
    }

    #[test]
    fn test_mount_without_anchor_stays_uninitialized() {
        let mut sequencer = FlightSequencer::new(FlightSequence::hero(), config());

        let effects = sequencer.handle(Event::Mounted { first_anchor: None });

        assert!(effects.is_empty());
        assert!(!sequencer.state().is_initialized());
    }

    #[test]
    fn test_second_mount_is_ignored() {
        let mut sequencer = mounted();
        let before = sequencer.state().clone();

        let effects = sequencer.handle(Event::Mounted {
            first_anchor: Some(Point::new(0.0, 0.0)),
        });

        assert!(effects.is_empty());
        assert_eq!(sequencer.state(), &before);
    }

    #[test]
    fn test_leg_uses_committed_position_not_live_source() {
        let mut sequencer = mounted();

        sequencer.handle(Event::LegRequested {
            source: Some(Point::new(999.0, 999.0)),
            destination: Some(Point::new(300.0, 100.0)),
        });

        assert_eq!(
            sequencer.state().phase,
            Phase::Idle {
                pending: Some(PendingLeg::Fly {
                    start: Point::new(100.0, 100.0),
                    end: Point::new(300.0, 100.0),
                }),
            }
        );
    }

    #[test]
    fn test_full_leg_runs_pause_flip_fly_commit() {
        let mut sequencer = mounted();

        let effects = sequencer.handle(Event::LegRequested {
            source: None,
            destination: Some(Point::new(300.0, 100.0)),
        });
        assert_eq!(effects, vec![Effect::Wait(Duration::from_millis(1000))]);

        let effects = sequencer.handle(Event::PauseElapsed);
        assert_eq!(
            effects,
            vec![Effect::Flip {
                mirrored: false,
                duration: Duration::from_millis(100),
            }]
        );

        let effects = sequencer.handle(Event::FlipDone { draws: draws() });
        assert_eq!(effects.len(), 1);
        let Effect::Fly { path, duration } = &effects[0] else {
            panic!("expected a flight, got {:?}", effects);
        };
        assert_eq!(*duration, Duration::from_millis(500));
        assert_eq!(path.len(), config().path_samples + 1);
        assert_eq!(sequencer.state().cursor, 0);

        let effects = sequencer.handle(Event::FlightDone);
        assert_eq!(effects, vec![Effect::RequestLeg]);
        assert_eq!(sequencer.state().cursor, 1);
        assert_eq!(sequencer.state().position, Some(Point::new(280.0, 80.0)));
    }

    #[test]
    fn test_first_flip_is_unmirrored_regardless_of_initial_facing() {
        for initial in [true, false] {
            let state = SequencerState {
                cursor: 0,
                position: Some(Point::new(0.0, 0.0)),
                mirrored: initial,
                has_flipped_once: false,
                phase: Phase::Idle {
                    pending: Some(PendingLeg::Fly {
                        start: Point::new(20.0, 20.0),
                        end: Point::new(200.0, 20.0),
                    }),
                },
            };

            let (next, effects) = transition(
                &state,
                Event::PauseElapsed,
                &FlightSequence::hero(),
                &config(),
            );

            assert!(matches!(
                next.phase,
                Phase::Flipping {
                    mirrored: false,
                    ..
                }
            ));
            assert!(matches!(effects[0], Effect::Flip { mirrored: false, .. }));
        }
    }

    #[test]
    fn test_later_flips_toggle_facing() {
        let state = SequencerState {
            cursor: 1,
            position: Some(Point::new(0.0, 0.0)),
            mirrored: false,
            has_flipped_once: true,
            phase: Phase::Idle {
                pending: Some(PendingLeg::Fly {
                    start: Point::new(20.0, 20.0),
                    end: Point::new(200.0, 20.0),
                }),
            },
        };

        let (next, _) = transition(
            &state,
            Event::PauseElapsed,
            &FlightSequence::hero(),
            &config(),
        );
        let (next, _) = transition(
            &next,
            Event::FlipDone { draws: draws() },
            &FlightSequence::hero(),
            &config(),
        );

        assert!(next.mirrored);
        assert!(next.has_flipped_once);
    }

    #[test]
    fn test_missing_destination_pauses_then_skips() {
        let mut sequencer = mounted();

        let effects = sequencer.handle(Event::LegRequested {
            source: None,
            destination: None,
        });
        assert_eq!(effects, vec![Effect::Wait(Duration::from_millis(1000))]);
        assert_eq!(sequencer.state().cursor, 0);

        let effects = sequencer.handle(Event::PauseElapsed);
        assert_eq!(effects, vec![Effect::RequestLeg]);
        assert_eq!(sequencer.state().cursor, 1);
        assert_eq!(sequencer.state().position, Some(Point::new(80.0, 80.0)));
    }

    #[test]
    fn test_unknown_position_snaps_to_destination() {
        let state = SequencerState {
            phase: Phase::Idle { pending: None },
            ..SequencerState::default()
        };

        let (next, effects) = transition(
            &state,
            Event::LegRequested {
                source: None,
                destination: Some(Point::new(60.0, 60.0)),
            },
            &FlightSequence::hero(),
            &config(),
        );

        assert_eq!(
            effects,
            vec![
                Effect::Place {
                    top_left: Point::new(40.0, 40.0),
                    mirrored: true,
                },
                Effect::RequestLeg,
            ]
        );
        assert_eq!(next.position, Some(Point::new(40.0, 40.0)));
        assert_eq!(next.cursor, 1);
    }

    #[test]
    fn test_unknown_position_uses_resolved_source() {
        let state = SequencerState {
            phase: Phase::Idle { pending: None },
            ..SequencerState::default()
        };

        let (next, _) = transition(
            &state,
            Event::LegRequested {
                source: Some(Point::new(10.0, 10.0)),
                destination: Some(Point::new(60.0, 60.0)),
            },
            &FlightSequence::hero(),
            &config(),
        );

        assert_eq!(
            next.phase,
            Phase::Idle {
                pending: Some(PendingLeg::Fly {
                    start: Point::new(10.0, 10.0),
                    end: Point::new(60.0, 60.0),
                }),
            }
        );
    }

    #[test]
    fn test_nothing_resolvable_advances_with_backoff() {
        let state = SequencerState {
            cursor: 3,
            phase: Phase::Idle { pending: None },
            ..SequencerState::default()
        };

        let (next, effects) = transition(
            &state,
            Event::LegRequested {
                source: None,
                destination: None,
            },
            &FlightSequence::hero(),
            &config(),
        );

        assert_eq!(next.cursor, 0);
        assert_eq!(effects, vec![Effect::Wait(Duration::from_millis(1000))]);

        let (_, effects) = transition(&next, Event::PauseElapsed, &FlightSequence::hero(), &config());
        assert_eq!(effects, vec![Effect::RequestLeg]);
    }

    #[test]
    fn test_out_of_phase_events_are_ignored() {
        let mut sequencer = mounted();
        let before = sequencer.state().clone();

        assert!(sequencer.handle(Event::FlightDone).is_empty());
        assert!(sequencer.handle(Event::FlipDone { draws: draws() }).is_empty());
        assert_eq!(sequencer.state(), &before);
    }

    #[test]
    fn test_continuation_effects() {
        assert!(!Effect::Show.is_continuation());
        assert!(
            !Effect::Place {
                top_left: Point::default(),
                mirrored: false,
            }
            .is_continuation()
        );
        assert!(Effect::RequestLeg.is_continuation());
        assert!(Effect::Wait(Duration::ZERO).is_continuation());
    }

    #[test]
    fn test_scale_x() {
        assert_eq!(scale_x(true), -1.0);
        assert_eq!(scale_x(false), 1.0);
    }
}
