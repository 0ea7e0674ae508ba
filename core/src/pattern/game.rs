use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::constants::{
    ERROR_FLASH_DURATION, FLASH_DURATION, LEVEL_PAUSE, PRESS_FLASH_DURATION, SEQUENCE_DELAY,
};
use crate::pattern::session::{PatternSession, PressOutcome, SessionState};
use crate::timeline::Timeline;

/// Source of the next random node index. The production picker wraps
/// `StdRng`; tests inject a scripted picker to pin down the sequence.
pub trait NodePicker {
    /// Returns a node index in `[0, node_count)`. Repeats are allowed.
    fn pick(&mut self, node_count: usize) -> usize;
}

/// Uniform picker over all grid nodes, with replacement.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        RandomPicker {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomPicker {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NodePicker for RandomPicker {
    fn pick(&mut self, node_count: usize) -> usize {
        self.rng.gen_range(0..node_count)
    }
}

/// Visual styling of a node flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashStyle {
    /// Playback of the target sequence.
    Sequence,
    /// Confirmation of the player's own press.
    Press,
    /// The offending node after a mismatch.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
}

/// Status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Watch,
    YourTurn,
    Correct,
    GameOver,
}

impl Status {
    pub fn message(&self) -> &'static str {
        match self {
            Status::Idle => "Press Start to begin.",
            Status::Watch => "Watch carefully...",
            Status::YourTurn => "Your turn...",
            Status::Correct => "Correct!",
            Status::GameOver => "Incorrect! Press Start to try again.",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Status::Correct => StatusTone::Success,
            Status::GameOver => StatusTone::Error,
            _ => StatusTone::Neutral,
        }
    }
}

/// Deferred transitions driven through the timeline.
enum Step {
    Flash(usize),
    BeginInput,
    NextRound,
}

struct Flash {
    node: usize,
    style: FlashStyle,
    remaining: Duration,
}

/// Drives a `PatternSession` through the timeline scheduler and tracks the
/// short-lived node flashes. The renderer reads this object every frame and
/// draws what it sees; it never mutates game state beyond forwarding presses
/// and the frame delta.
pub struct PatternGame {
    session: PatternSession,
    timeline: Timeline<Step>,
    picker: Box<dyn NodePicker>,
    flashes: Vec<Flash>,
    status: Status,
}

impl PatternGame {
    pub fn new(dimension: u32) -> Self {
        Self::with_picker(dimension, Box::new(RandomPicker::new()))
    }

    pub fn with_picker(dimension: u32, picker: Box<dyn NodePicker>) -> Self {
        PatternGame {
            session: PatternSession::new(dimension),
            timeline: Timeline::new(),
            picker,
            flashes: Vec::new(),
            status: Status::Idle,
        }
    }

    pub fn session(&self) -> &PatternSession {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn level(&self) -> u32 {
        self.session.level()
    }

    pub fn dimension(&self) -> u32 {
        self.session.dimension()
    }

    pub fn node_count(&self) -> usize {
        self.session.node_count()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// True while the start/restart trigger should be operable.
    pub fn start_allowed(&self) -> bool {
        matches!(
            self.state(),
            SessionState::Idle | SessionState::GameOver | SessionState::LevelComplete
        )
    }

    /// True while node presses are being accepted.
    pub fn input_allowed(&self) -> bool {
        self.state() == SessionState::AwaitingInput
    }

    /// Current flash styling for a node, if any. The most recent flash wins
    /// when several overlap on the same node.
    pub fn flash(&self, node: usize) -> Option<FlashStyle> {
        self.flashes
            .iter()
            .rev()
            .find(|flash| flash.node == node)
            .map(|flash| flash.style)
    }

    /// Starts or restarts the game. Accepted from `Idle`, `GameOver`, and
    /// `LevelComplete`; a no-op during playback and input. Any pending
    /// schedule from the previous game dies here, so no stale flash can land
    /// after the reset.
    pub fn start(&mut self) -> bool {
        if !self.start_allowed() {
            return false;
        }

        self.timeline.cancel_pending();
        self.flashes.clear();
        self.session.reset_for_new_game();
        log::info!("Pattern game started, dimension {}", self.dimension());
        self.begin_round();
        true
    }

    /// Forwards a node press. Ignored outside the input phase and for
    /// out-of-range indices.
    pub fn node_pressed(&mut self, node: usize) {
        if !self.input_allowed() || node >= self.node_count() {
            return;
        }

        self.push_flash(node, FlashStyle::Press, PRESS_FLASH_DURATION);

        match self.session.record_press(node) {
            PressOutcome::Mismatch => {
                log::info!("Wrong node {} pressed, game over", node);
                self.status = Status::GameOver;
                self.push_flash(node, FlashStyle::Error, ERROR_FLASH_DURATION);
            }
            PressOutcome::SequenceComplete => {
                self.status = Status::Correct;
                self.timeline.schedule_in(LEVEL_PAUSE, Step::NextRound);
            }
            PressOutcome::Advanced | PressOutcome::Ignored => {}
        }
    }

    /// Advances the game by one frame: fires due timeline steps in order,
    /// then ages the active flashes.
    pub fn tick(&mut self, dt: Duration) {
        self.flashes.retain_mut(|flash| {
            flash.remaining = flash.remaining.saturating_sub(dt);
            flash.remaining > Duration::ZERO
        });

        for step in self.timeline.advance(dt) {
            match step {
                Step::Flash(node) => self.push_flash(node, FlashStyle::Sequence, FLASH_DURATION),
                Step::BeginInput => {
                    self.session.begin_input();
                    self.status = Status::YourTurn;
                }
                Step::NextRound => self.begin_round(),
            }
        }
    }

    /// Appends one random node and schedules the playback chain: flash `i`
    /// at `(i + 1) × SEQUENCE_DELAY`, input phase one more delay after the
    /// final flash.
    fn begin_round(&mut self) {
        let node = self.picker.pick(self.session.node_count());
        self.session.push_target(node);
        self.session.begin_playback();
        self.status = Status::Watch;

        let sequence = self.session.target_sequence().to_vec();
        for (i, &node) in sequence.iter().enumerate() {
            self.timeline
                .schedule_in(SEQUENCE_DELAY * (i as u32 + 1), Step::Flash(node));
        }
        self.timeline
            .schedule_in(SEQUENCE_DELAY * (sequence.len() as u32 + 1), Step::BeginInput);
    }

    fn push_flash(&mut self, node: usize, style: FlashStyle, duration: Duration) {
        self.flashes.push(Flash {
            node,
            style,
            remaining: duration,
        });
    }
}
