use crate::constants::STARTING_LEVEL;

/// Phase of the pattern minigame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing running; waiting for the player to press start.
    Idle,
    /// The target sequence is being flashed; input is ignored.
    PlayingSequence,
    /// The player is reproducing the sequence.
    AwaitingInput,
    /// The level was reproduced correctly; the next round is pending.
    LevelComplete,
    /// The player pressed a wrong node. Recoverable via restart.
    GameOver,
}

/// Result of recording a player press against the target sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The press arrived outside the input phase and changed nothing.
    Ignored,
    /// The press did not match the target at this position.
    Mismatch,
    /// The press matched; more of the sequence remains.
    Advanced,
    /// The press matched and completed the level.
    SequenceComplete,
}

/// Pure state of one play session: grid dimension, level counter, target
/// sequence, input buffer, and phase. Holds no timers and performs no I/O;
/// all temporal behavior lives in the driver.
#[derive(Debug)]
pub struct PatternSession {
    dimension: u32,
    level: u32,
    target_sequence: Vec<usize>,
    user_input: Vec<usize>,
    state: SessionState,
}

impl PatternSession {
    /// Creates an idle session over a `dimension` × `dimension` grid.
    pub fn new(dimension: u32) -> Self {
        assert!(dimension >= 1, "dimension must be >= 1");
        PatternSession {
            dimension,
            level: 0,
            target_sequence: Vec::new(),
            user_input: Vec::new(),
            state: SessionState::Idle,
        }
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Total number of grid nodes (`dimension` squared). Node indices run
    /// from 0 to `node_count() - 1`.
    pub fn node_count(&self) -> usize {
        (self.dimension * self.dimension) as usize
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn target_sequence(&self) -> &[usize] {
        &self.target_sequence
    }

    pub fn user_input(&self) -> &[usize] {
        &self.user_input
    }

    /// Resets level and both sequences for a fresh game. The caller is
    /// responsible for cancelling any pending schedule first.
    pub fn reset_for_new_game(&mut self) {
        self.level = STARTING_LEVEL;
        self.target_sequence.clear();
        self.user_input.clear();
    }

    /// Appends one node index to the target sequence.
    pub fn push_target(&mut self, index: usize) {
        debug_assert!(index < self.node_count());
        self.target_sequence.push(index);
    }

    /// Enters the playback phase, clearing the input buffer for the level.
    pub fn begin_playback(&mut self) {
        self.user_input.clear();
        self.state = SessionState::PlayingSequence;
    }

    /// Enters the input phase.
    pub fn begin_input(&mut self) {
        self.user_input.clear();
        self.state = SessionState::AwaitingInput;
    }

    /// Records a player press. Outside `AwaitingInput` the press is ignored
    /// and no field changes. A mismatch transitions to `GameOver` and resets
    /// the level to 0; completing the sequence transitions to `LevelComplete`
    /// and increments the level.
    pub fn record_press(&mut self, index: usize) -> PressOutcome {
        if self.state != SessionState::AwaitingInput {
            return PressOutcome::Ignored;
        }

        self.user_input.push(index);
        let position = self.user_input.len() - 1;

        if self.target_sequence[position] != index {
            self.state = SessionState::GameOver;
            self.level = 0;
            return PressOutcome::Mismatch;
        }

        if self.user_input.len() == self.target_sequence.len() {
            self.state = SessionState::LevelComplete;
            self.level += 1;
            return PressOutcome::SequenceComplete;
        }

        PressOutcome::Advanced
    }
}

#[cfg(test)]
mod tests {
    use super::{PatternSession, PressOutcome, SessionState};

    fn session_awaiting(dimension: u32, target: &[usize]) -> PatternSession {
        let mut session = PatternSession::new(dimension);
        session.reset_for_new_game();
        for &index in target {
            session.push_target(index);
        }
        session.begin_playback();
        session.begin_input();
        session
    }

    #[test]
    #[should_panic(expected = "dimension must be >= 1")]
    fn new_panics_on_zero_dimension() {
        let _ = PatternSession::new(0);
    }

    #[test]
    fn node_count_is_dimension_squared() {
        for dimension in 1..=6 {
            let session = PatternSession::new(dimension);
            assert_eq!(session.node_count(), (dimension * dimension) as usize);
        }
    }

    #[test]
    fn fresh_session_is_idle_at_level_zero() {
        let session = PatternSession::new(3);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.level(), 0);
        assert!(session.target_sequence().is_empty());
    }

    #[test]
    fn presses_outside_input_phase_change_nothing() {
        let mut session = PatternSession::new(3);
        session.reset_for_new_game();
        session.push_target(4);

        for state in [
            SessionState::Idle,
            SessionState::PlayingSequence,
            SessionState::LevelComplete,
            SessionState::GameOver,
        ] {
            session.state = state;
            assert_eq!(session.record_press(4), PressOutcome::Ignored);
            assert!(session.user_input().is_empty());
            assert_eq!(session.target_sequence(), &[4]);
        }
    }

    #[test]
    fn correct_press_completes_single_node_level() {
        let mut session = session_awaiting(3, &[4]);
        assert_eq!(session.record_press(4), PressOutcome::SequenceComplete);
        assert_eq!(session.state(), SessionState::LevelComplete);
        assert_eq!(session.level(), 2);
    }

    #[test]
    fn wrong_press_is_game_over_and_resets_level() {
        let mut session = session_awaiting(3, &[4]);
        assert_eq!(session.record_press(7), PressOutcome::Mismatch);
        assert_eq!(session.state(), SessionState::GameOver);
        assert_eq!(session.level(), 0);
    }

    #[test]
    fn mismatch_after_correct_prefix_still_fails() {
        let mut session = session_awaiting(3, &[1, 2, 3]);
        assert_eq!(session.record_press(1), PressOutcome::Advanced);
        assert_eq!(session.record_press(2), PressOutcome::Advanced);
        assert_eq!(session.record_press(0), PressOutcome::Mismatch);
        assert_eq!(session.state(), SessionState::GameOver);
    }

    #[test]
    fn input_never_outruns_target() {
        let mut session = session_awaiting(3, &[1, 2]);
        session.record_press(1);
        session.record_press(2);
        // Level complete: the next press must be ignored, not appended.
        assert_eq!(session.record_press(0), PressOutcome::Ignored);
        assert!(session.user_input().len() <= session.target_sequence().len());
    }

    #[test]
    fn playback_and_input_phases_clear_the_buffer() {
        let mut session = session_awaiting(3, &[1, 2]);
        session.record_press(1);
        session.begin_playback();
        assert!(session.user_input().is_empty());
        session.begin_input();
        assert!(session.user_input().is_empty());
    }

    #[test]
    fn target_length_matches_level_during_play() {
        let mut session = PatternSession::new(3);
        session.reset_for_new_game();
        session.push_target(0);
        session.begin_playback();
        assert_eq!(session.target_sequence().len(), session.level() as usize);
    }
}
