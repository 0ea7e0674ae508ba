//! The pattern-recognition minigame: a pure session state machine driven by
//! the timeline scheduler, with read accessors for a stateless renderer.

mod game;
mod session;

pub use game::{FlashStyle, NodePicker, PatternGame, RandomPicker, Status, StatusTone};
pub use session::{PatternSession, PressOutcome, SessionState};
