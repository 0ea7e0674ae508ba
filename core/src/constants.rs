//! Timing and grid constants for the pattern minigame.

use std::time::Duration;

/// Gap between successive node flashes during sequence playback.
pub const SEQUENCE_DELAY: Duration = Duration::from_millis(600);

/// How long a node stays lit while the sequence is playing back.
pub const FLASH_DURATION: Duration = Duration::from_millis(350);

/// Shorter confirmation flash for the player's own presses.
pub const PRESS_FLASH_DURATION: Duration = Duration::from_millis(150);

/// Flash on the offending node after a mismatch.
pub const ERROR_FLASH_DURATION: Duration = Duration::from_millis(400);

/// Pause between a completed level and the next playback.
pub const LEVEL_PAUSE: Duration = Duration::from_millis(1000);

/// Level counter value for a freshly started game.
pub const STARTING_LEVEL: u32 = 1;

/// Grid side length used when the configured value is absent or invalid.
pub const DEFAULT_DIMENSION: u32 = 3;
