use std::path::PathBuf;

use sdl2::mixer::Music;

/// Mixer volume for the background track (40% of MIX_MAX_VOLUME).
const MUSIC_VOLUME: i32 = 51;

/// Looping background-music playback with a runtime enable toggle.
///
/// When the track asset is missing the player stays silent and reports
/// unavailable; the rest of the client runs normally.
pub struct MusicPlayer {
    track: Option<Music<'static>>,
    enabled: bool,
    started: bool,
}

impl MusicPlayer {
    /// Loads the track at `path` and starts looping playback if `enabled`.
    pub fn new(path: PathBuf, enabled: bool) -> Self {
        let track = match Music::from_file(&path) {
            Ok(music) => Some(music),
            Err(e) => {
                log::warn!("Background music unavailable ({}): {}", path.display(), e);
                None
            }
        };

        Music::set_volume(MUSIC_VOLUME);

        let mut player = MusicPlayer {
            track,
            enabled: false,
            started: false,
        };
        if enabled {
            player.set_enabled(true);
        }
        player
    }

    /// True when a track was loaded and can be toggled.
    pub fn is_available(&self) -> bool {
        self.track.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Starts, resumes, or pauses the looping track.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;

        let Some(track) = &self.track else {
            return;
        };

        if enabled {
            if self.started {
                Music::resume();
            } else {
                match track.play(-1) {
                    Ok(()) => self.started = true,
                    Err(e) => log::warn!("Failed to start background music: {}", e),
                }
            }
        } else if self.started {
            Music::pause();
        }
    }
}
