use crate::{music::MusicPlayer, settings::ClientSettings};

/// Central application state threaded through every scene.
///
/// Owns the loaded settings and the background music handle. Per-scene state
/// (the running pattern game, the modal registry) lives in the scenes
/// themselves.
pub struct AppState {
    pub settings: ClientSettings,
    pub music: MusicPlayer,
}

impl AppState {
    pub fn new(settings: ClientSettings, music: MusicPlayer) -> Self {
        Self { settings, music }
    }
}
