use std::path::PathBuf;

/// Returns the base asset directory for the client.
///
/// When `CARGO_MANIFEST_DIR` is set (i.e. during a `cargo run`), the path is
/// resolved relative to the workspace. Otherwise it falls back to a path
/// relative to the current working directory.
fn get_asset_directory() -> PathBuf {
    if std::env::var("CARGO_MANIFEST_DIR").is_ok() {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
    } else {
        PathBuf::from(".").join("assets")
    }
}

/// Returns the path to the looping background track. The file is optional;
/// music is simply unavailable when it is missing.
pub fn get_music_file() -> PathBuf {
    let music_file = get_asset_directory().join("music").join("worldmap.ogg");
    log::info!("Using music file at: {}", music_file.display());
    music_file
}
