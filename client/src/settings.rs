use std::{fs, path::PathBuf};

use serde::Deserialize;

use fh_core::config::dimension_from_attr;

const SETTINGS_FILE_NAME: &str = "farhaven_settings.json";

/// On-disk form of the settings file. Every field is optional so a partial
/// or hand-edited file still loads.
#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsStorage {
    #[serde(default)]
    pattern_dimension: Option<String>,
    #[serde(default)]
    music_enabled: Option<bool>,
}

/// Resolved client settings. The file is read once at startup and never
/// written back.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Raw grid-dimension attribute as found in the file. Resolution to an
    /// effective dimension happens in [`ClientSettings::pattern_dimension`].
    pub pattern_dimension_attr: Option<String>,
    pub music_enabled: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            pattern_dimension_attr: None,
            music_enabled: true,
        }
    }
}

impl ClientSettings {
    /// Effective pattern grid side length (3 when unset or invalid).
    pub fn pattern_dimension(&self) -> u32 {
        dimension_from_attr(self.pattern_dimension_attr.as_deref())
    }

    fn from_storage(storage: SettingsStorage) -> Self {
        Self {
            pattern_dimension_attr: storage.pattern_dimension,
            music_enabled: storage.music_enabled.unwrap_or(true),
        }
    }

    fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<SettingsStorage>(raw) {
            Ok(storage) => Self::from_storage(storage),
            Err(err) => {
                log::warn!("Failed to parse client settings: {}", err);
                Self::default()
            }
        }
    }
}

fn working_directory() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn settings_file_path() -> PathBuf {
    working_directory().join(SETTINGS_FILE_NAME)
}

/// Loads settings from the working directory; a missing or unreadable file
/// yields the defaults.
pub fn load_settings() -> ClientSettings {
    let path = settings_file_path();
    let Ok(raw) = fs::read_to_string(&path) else {
        log::info!("No settings file at {}, using defaults", path.display());
        return ClientSettings::default();
    };

    ClientSettings::from_json(&raw)
}

#[cfg(test)]
mod tests {
    use super::ClientSettings;

    #[test]
    fn full_file_parses() {
        let settings =
            ClientSettings::from_json(r#"{ "pattern_dimension": "4", "music_enabled": false }"#);
        assert_eq!(settings.pattern_dimension(), 4);
        assert!(!settings.music_enabled);
    }

    #[test]
    fn empty_object_yields_defaults() {
        let settings = ClientSettings::from_json("{}");
        assert_eq!(settings.pattern_dimension(), 3);
        assert!(settings.music_enabled);
    }

    #[test]
    fn malformed_json_yields_defaults() {
        let settings = ClientSettings::from_json("not json at all");
        assert_eq!(settings.pattern_dimension(), 3);
        assert!(settings.music_enabled);
    }

    #[test]
    fn non_numeric_dimension_falls_back_to_three() {
        let settings = ClientSettings::from_json(r#"{ "pattern_dimension": "huge" }"#);
        assert_eq!(settings.pattern_dimension(), 3);
    }
}
