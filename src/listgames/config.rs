use crate::codec::EXPORT_FILENAME;
use crate::error::{ListGamesError, Result};
use crate::query::{SortDirection, SortKey, SortSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for listgames, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListGamesConfig {
    /// Default sort key for `list`
    #[serde(default)]
    pub sort_key: SortKey,

    /// Default sort direction for `list`
    #[serde(default)]
    pub sort_direction: SortDirection,

    /// File name used by `export` when no output path is given
    #[serde(default = "default_export_filename")]
    pub export_filename: String,
}

fn default_export_filename() -> String {
    EXPORT_FILENAME.to_string()
}

impl Default for ListGamesConfig {
    fn default() -> Self {
        Self {
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            export_filename: default_export_filename(),
        }
    }
}

impl ListGamesConfig {
    pub const KEYS: [&'static str; 3] = ["sort-key", "sort-direction", "export-filename"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ListGamesError::Io)?;
        let config: ListGamesConfig =
            serde_json::from_str(&content).map_err(ListGamesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ListGamesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ListGamesError::Serialization)?;
        fs::write(config_path, content).map_err(ListGamesError::Io)?;
        Ok(())
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.sort_key, self.sort_direction)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "sort-key" => Ok(self.sort_key.to_string()),
            "sort-direction" => Ok(self.sort_direction.to_string()),
            "export-filename" => Ok(self.export_filename.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "sort-key" => self.sort_key = value.parse().map_err(ListGamesError::Config)?,
            "sort-direction" => {
                self.sort_direction = value.parse().map_err(ListGamesError::Config)?
            }
            "export-filename" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ListGamesError::Config(
                        "export-filename cannot be empty".to_string(),
                    ));
                }
                self.export_filename = value.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ListGamesError {
    ListGamesError::Config(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        ListGamesConfig::KEYS.join(", ")
    ))
}
