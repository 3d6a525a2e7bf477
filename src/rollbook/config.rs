use crate::auth::Credentials;
use crate::error::{Result, RollbookError};
use crate::export::DEFAULT_EXPORT_FILE;
use crate::grading::GradingScheme;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `rollbook config`, in display order.
pub const CONFIG_KEYS: [&str; 5] = ["data-file", "export-file", "grading", "username", "password"];

/// Configuration for rollbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollbookConfig {
    /// Primary store file (relative paths resolve against the working directory)
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Where the CSV export is written
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,

    /// Band table used to assign grades
    #[serde(default)]
    pub grading: GradingScheme,

    /// Login pair, stored as top-level `username` / `password` keys
    #[serde(flatten)]
    pub credentials: Credentials,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_export_file() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_FILE)
}

impl Default for RollbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_file: default_export_file(),
            grading: GradingScheme::default(),
            credentials: Credentials::default(),
        }
    }
}

impl RollbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RollbookError::Io)?;
        let config: RollbookConfig =
            serde_json::from_str(&content).map_err(RollbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RollbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RollbookError::Serialization)?;
        fs::write(config_path, content).map_err(RollbookError::Io)?;
        Ok(())
    }

    /// Like [`get`](Self::get), but an unknown key is a `Config` error.
    pub fn value_of(&self, key: &str) -> Result<String> {
        self.get(key).ok_or_else(|| unknown_key(key))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "export-file" => Some(self.export_file.display().to_string()),
            "grading" => Some(self.grading.to_string()),
            "username" => Some(self.credentials.username.clone()),
            // Never echo the stored password.
            "password" => Some("********".to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => self.data_file = PathBuf::from(value),
            "export-file" => self.export_file = PathBuf::from(value),
            "grading" => self.grading = value.parse().map_err(RollbookError::Config)?,
            "username" => self.credentials.username = non_empty(key, value)?,
            "password" => self.credentials.password = non_empty(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> RollbookError {
    RollbookError::Config(format!(
        "unknown config key '{}' (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(RollbookError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RollbookConfig::default();
        assert_eq!(config.data_file, PathBuf::from("students.txt"));
        assert_eq!(config.export_file, PathBuf::from("students.csv"));
        assert_eq!(config.grading, GradingScheme::Standard);
        assert_eq!(config.credentials.username, "admin");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = RollbookConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, RollbookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = RollbookConfig::default();
        config.set("grading", "strict").unwrap();
        config.set("data-file", "/srv/roll/students.txt").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = RollbookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.grading, GradingScheme::Strict);
        assert_eq!(loaded.data_file, PathBuf::from("/srv/roll/students.txt"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "grading": "strict", "username": "registrar" }"#,
        )
        .unwrap();

        let loaded = RollbookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.grading, GradingScheme::Strict);
        assert_eq!(loaded.credentials.username, "registrar");
        assert_eq!(loaded.credentials.password, "1234");
        assert_eq!(loaded.export_file, PathBuf::from("students.csv"));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            RollbookConfig::load(temp_dir.path()),
            Err(RollbookError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_values() {
        let mut config = RollbookConfig::default();
        assert!(matches!(
            config.set("colour", "blue"),
            Err(RollbookError::Config(_))
        ));
        assert!(config.set("grading", "curve").is_err());
        assert!(config.set("username", "").is_err());
        assert_eq!(config, RollbookConfig::default());
    }

    #[test]
    fn test_get_masks_password() {
        let config = RollbookConfig::default();
        assert_eq!(config.get("password").as_deref(), Some("********"));
        assert_eq!(config.get("grading").as_deref(), Some("standard"));
        assert!(config.get("nope").is_none());
        assert!(matches!(config.value_of("nope"), Err(RollbookError::Config(_))));
        assert_eq!(config.value_of("username").unwrap(), "admin");
    }
}
