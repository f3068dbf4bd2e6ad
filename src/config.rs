use crate::error::WhichQueryError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the persisted debug flag.
pub const DEBUG_ENV: &str = "WHICH_QUERY_DEBUG";

/// Persisted user settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Highlight the elements inspected by a search.
    #[serde(default)]
    pub debug_enabled: bool,
}

impl Settings {
    /// `$XDG_CONFIG_HOME/which-query/settings.json`, falling back to `$HOME/.config`.
    pub fn default_path() -> Option<PathBuf> {
        let base = env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(base.join("which-query").join("settings.json"))
    }

    /// Load settings from `path`. A missing file is created with defaults.
    pub fn load(path: &Path) -> Result<Self, WhichQueryError> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, writing defaults");
            let settings = Settings::default();
            settings.save(path)?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).map_err(|e| WhichQueryError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, WhichQueryError> {
        serde_json::from_str(content)
            .map_err(|e| WhichQueryError::ConfigError(format!("Failed to parse settings: {e}")))
    }

    pub fn save(&self, path: &Path) -> Result<(), WhichQueryError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| WhichQueryError::WriteError {
                path: dir.display().to_string(),
                source: e,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| WhichQueryError::WriteError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Apply the `WHICH_QUERY_DEBUG` override from `value`, if set.
    pub fn with_env_override(mut self, value: Option<&str>) -> Result<Self, WhichQueryError> {
        if let Some(value) = value {
            self.debug_enabled = parse_bool(value)?;
        }
        Ok(self)
    }
}

/// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitively.
pub fn parse_bool(value: &str) -> Result<bool, WhichQueryError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(WhichQueryError::ConfigError(format!(
            "Invalid boolean '{}' (expected true or false)",
            other
        ))),
    }
}

/// Resolve the effective debug flag: CLI flag, then environment, then the settings file.
pub fn resolve_debug(cli_debug: bool, config_path: Option<&Path>) -> Result<bool, WhichQueryError> {
    if cli_debug {
        return Ok(true);
    }
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => match Settings::default_path() {
            Some(p) => p,
            None => return Ok(false),
        },
    };
    let settings = Settings::load(&path)?.with_env_override(env::var(DEBUG_ENV).ok().as_deref())?;
    Ok(settings.debug_enabled)
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/settings.json");
        let settings = Settings::load(&path).unwrap();
        assert!(!settings.debug_enabled);
        assert!(path.exists());
    }

    #[test]
    fn round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        Settings { debug_enabled: true }.save(&path).unwrap();
        assert!(Settings::load(&path).unwrap().debug_enabled);
    }

    #[test]
    fn missing_key_defaults_to_false() {
        assert!(!Settings::from_json_str("{}").unwrap().debug_enabled);
    }

    #[test]
    fn non_boolean_value_is_rejected() {
        let err = Settings::from_json_str(r#"{"debug_enabled": "yes"}"#).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn env_override() {
        let settings = Settings::default().with_env_override(Some("on")).unwrap();
        assert!(settings.debug_enabled);
        let settings = Settings { debug_enabled: true }.with_env_override(Some("0")).unwrap();
        assert!(!settings.debug_enabled);
        let settings = Settings { debug_enabled: true }.with_env_override(None).unwrap();
        assert!(settings.debug_enabled);
    }

    #[test]
    fn parse_bool_rejects_garbage() {
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool(" TRUE ").unwrap());
    }

    #[test]
    fn cli_flag_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        assert!(resolve_debug(true, Some(&path)).unwrap());
    }
}
