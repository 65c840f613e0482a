use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Which detection model the backend should run for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionModel {
    Generic,
    Currency,
}

impl Default for DetectionModel {
    fn default() -> Self {
        Self::Generic
    }
}

impl DetectionModel {
    /// Value sent in the `model` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Currency => "currency",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Generic => "Generic Object Detection",
            Self::Currency => "Indian Currency Detection",
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the vision backend, e.g. "ws://localhost:8000".
    pub server_url: String,
    #[serde(default)]
    pub model: DetectionModel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "ws://localhost:8000".into(),
            model: DetectionModel::default(),
        }
    }
}

impl Config {
    /// Directory: ~/.config/guidance-cam/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("guidance-cam");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from disk, returning defaults if file doesn't exist or is invalid.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = Self::dir();
        fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }

    /// Full feed endpoint including the model selection.
    pub fn feed_url(&self) -> String {
        format!(
            "{}/ws/cam?model={}",
            self.server_url.trim_end_matches('/'),
            self.model.query_value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_url_includes_model_parameter() {
        let config = Config::default();
        assert_eq!(config.feed_url(), "ws://localhost:8000/ws/cam?model=generic");

        let config = Config {
            server_url: "ws://cam.local:9001/".into(),
            model: DetectionModel::Currency,
        };
        assert_eq!(config.feed_url(), "ws://cam.local:9001/ws/cam?model=currency");
    }

    #[test]
    fn model_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DetectionModel::Currency).unwrap(),
            "\"currency\""
        );
        let model: DetectionModel = serde_json::from_str("\"generic\"").unwrap();
        assert_eq!(model, DetectionModel::Generic);
    }
}
