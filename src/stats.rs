use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::config::DetectionModel;

/// Keep the announcement history bounded.
const HISTORY_LIMIT: usize = 50;

/// A single spoken announcement with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementRecord {
    pub label: String,
    pub model: DetectionModel,
    pub timestamp: String,
}

/// Persistent usage statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    pub total_detections: usize,
    pub total_announcements: usize,
    #[serde(default)]
    pub history: Vec<AnnouncementRecord>,
}

impl Stats {
    /// Directory: ~/.local/share/guidance-cam/
    fn dir() -> PathBuf {
        let mut p = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("guidance-cam");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("stats.json")
    }

    /// Load from disk, returning defaults if missing.
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

    /// Count an incoming detection, spoken or not.
    pub fn record_detection(&mut self) {
        self.total_detections += 1;
    }

    /// Record a detection that was actually spoken.
    pub fn record_announcement(&mut self, label: &str, model: DetectionModel) {
        self.total_announcements += 1;
        self.history.push(AnnouncementRecord {
            label: label.to_string(),
            model,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        if self.history.len() > HISTORY_LIMIT {
            let overflow = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_updates_counters_and_history() {
        let mut stats = Stats::default();
        stats.record_detection();
        stats.record_detection();
        stats.record_announcement("ten rupee note on left", DetectionModel::Currency);

        assert_eq!(stats.total_detections, 2);
        assert_eq!(stats.total_announcements, 1);
        assert_eq!(stats.history.len(), 1);
        assert_eq!(stats.history[0].label, "ten rupee note on left");
    }

    #[test]
    fn history_is_capped() {
        let mut stats = Stats::default();
        for i in 0..(HISTORY_LIMIT + 10) {
            stats.record_announcement(&format!("object {i}"), DetectionModel::Generic);
        }
        assert_eq!(stats.history.len(), HISTORY_LIMIT);
        // Oldest entries were dropped first.
        assert_eq!(stats.history[0].label, "object 10");
        assert_eq!(stats.total_announcements, HISTORY_LIMIT + 10);
    }
}
