use std::path::PathBuf;

use crate::config::Config;

pub const MAX_RECENT_SEARCHES: usize = 10;
const HISTORY_FILE_NAME: &str = "recent-searches.json";

pub fn load_recent(cfg: &Config) -> Vec<String> {
    let Ok(raw) = std::fs::read_to_string(history_path(cfg)) else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<String>>(&raw).unwrap_or_default()
}

// Most recent first; a resubmitted query moves to the front instead of
// duplicating.
pub fn record_query(cfg: &Config, query: &str) -> Result<(), String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    let mut recent = load_recent(cfg);
    recent.retain(|past| past != trimmed);
    recent.insert(0, trimmed.to_string());
    recent.truncate(MAX_RECENT_SEARCHES);
    save_recent(cfg, &recent)
}

pub fn clear(cfg: &Config) -> Result<(), String> {
    let path = history_path(cfg);
    if !path.exists() {
        return Ok(());
    }
    std::fs::remove_file(path).map_err(|e| format!("failed to clear search history: {e}"))
}

fn save_recent(cfg: &Config, recent: &[String]) -> Result<(), String> {
    let path = history_path(cfg);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create search history dir: {e}"))?;
    }
    let encoded = serde_json::to_string(recent)
        .map_err(|e| format!("failed to encode search history: {e}"))?;
    std::fs::write(path, encoded).map_err(|e| format!("failed to write search history: {e}"))
}

fn history_path(cfg: &Config) -> PathBuf {
    cfg.config_path
        .parent()
        .unwrap_or_else(|| std::path::Path::new("."))
        .join(HISTORY_FILE_NAME)
}
