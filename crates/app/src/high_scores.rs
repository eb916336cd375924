//! Flat high-score persistence: a JSON list of name/value records, unordered
//! on disk, sorted descending at load time with a synthetic top entry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;

/// Sentinel shown above every real score on the leaderboard.
pub const TOP_SENTINEL_NAME: &str = "God";
pub const TOP_SENTINEL_VALUE: &str = "∞";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub name: String,
    pub value: i64,
}

pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.data_dir().to_path_buf();
        path.push("high_scores.json");
        path
    })
}

/// Loads the raw record list; a missing file is an empty list.
pub fn load(path: &Path) -> io::Result<Vec<ScoreRecord>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => return Err(error),
    };
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Appends one record, rewriting the file atomically.
pub fn append(path: &Path, record: ScoreRecord) -> io::Result<()> {
    let mut records = load(path)?;
    records.push(record);
    write_atomic(path, &records)
}

fn write_atomic(path: &Path, records: &[ScoreRecord]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(records).map_err(io::Error::other)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Display rows: the sentinel first, then records sorted descending by value.
pub fn leaderboard(records: &[ScoreRecord]) -> Vec<(String, String)> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.value.cmp(&a.value));

    let mut rows = Vec::with_capacity(sorted.len() + 1);
    rows.push((TOP_SENTINEL_NAME.to_string(), TOP_SENTINEL_VALUE.to_string()));
    rows.extend(sorted.into_iter().map(|record| (record.name, format!("{:06}", record.value))));
    rows
}
