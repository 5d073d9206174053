//! High-score persistence.
//!
//! The only persisted value is the best score, stored as a JSON object under
//! the `highScore` key. Storage is best-effort: a missing or unreadable file
//! reads as 0 and a failed write is logged, never fatal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use depthstrike_core::constants::HIGH_SCORE_KEY;
use depthstrike_core::events::UiEvent;

#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Somewhere the high score survives between runs.
pub trait HighScoreStore {
    /// Read the stored high score. An empty store reads as 0.
    fn load(&self) -> Result<u32, PersistenceError>;

    /// Overwrite the stored high score.
    fn save(&mut self, high_score: u32) -> Result<(), PersistenceError>;
}

/// High score kept in a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let doc: Value =
            serde_json::from_str(&json).map_err(|e| PersistenceError::Parse(e.to_string()))?;
        parse_high_score(&doc)
    }

    fn save(&mut self, high_score: u32) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut doc = Map::new();
        doc.insert(HIGH_SCORE_KEY.to_string(), Value::from(high_score));
        let json = serde_json::to_string_pretty(&Value::Object(doc))
            .map_err(|e| PersistenceError::Serialize(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Pull the score out of a stored document. Accepts a number or a numeric
/// string; a missing key is an empty store.
fn parse_high_score(doc: &Value) -> Result<u32, PersistenceError> {
    let Some(value) = doc.get(HIGH_SCORE_KEY) else {
        return Ok(0);
    };
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| PersistenceError::Parse(format!("bad {HIGH_SCORE_KEY} value: {value}")))
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub high_score: u32,
    /// Number of successful saves.
    pub saves: u32,
}

impl MemoryStore {
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, PersistenceError> {
        Ok(self.high_score)
    }

    fn save(&mut self, high_score: u32) -> Result<(), PersistenceError> {
        self.high_score = high_score;
        self.saves += 1;
        Ok(())
    }
}

/// Load the high score, falling back to 0 on any failure.
pub fn load_or_default(store: &impl HighScoreStore) -> u32 {
    match store.load() {
        Ok(high_score) => high_score,
        Err(e) => {
            log::warn!("could not read high score, starting from 0: {e}");
            0
        }
    }
}

/// Save the high score, logging any failure.
pub fn save_best_effort(store: &mut impl HighScoreStore, high_score: u32) {
    match store.save(high_score) {
        Ok(()) => log::info!("high score saved: {high_score}"),
        Err(e) => log::warn!("could not save high score {high_score}: {e}"),
    }
}

/// Persist the high score if `events` report a new record. Returns whether
/// a save was attempted.
pub fn persist_new_record(events: &[UiEvent], store: &mut impl HighScoreStore) -> bool {
    let record = events.iter().find_map(|event| match event {
        UiEvent::GameOver {
            high_score,
            new_record: true,
            ..
        } => Some(*high_score),
        _ => None,
    });
    match record {
        Some(high_score) => {
            save_best_effort(store, high_score);
            true
        }
        None => false,
    }
}
