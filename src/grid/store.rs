//! Log store: the single authority for reading, mutating and persisting
//! day logs.
//!
//! The whole date -> day log map is serialized as one JSON document and
//! rewritten on every mutation. Loading tolerates a missing, unreadable or
//! corrupt document: first run and corruption both mean "no history yet".

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::date;
use super::model::{BodyArea, DayLog, SymptomCell, TimeSlot};

/// Storage for the persisted document
///
/// The store itself is backend-agnostic: the desktop build keeps one JSON
/// file, while `MemoryBackend` mirrors the key-value storage the browser
/// build persists into (and doubles as the test backend).
pub trait Backend {
    /// Read the whole persisted document, or `None` if nothing was stored yet
    fn load(&self) -> Result<Option<String>>;

    /// Replace the whole persisted document
    fn store(&mut self, document: &str) -> Result<()>;
}

/// File-backed storage with atomic replacement
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Backend for FileBackend {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read: {}", self.path.display()))?;
        Ok(Some(content))
    }

    fn store(&mut self, document: &str) -> Result<()> {
        let dir = self
            .path
            .parent()
            .with_context(|| format!("No parent directory for: {}", self.path.display()))?;
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        // Write to a temp file in the same directory, then rename it over the
        // target, so a reader never observes a half-written document.
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in: {}", dir.display()))?;
        tmp.write_all(document.as_bytes())
            .with_context(|| format!("Failed to write: {}", self.path.display()))?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to write: {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory key-value storage, the analogue of the browser build's
/// localStorage persistence
#[allow(dead_code)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
    key: String,
}

#[allow(dead_code)]
impl MemoryBackend {
    /// Storage key the browser build uses for the whole document
    pub const DEFAULT_KEY: &'static str = "symptom_logs";

    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            key: Self::DEFAULT_KEY.to_string(),
        }
    }

    /// The stored document, if any (for restart simulation in tests)
    pub fn document(&self) -> Option<&str> {
        self.slots.get(&self.key).map(String::as_str)
    }

    /// Pre-seed the stored document
    pub fn with_document(document: impl Into<String>) -> Self {
        let mut backend = Self::new();
        backend.slots.insert(backend.key.clone(), document.into());
        backend
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MemoryBackend {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slots.get(&self.key).cloned())
    }

    fn store(&mut self, document: &str) -> Result<()> {
        self.slots.insert(self.key.clone(), document.to_string());
        Ok(())
    }
}

/// Owns the in-memory date -> day log map and its persistence
///
/// There is exactly one logical writer (the local UI), so every operation is
/// a plain read-modify-write-persist sequence with no locking. Days are never
/// deleted from the map.
pub struct LogStore<B: Backend> {
    backend: B,
    days: BTreeMap<String, DayLog>,
}

impl<B: Backend> LogStore<B> {
    /// Open a store over the given backend
    ///
    /// A missing, unreadable or unparseable document yields an empty store;
    /// no error propagates to the caller.
    pub fn open(backend: B) -> Self {
        let days = backend
            .load()
            .ok()
            .flatten()
            .and_then(|document| serde_json::from_str(&document).ok())
            .unwrap_or_default();
        Self { backend, days }
    }

    /// The log for a date: the stored one, or a fully populated default
    ///
    /// Does not insert the synthesized log; date selection does that via
    /// [`ensure_day`](Self::ensure_day).
    pub fn day_log(&self, date: NaiveDate) -> DayLog {
        let key = date::date_key(date);
        self.days
            .get(&key)
            .cloned()
            .unwrap_or_else(|| DayLog::new(key))
    }

    /// Materialize and persist a default day log if the date has none
    ///
    /// This is the side effect of selecting a date in the grid UI: the grid
    /// never renders over an absent day.
    pub fn ensure_day(&mut self, date: NaiveDate) -> Result<()> {
        let key = date::date_key(date);
        if self.days.contains_key(&key) {
            return Ok(());
        }
        self.days.insert(key.clone(), DayLog::new(key));
        self.save()
    }

    /// Read one cell, materializing the day if it was absent
    pub fn cell(&mut self, area: BodyArea, slot: TimeSlot, date: NaiveDate) -> Result<SymptomCell> {
        self.ensure_day(date)?;
        let key = date::date_key(date);
        Ok(self
            .days
            .get(&key)
            .map(|log| log.cell(area, slot).clone())
            .unwrap_or_default())
    }

    /// Overwrite one cell (creating the day log if absent) and persist
    pub fn set_cell(
        &mut self,
        cell: SymptomCell,
        area: BodyArea,
        slot: TimeSlot,
        date: NaiveDate,
    ) -> Result<()> {
        let key = date::date_key(date);
        let log = self
            .days
            .entry(key.clone())
            .or_insert_with(|| DayLog::new(key));
        log.set_cell(area, slot, cell);
        self.save()
    }

    /// Replace the date's log with a fresh all-default one and persist
    pub fn reset_day(&mut self, date: NaiveDate) -> Result<()> {
        let key = date::date_key(date);
        self.days.insert(key.clone(), DayLog::new(key));
        self.save()
    }

    /// All recorded day logs, ordered by date key
    pub fn days(&self) -> impl Iterator<Item = &DayLog> {
        self.days.values()
    }

    /// Serialize the whole map and hand it to the backend
    ///
    /// In-memory state is already updated when this runs; a write failure is
    /// reported to the caller and nothing is rolled back.
    fn save(&mut self) -> Result<()> {
        let document = serde_json::to_string_pretty(&self.days)?;
        self.backend
            .store(&document)
            .context("Failed to persist symptom logs")
    }
}
