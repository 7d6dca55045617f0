//! Per-user storage paths

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Name of the persisted log document
pub const LOG_FILE_NAME: &str = "SymptomLogs.json";

/// Get the symptom-grid data directory
/// - macOS: ~/Library/Application Support/SymptomGrid/
/// - Linux: ~/.local/share/SymptomGrid/
/// - Windows: %APPDATA%/SymptomGrid/
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    Ok(base.join("SymptomGrid"))
}

/// Full path of the persisted log document
pub fn log_file() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE_NAME))
}
