//! Export command - Write one day's grid as a CSV file

use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::grid::csv;
use crate::grid::store::{Backend, LogStore};

/// Execute the export command
///
/// A write failure produces no file and leaves the store untouched.
pub fn execute<B: Backend>(
    store: &mut LogStore<B>,
    date: NaiveDate,
    output_dir: &Path,
) -> Result<()> {
    store.ensure_day(date)?;
    let log = store.day_log(date);

    let path = csv::export(&log, output_dir)
        .with_context(|| format!("No CSV produced for {}", log.date_iso()))?;

    println!("{} {}", "Exported:".green(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::date;
    use crate::grid::store::MemoryBackend;

    #[test]
    fn test_export_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LogStore::open(MemoryBackend::new());
        let day = date::parse_date("2024-03-01").unwrap();

        execute(&mut store, day, dir.path()).unwrap();

        let content =
            std::fs::read_to_string(dir.path().join("SymptomGrid_2024-03-01.csv")).unwrap();
        assert_eq!(content.split('\n').count(), 21);
        assert!(content.starts_with(csv::HEADER));
    }

    #[test]
    fn test_export_to_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let mut store = LogStore::open(MemoryBackend::new());
        let day = date::parse_date("2024-03-01").unwrap();

        assert!(execute(&mut store, day, &missing).is_err());
        assert!(!missing.exists());
        // The day itself was still materialized in the store
        assert_eq!(store.days().count(), 1);
    }
}
