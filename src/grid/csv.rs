//! CSV export of a single day log
//!
//! One header line, then one row per (area, slot) pair in fixed enumeration
//! order: 20 data rows regardless of which cells were ever edited.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::model::DayLog;

pub const HEADER: &str = "Area,Time,Pain,Numbness,Stiffness,Notes,Date";

/// File name of the export artifact for a date key
pub fn file_name(date_iso: &str) -> String {
    format!("SymptomGrid_{}.csv", date_iso)
}

/// Render a day log as a CSV document
pub fn render(log: &DayLog) -> String {
    let mut lines = vec![HEADER.to_string()];

    for (area, slot, cell) in log.iter() {
        let cols = [
            area.label().to_string(),
            slot.label().to_string(),
            cell.pain.to_string(),
            if cell.numbness { "Yes" } else { "No" }.to_string(),
            cell.stiffness.label().to_string(),
            escape(&cell.notes),
            log.date_iso().to_string(),
        ];
        lines.push(cols.join(","));
    }

    lines.join("\n")
}

/// Write the export artifact for a day log into `dir`
///
/// The document goes to a temp file first and is renamed into place, so a
/// failed export leaves no partial file behind.
pub fn export(log: &DayLog, dir: &Path) -> Result<PathBuf> {
    let target = dir.join(file_name(log.date_iso()));

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in: {}", dir.display()))?;
    tmp.write_all(render(log).as_bytes())
        .with_context(|| format!("Failed to write: {}", target.display()))?;
    tmp.persist(&target)
        .with_context(|| format!("Failed to write: {}", target.display()))?;

    Ok(target)
}

/// RFC 4180 field escaping: wrap in double quotes with embedded quotes
/// doubled, only when the field contains a quote, comma or newline
fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::model::{BodyArea, Stiffness, SymptomCell, TimeSlot};

    #[test]
    fn test_escape_plain_field_untouched() {
        assert_eq!(escape("mild ache after typing"), "mild ache after typing");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_comma() {
        assert_eq!(escape("worse at night, better by noon"), "\"worse at night, better by noon\"");
    }

    #[test]
    fn test_escape_doubles_quotes() {
        assert_eq!(escape("He said \"ouch\""), "\"He said \"\"ouch\"\"\"");
    }

    #[test]
    fn test_escape_newline() {
        assert_eq!(escape("line one\nline two"), "\"line one\nline two\"");
    }

    #[test]
    fn test_render_line_count_and_order() {
        let log = DayLog::new("2024-03-01");
        let csv = render(&log);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "Hands,Morning,0,No,None,,2024-03-01");
        assert_eq!(lines[2], "Hands,Midday,0,No,None,,2024-03-01");
        assert_eq!(lines[20], "Ankles,Night,0,No,None,,2024-03-01");
    }

    #[test]
    fn test_render_worked_example() {
        let mut log = DayLog::new("2024-03-01");
        log.set_cell(
            BodyArea::Hands,
            TimeSlot::Morning,
            SymptomCell {
                pain: 7,
                numbness: true,
                stiffness: Stiffness::Mild,
                notes: "He said \"ouch\"".to_string(),
            },
        );

        let csv = render(&log);
        let row = csv.split('\n').nth(1).unwrap();
        assert_eq!(row, "Hands,Morning,7,Yes,Mild,\"He said \"\"ouch\"\"\",2024-03-01");
    }

    #[test]
    fn test_export_writes_named_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let log = DayLog::new("2024-03-01");

        let path = export(&log, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("SymptomGrid_2024-03-01.csv"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, render(&log));
    }

    #[test]
    fn test_export_failure_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let log = DayLog::new("2024-03-01");

        assert!(export(&log, &missing).is_err());
        assert!(!missing.join("SymptomGrid_2024-03-01.csv").exists());
    }
}
