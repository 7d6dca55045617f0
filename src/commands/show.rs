//! Show command - Render the symptom grid for one day

use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::grid::model::{BodyArea, Stiffness, SymptomCell, TimeSlot};
use crate::grid::store::{Backend, LogStore};

/// Execute the show command and return formatted output
///
/// Showing a day counts as selecting it, so the day log is materialized and
/// persisted if it was absent.
pub fn execute<B: Backend>(store: &mut LogStore<B>, date: NaiveDate) -> Result<String> {
    store.ensure_day(date)?;
    let log = store.day_log(date);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    for slot in TimeSlot::ALL {
        header.push(Cell::new(slot.label()));
    }
    table.set_header(header);

    for area in BodyArea::ALL {
        let mut row = vec![Cell::new(area.label())];
        for slot in TimeSlot::ALL {
            row.push(Cell::new(format_cell(log.cell(area, slot))));
        }
        table.add_row(row);
    }

    Ok(format!("{}\n\n{}", log.date_iso(), table))
}

/// Short multi-line summary of one cell
fn format_cell(cell: &SymptomCell) -> String {
    let mut lines = vec![format!("Pain {}", cell.pain)];
    if cell.numbness {
        lines.push("Numb".to_string());
    }
    if cell.stiffness != Stiffness::None {
        lines.push(cell.stiffness.label().to_string());
    }
    if !cell.notes.is_empty() {
        lines.push(truncate_str(&cell.notes, 24));
    }
    lines.join("\n")
}

/// Truncate string to max length (char-safe)
fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::date;
    use crate::grid::store::MemoryBackend;

    #[test]
    fn test_format_default_cell() {
        assert_eq!(format_cell(&SymptomCell::default()), "Pain 0");
    }

    #[test]
    fn test_format_full_cell() {
        let cell = SymptomCell {
            pain: 6,
            numbness: true,
            stiffness: Stiffness::Moderate,
            notes: "throbbing".to_string(),
        };
        assert_eq!(format_cell(&cell), "Pain 6\nNumb\nModerate\nthrobbing");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 24), "short");
        let long = "a".repeat(30);
        let out = truncate_str(&long, 24);
        assert_eq!(out, format!("{}...", "a".repeat(24)));
    }

    #[test]
    fn test_show_materializes_day() {
        let mut store = LogStore::open(MemoryBackend::new());
        let date = date::parse_date("2024-03-01").unwrap();

        let output = execute(&mut store, date).unwrap();
        assert!(output.starts_with("2024-03-01"));
        assert!(output.contains("Morning"));
        assert!(output.contains("Ankles"));
        assert_eq!(store.days().count(), 1);
    }
}
