//! List command - Show all recorded days

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::grid::model::{BodyArea, DayLog, TimeSlot};
use crate::grid::store::{Backend, LogStore};

const GRID_SIZE: usize = BodyArea::COUNT * TimeSlot::COUNT;

/// Per-day summary row
#[derive(Debug)]
pub struct DaySummary {
    pub date_iso: String,
    /// Cells edited away from the default
    pub touched: usize,
    /// Highest pain level recorded that day
    pub max_pain: u8,
}

/// Summarize one day log
pub fn summarize(log: &DayLog) -> DaySummary {
    let mut touched = 0;
    let mut max_pain = 0;

    for (_, _, cell) in log.iter() {
        if !cell.is_default() {
            touched += 1;
        }
        max_pain = max_pain.max(cell.pain);
    }

    DaySummary {
        date_iso: log.date_iso().to_string(),
        touched,
        max_pain,
    }
}

/// Execute the list command and return formatted output
pub fn execute<B: Backend>(store: &LogStore<B>) -> Result<String> {
    let summaries: Vec<DaySummary> = store.days().map(summarize).collect();

    if summaries.is_empty() {
        return Ok("No days recorded yet.".to_string());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Date"),
        Cell::new("Cells"),
        Cell::new("Max pain"),
    ]);

    for summary in &summaries {
        table.add_row(vec![
            Cell::new(&summary.date_iso),
            Cell::new(format!("{}/{}", summary.touched, GRID_SIZE)),
            Cell::new(summary.max_pain.to_string()),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!("\n\n{} day(s) recorded", summaries.len()));

    Ok(output)
}
