//! Reset command - Clear all entries for one day

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::grid::date;
use crate::grid::store::{Backend, LogStore};

/// Execute the reset command
pub fn execute<B: Backend>(store: &mut LogStore<B>, date: NaiveDate, yes: bool) -> Result<()> {
    let key = date::date_key(date);

    if !yes {
        print!("Clear all entries for {}? (y/N) ", key);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.reset_day(date)?;
    println!("{} {}", "Reset:".green(), key);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::model::{BodyArea, SymptomCell, TimeSlot};
    use crate::grid::store::MemoryBackend;

    #[test]
    fn test_reset_with_yes() {
        let mut store = LogStore::open(MemoryBackend::new());
        let date = date::parse_date("2024-03-01").unwrap();
        store
            .set_cell(
                SymptomCell {
                    pain: 9,
                    ..Default::default()
                },
                BodyArea::Elbows,
                TimeSlot::Evening,
                date,
            )
            .unwrap();

        execute(&mut store, date, true).unwrap();

        let cell = store.cell(BodyArea::Elbows, TimeSlot::Evening, date).unwrap();
        assert!(cell.is_default());
    }
}
