//! Set command - Edit one cell of the grid

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::grid::date;
use crate::grid::model::{BodyArea, Stiffness, SymptomCell, TimeSlot};
use crate::grid::store::{Backend, LogStore};

/// Field updates for one cell; unset fields keep their stored values
#[derive(Debug, Clone, Default)]
pub struct CellUpdate {
    pub pain: Option<u8>,
    pub numbness: Option<bool>,
    pub stiffness: Option<Stiffness>,
    pub notes: Option<String>,
}

/// Apply an update on top of the stored cell
///
/// Pain is clamped to 0..=10 here, at the input boundary; the store itself
/// does not validate.
pub fn apply(current: &SymptomCell, update: &CellUpdate) -> SymptomCell {
    SymptomCell {
        pain: update
            .pain
            .map(|p| p.min(SymptomCell::MAX_PAIN))
            .unwrap_or(current.pain),
        numbness: update.numbness.unwrap_or(current.numbness),
        stiffness: update.stiffness.unwrap_or(current.stiffness),
        notes: update
            .notes
            .clone()
            .unwrap_or_else(|| current.notes.clone()),
    }
}

/// Execute the set command
pub fn execute<B: Backend>(
    store: &mut LogStore<B>,
    area: BodyArea,
    slot: TimeSlot,
    date: NaiveDate,
    update: &CellUpdate,
) -> Result<()> {
    let current = store.cell(area, slot, date)?;
    let cell = apply(&current, update);
    store.set_cell(cell.clone(), area, slot, date)?;

    let notes_suffix = if cell.notes.is_empty() {
        String::new()
    } else {
        format!(", notes: {}", cell.notes)
    };
    println!(
        "{} {} / {} on {}: pain {}, numbness {}, stiffness {}{}",
        "Updated:".green(),
        area.label(),
        slot.label(),
        date::date_key(date),
        cell.pain,
        if cell.numbness { "yes" } else { "no" },
        cell.stiffness.label(),
        notes_suffix
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::store::MemoryBackend;

    #[test]
    fn test_apply_partial_update_keeps_stored_fields() {
        let current = SymptomCell {
            pain: 3,
            numbness: true,
            stiffness: Stiffness::Mild,
            notes: "stored".to_string(),
        };
        let update = CellUpdate {
            pain: Some(8),
            ..Default::default()
        };

        let cell = apply(&current, &update);
        assert_eq!(cell.pain, 8);
        assert!(cell.numbness);
        assert_eq!(cell.stiffness, Stiffness::Mild);
        assert_eq!(cell.notes, "stored");
    }

    #[test]
    fn test_apply_clamps_pain() {
        let cell = apply(
            &SymptomCell::default(),
            &CellUpdate {
                pain: Some(200),
                ..Default::default()
            },
        );
        assert_eq!(cell.pain, 10);
    }

    #[test]
    fn test_apply_full_update() {
        let update = CellUpdate {
            pain: Some(5),
            numbness: Some(true),
            stiffness: Some(Stiffness::Severe),
            notes: Some("all fields".to_string()),
        };
        let cell = apply(&SymptomCell::default(), &update);
        assert_eq!(
            cell,
            SymptomCell {
                pain: 5,
                numbness: true,
                stiffness: Stiffness::Severe,
                notes: "all fields".to_string(),
            }
        );
    }

    #[test]
    fn test_execute_persists_cell() {
        let mut store = LogStore::open(MemoryBackend::new());
        let date = date::parse_date("2024-03-01").unwrap();
        let update = CellUpdate {
            pain: Some(7),
            numbness: Some(true),
            ..Default::default()
        };

        execute(&mut store, BodyArea::Hands, TimeSlot::Morning, date, &update).unwrap();

        let cell = store
            .cell(BodyArea::Hands, TimeSlot::Morning, date)
            .unwrap();
        assert_eq!(cell.pain, 7);
        assert!(cell.numbness);
    }
}
