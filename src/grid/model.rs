//! Symptom grid data model
//!
//! A day log is a fixed 5x4 grid: one `SymptomCell` per (body area, time
//! slot) pair. The grid is stored as an array indexed by enum ordinal and
//! default-filled at construction, so every pair always has a cell. The
//! persisted JSON shape is the nested string-keyed map that the grid front
//! ends have always written; `DayLogRepr` converts between the two.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Body areas tracked per day, in display and export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyArea {
    Hands,
    Elbows,
    Shoulders,
    Knees,
    Ankles,
}

impl BodyArea {
    pub const COUNT: usize = 5;

    pub const ALL: [BodyArea; Self::COUNT] = [
        Self::Hands,
        Self::Elbows,
        Self::Shoulders,
        Self::Knees,
        Self::Ankles,
    ];

    /// Stable string identifier, equal to the display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Hands => "Hands",
            Self::Elbows => "Elbows",
            Self::Shoulders => "Shoulders",
            Self::Knees => "Knees",
            Self::Ankles => "Ankles",
        }
    }
}

impl fmt::Display for BodyArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown body area: {0} (expected Hands, Elbows, Shoulders, Knees or Ankles)")]
pub struct ParseBodyAreaError(String);

impl FromStr for BodyArea {
    type Err = ParseBodyAreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|area| area.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseBodyAreaError(s.to_string()))
    }
}

/// Times of day tracked per area, in display and export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    Midday,
    Evening,
    Night,
}

impl TimeSlot {
    pub const COUNT: usize = 4;

    pub const ALL: [TimeSlot; Self::COUNT] =
        [Self::Morning, Self::Midday, Self::Evening, Self::Night];

    /// Stable string identifier, equal to the display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Midday => "Midday",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown time slot: {0} (expected Morning, Midday, Evening or Night)")]
pub struct ParseTimeSlotError(String);

impl FromStr for TimeSlot {
    type Err = ParseTimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTimeSlotError(s.to_string()))
    }
}

/// Stiffness levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stiffness {
    #[default]
    None,
    Mild,
    Moderate,
    Severe,
}

impl Stiffness {
    pub const ALL: [Stiffness; 4] = [Self::None, Self::Mild, Self::Moderate, Self::Severe];

    /// Stable string identifier, equal to the display label
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

impl fmt::Display for Stiffness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown stiffness: {0} (expected None, Mild, Moderate or Severe)")]
pub struct ParseStiffnessError(String);

impl FromStr for Stiffness {
    type Err = ParseStiffnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStiffnessError(s.to_string()))
    }
}

/// One record of symptoms for one (area, slot) pair
///
/// Cells have no identity beyond their grid position; equality is structural.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomCell {
    /// Pain level 0..=10
    #[serde(default)]
    pub pain: u8,
    #[serde(default)]
    pub numbness: bool,
    #[serde(default)]
    pub stiffness: Stiffness,
    #[serde(default)]
    pub notes: String,
}

impl SymptomCell {
    pub const MAX_PAIN: u8 = 10;

    /// Whether every field still holds its default value
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// The complete symptom grid for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DayLogRepr", into = "DayLogRepr")]
pub struct DayLog {
    date_iso: String,
    cells: [[SymptomCell; TimeSlot::COUNT]; BodyArea::COUNT],
}

impl DayLog {
    /// Create a fully populated day log with all-default cells
    pub fn new(date_iso: impl Into<String>) -> Self {
        Self {
            date_iso: date_iso.into(),
            cells: std::array::from_fn(|_| std::array::from_fn(|_| SymptomCell::default())),
        }
    }

    /// The `yyyy-MM-dd` key this log belongs to
    pub fn date_iso(&self) -> &str {
        &self.date_iso
    }

    pub fn cell(&self, area: BodyArea, slot: TimeSlot) -> &SymptomCell {
        &self.cells[area as usize][slot as usize]
    }

    pub fn set_cell(&mut self, area: BodyArea, slot: TimeSlot, cell: SymptomCell) {
        self.cells[area as usize][slot as usize] = cell;
    }

    /// All cells in fixed enumeration order: area outer, slot inner
    pub fn iter(&self) -> impl Iterator<Item = (BodyArea, TimeSlot, &SymptomCell)> {
        BodyArea::ALL.into_iter().flat_map(move |area| {
            TimeSlot::ALL
                .into_iter()
                .map(move |slot| (area, slot, self.cell(area, slot)))
        })
    }
}

/// Wire shape of a day log: `{ dateISO, entries: { area: { slot: cell } } }`
#[derive(Serialize, Deserialize)]
struct DayLogRepr {
    #[serde(rename = "dateISO")]
    date_iso: String,
    #[serde(default)]
    entries: BTreeMap<String, BTreeMap<String, SymptomCell>>,
}

impl From<DayLog> for DayLogRepr {
    fn from(log: DayLog) -> Self {
        let mut entries = BTreeMap::new();
        for area in BodyArea::ALL {
            let row: BTreeMap<String, SymptomCell> = TimeSlot::ALL
                .iter()
                .map(|&slot| (slot.label().to_string(), log.cell(area, slot).clone()))
                .collect();
            entries.insert(area.label().to_string(), row);
        }
        Self {
            date_iso: log.date_iso,
            entries,
        }
    }
}

impl From<DayLogRepr> for DayLog {
    fn from(repr: DayLogRepr) -> Self {
        // Missing entries stay at their defaults; unknown keys are dropped
        let mut log = DayLog::new(repr.date_iso);
        for (area_key, row) in repr.entries {
            let Ok(area) = area_key.parse::<BodyArea>() else {
                continue;
            };
            for (slot_key, cell) in row {
                let Ok(slot) = slot_key.parse::<TimeSlot>() else {
                    continue;
                };
                log.set_cell(area, slot, cell);
            }
        }
        log
    }
}
