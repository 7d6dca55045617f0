//! symptom-grid library
//!
//! Data model, log store and CSV export for a personal symptom-tracking
//! grid: pain, numbness, stiffness and notes per body area and time of day,
//! keyed by calendar date and persisted as a single local JSON document.

pub mod config;
pub mod grid;
