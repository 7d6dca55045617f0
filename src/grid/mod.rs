//! Symptom grid: data model, persistence and CSV export

pub mod csv;
pub mod date;
pub mod model;
pub mod store;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use model::{BodyArea, DayLog, Stiffness, SymptomCell, TimeSlot};
#[allow(unused_imports)]
pub use store::{Backend, FileBackend, LogStore, MemoryBackend};
