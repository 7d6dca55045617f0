//! CLI commands

pub mod export;
pub mod list;
pub mod reset;
pub mod set;
pub mod show;
