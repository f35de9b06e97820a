//! Data models for the command usage report.
//!
//! - [`HistoryRecord`] - One row of Atuin's `history` table
//! - [`AliasTable`] - Alias name to expansion mapping captured from the calling shell
//! - [`CommandTally`] - Occurrence count per normalized command label
//! - [`CommandCount`] - One ranked `(label, count)` row of the report

pub mod alias;
pub mod history;
pub mod tally;

pub use alias::AliasTable;
pub use history::HistoryRecord;
pub use tally::{CommandCount, CommandTally};
