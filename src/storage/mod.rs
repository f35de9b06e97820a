//! Read-only access to Atuin's SQLite history store
//!
//! # Error Handling Strategy
//!
//! - **Typed rows**: Each row is mapped column by column into a
//!   [`HistoryRecord`](crate::models::HistoryRecord). A missing column or a value of the
//!   wrong type fails the whole read; rows are never half-filled with defaults.
//!
//! - **Recovery**: [`load_history`] logs a failed read and hands back an empty history, so a
//!   corrupt or foreign database yields an empty report rather than an abort.
//!
//! - **Resources**: The connection lives only inside [`read_history_records`] and is closed
//!   when it returns, whichever path it returns by.

pub mod history_db;

pub use history_db::{load_history, read_history_records};
