use std::path::PathBuf;

use thiserror::Error;

use crate::utils::format_path_with_tilde;

/// Error kinds produced by the reporter pipeline
///
/// Only [`StatsError::DatabaseNotFound`] reaches `main`. The other two are recovered where
/// they occur: storage failures degrade to an empty history and alias failures degrade to an
/// empty alias table.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error(
        "Could not find Atuin database (searched: {}). Please specify with --db flag or ATUIN_DB_PATH environment variable",
        display_searched(.searched)
    )]
    DatabaseNotFound { searched: Vec<PathBuf> },

    #[error("Failed to read the database file {}: {reason}", format_path_with_tilde(.path))]
    StorageRead { path: PathBuf, reason: String },

    #[error("Alias source unavailable: {0}")]
    AliasSourceUnavailable(String),
}

impl StatsError {
    pub(crate) fn storage_read(path: &std::path::Path, reason: impl ToString) -> Self {
        StatsError::StorageRead { path: path.to_path_buf(), reason: reason.to_string() }
    }
}

fn display_searched(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        return "no candidate locations".to_string();
    }
    searched.iter().map(|p| format_path_with_tilde(p)).collect::<Vec<_>>().join(", ")
}
