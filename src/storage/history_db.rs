use std::fs;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::{debug, error, info};

use crate::error::StatsError;
use crate::models::HistoryRecord;
use crate::utils::format_path_with_tilde;

const HISTORY_QUERY: &str =
    "SELECT command, cwd, deleted_at, duration, exit, hostname, id, session, timestamp FROM history";

/// Read every row of Atuin's `history` table
///
/// The database is opened read-only and the connection is dropped before returning, on
/// success and on every error path. Rows come back in storage order.
///
/// # Errors
///
/// Returns [`StatsError::StorageRead`] if:
/// - `path` does not exist or is not a regular file
/// - the file is not a SQLite database
/// - the `history` table or one of its columns is missing
/// - a column holds a value of the wrong type
pub fn read_history_records(path: &Path) -> Result<Vec<HistoryRecord>, StatsError> {
    let metadata = fs::metadata(path).map_err(|e| StatsError::storage_read(path, e))?;
    if !metadata.is_file() {
        return Err(StatsError::storage_read(path, "The specified path is not a file"));
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| StatsError::storage_read(path, e))?;

    let mut stmt = conn.prepare(HISTORY_QUERY).map_err(|e| StatsError::storage_read(path, e))?;
    let records = stmt
        .query_map([], HistoryRecord::from_row)
        .map_err(|e| StatsError::storage_read(path, e))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| StatsError::storage_read(path, e))?;

    debug!(rows = records.len(), "history query finished");
    Ok(records)
}

/// Read history records, degrading to an empty history on failure
///
/// A storage failure is logged and the run continues with zero records.
pub fn load_history(path: &Path) -> Vec<HistoryRecord> {
    info!("Reading stats from Atuin database in {}", format_path_with_tilde(path));

    match read_history_records(path) {
        Ok(records) => {
            let deleted = records.iter().filter(|r| r.is_deleted()).count();
            info!("Read {} history records ({} marked deleted)", records.len(), deleted);
            records
        }
        Err(e) => {
            error!("{}", e);
            Vec::new()
        }
    }
}
