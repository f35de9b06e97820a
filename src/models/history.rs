use rusqlite::Row;
use rusqlite::types::ValueRef;

/// One executed shell command as stored by Atuin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub command: String,
    pub cwd: String,
    pub deleted_at: Option<i64>,
    pub duration: i64,
    pub exit: i64,
    pub hostname: String,
    pub id: String,
    pub session: String,
    pub timestamp: i64,
}

impl HistoryRecord {
    /// Map a row of the history query into a record
    ///
    /// Every column is looked up by name and converted to its declared type, so a missing
    /// column or a value of the wrong type surfaces as an error instead of a default.
    /// TEXT columns holding invalid UTF-8 are decoded lossily; one mangled command must not
    /// cost the rest of the history.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            command: text_column(row, "command")?,
            cwd: text_column(row, "cwd")?,
            deleted_at: row.get("deleted_at")?,
            duration: row.get("duration")?,
            exit: row.get("exit")?,
            hostname: text_column(row, "hostname")?,
            id: text_column(row, "id")?,
            session: text_column(row, "session")?,
            timestamp: row.get("timestamp")?,
        })
    }

    /// Whether the record was logically deleted in Atuin
    ///
    /// Informational only: deleted records are still counted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Read a TEXT column, replacing invalid UTF-8 sequences
///
/// NULL, INTEGER, REAL and BLOB values are rejected like any other type mismatch.
fn text_column(row: &Row<'_>, name: &str) -> rusqlite::Result<String> {
    let idx = row.as_ref().column_index(name)?;
    match row.get_ref(idx)? {
        ValueRef::Text(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
        other => Err(rusqlite::Error::InvalidColumnType(idx, name.to_string(), other.data_type())),
    }
}
