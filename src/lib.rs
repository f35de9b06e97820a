//! Atuin Stats - Report the shell commands you run most often
//!
//! This library reads the SQLite history store kept by [Atuin](https://atuin.sh) and ranks
//! commands by how often they were run. Shell aliases are resolved one level deep so that
//! `gs` and `git status` are counted together. It supports:
//!
//! - Locating `history.db` from a flag, `ATUIN_DB_PATH`, or the usual install locations
//! - Loading alias definitions from piped input or the user's interactive shell
//! - Normalizing command lines into one-or-two-word labels
//! - Counting and ranking labels, rendered as text or JSON
//!
//! # Example
//!
//! ```no_run
//! use atuin_stats::models::AliasTable;
//! use atuin_stats::{build_tally, read_history_records, resolve_db_path};
//!
//! let db_path = resolve_db_path(None)?;
//! let records = read_history_records(&db_path)?;
//! let tally = build_tally(&records, &AliasTable::new());
//! for row in tally.top(10) {
//!     println!("{}: {} times", row.command, row.count);
//! }
//! # Ok::<(), atuin_stats::StatsError>(())
//! ```

pub mod aliases;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod storage;
pub mod tally;
pub mod utils;

// Re-export commonly used types
pub use aliases::{load_aliases, parse_alias_listing};
pub use error::StatsError;
pub use storage::read_history_records;
pub use tally::{build_tally, normalize_command};
pub use utils::paths::format_path_with_tilde;
pub use utils::resolve_db_path;
