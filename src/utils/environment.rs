use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::paths::{expand_tilde_internal, format_path_with_tilde_internal};
use crate::error::StatsError;

/// Environment variable overriding the database location
pub const DB_PATH_ENV: &str = "ATUIN_DB_PATH";

/// File name of Atuin's history store inside its data directory
pub const HISTORY_DB_FILENAME: &str = "history.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// XDG data directory, Atuin's default on Linux and BSD
    Xdg,
    MacOs,
    /// Config directory some installs use on every platform
    Config,
}

/// A well-known Atuin data directory, relative to the home directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbLocation {
    pub platform: Platform,
    pub relative_dir: &'static str,
}

/// Default search order for the history database
pub const DEFAULT_DB_LOCATIONS: &[DbLocation] = &[
    DbLocation { platform: Platform::Xdg, relative_dir: ".local/share/atuin" },
    DbLocation { platform: Platform::MacOs, relative_dir: "Library/Application Support/atuin" },
    DbLocation { platform: Platform::Config, relative_dir: ".config/atuin" },
];

/// Get the user's home directory
///
/// Prefers `HOME`, falling back to the platform lookup when it is unset or empty.
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").filter(|h| !h.is_empty()).map(PathBuf::from).or_else(dirs::home_dir)
}

impl DbLocation {
    /// Full path of the database for this location under `home`
    pub fn db_path(&self, home: &Path) -> PathBuf {
        home.join(self.relative_dir).join(HISTORY_DB_FILENAME)
    }
}

/// Locate the history database
///
/// Candidates are checked in order: `explicit` (the `--db` flag), then `ATUIN_DB_PATH`,
/// then [`DEFAULT_DB_LOCATIONS`]. The first candidate that is a regular file wins.
///
/// # Errors
///
/// Returns [`StatsError::DatabaseNotFound`] listing every path tried when none of the
/// candidates is a regular file.
pub fn resolve_db_path(explicit: Option<&Path>) -> Result<PathBuf, StatsError> {
    let env_override = env::var_os(DB_PATH_ENV);
    resolve_db_path_internal(explicit, env_override.as_deref(), home_dir().as_deref())
}

pub(crate) fn resolve_db_path_internal(
    explicit: Option<&Path>,
    env_override: Option<&OsStr>,
    home: Option<&Path>,
) -> Result<PathBuf, StatsError> {
    let mut searched = Vec::new();

    let overrides = [
        ("--db flag", explicit.map(Path::as_os_str)),
        (DB_PATH_ENV, env_override),
    ];
    for (source, value) in overrides {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            continue;
        };
        let candidate = expand_tilde_internal(Path::new(value), home);
        if candidate.is_file() {
            debug!(path = %candidate.display(), source, "using database override");
            return Ok(candidate);
        }
        warn!(
            "Database path from {} is not a file: {}",
            source,
            format_path_with_tilde_internal(&candidate, home)
        );
        searched.push(candidate);
    }

    match home {
        Some(home) => {
            for location in DEFAULT_DB_LOCATIONS {
                let candidate = location.db_path(home);
                if candidate.is_file() {
                    debug!(
                        path = %candidate.display(),
                        platform = ?location.platform,
                        "found database in default location"
                    );
                    return Ok(candidate);
                }
                searched.push(candidate);
            }
        }
        None => warn!("Home directory unknown, skipping default database locations"),
    }

    Err(StatsError::DatabaseNotFound { searched })
}
