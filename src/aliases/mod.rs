//! Alias discovery for the calling shell
//!
//! # Error Handling Strategy
//!
//! Aliases only improve the report, so nothing here is fatal:
//!
//! - **Source failures**: A shell that cannot be spawned or a stdin that cannot be read is
//!   logged at `info` and treated as "no aliases".
//! - **Malformed lines**: Lines that are not `name=expansion` are skipped silently; shells
//!   print plenty of noise in interactive mode.
//! - **User feedback**: When no aliases could be loaded a single notice is printed to stderr
//!   explaining how to pipe them in.

pub mod parser;
pub mod source;

use tracing::{info, warn};

pub use parser::{parse_alias_line, parse_alias_listing};
pub use source::{AliasSource, InteractiveShell, PipedInput, Unavailable};

use crate::models::AliasTable;

const NO_ALIASES_NOTICE: &str =
    "No aliases provided. Run with: `alias | atuin-stats` for better results.";

/// Build the alias table from `source`
///
/// Never fails: an unavailable or empty source yields an empty table plus a notice.
pub fn load_aliases(source: &mut dyn AliasSource) -> AliasTable {
    match source.read_listing() {
        Ok(listing) if !listing.trim().is_empty() => {
            let table = parse_alias_listing(&listing);
            info!("Loaded {} aliases from {}", table.len(), source.describe());
            if table.is_empty() {
                warn!("{}", NO_ALIASES_NOTICE);
            }
            table
        }
        Ok(_) => {
            info!("No alias data from {}", source.describe());
            warn!("{}", NO_ALIASES_NOTICE);
            AliasTable::new()
        }
        Err(e) => {
            info!("{}", e);
            warn!("{}", NO_ALIASES_NOTICE);
            AliasTable::new()
        }
    }
}
