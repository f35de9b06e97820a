use tracing::debug;

use super::normalize::normalize_command;
use crate::models::{AliasTable, CommandTally, HistoryRecord};

/// Count normalized labels in input order
pub fn tally_labels<I, S>(labels: I) -> CommandTally
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally = CommandTally::new();
    for label in labels {
        tally.increment(label.as_ref());
    }
    tally
}

/// Normalize every record through `aliases` and count the labels
///
/// Every record contributes exactly one increment, including records Atuin marks as
/// deleted.
pub fn build_tally(records: &[HistoryRecord], aliases: &AliasTable) -> CommandTally {
    let tally = tally_labels(records.iter().map(|r| normalize_command(&r.command, aliases)));
    debug!(records = records.len(), labels = tally.len(), "tally built");
    tally
}
