use std::collections::HashMap;

use serde::Serialize;

/// One ranked row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandCount {
    pub command: String,
    pub count: usize,
}

/// Occurrence count per normalized command label
///
/// Labels are kept in the order they were first seen. Ranking sorts that sequence with a
/// stable sort, so labels with equal counts always come out in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct CommandTally {
    entries: Vec<CommandCount>,
    positions: HashMap<String, usize>,
}

impl CommandTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `label`
    pub fn increment(&mut self, label: &str) {
        match self.positions.get(label) {
            Some(&idx) => self.entries[idx].count += 1,
            None => {
                self.positions.insert(label.to_string(), self.entries.len());
                self.entries.push(CommandCount { command: label.to_string(), count: 1 });
            }
        }
    }

    pub fn count(&self, label: &str) -> usize {
        self.positions.get(label).map_or(0, |&idx| self.entries[idx].count)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of labels fed into the tally
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The `n` most frequent labels, highest count first
    ///
    /// Returns `min(n, self.len())` rows. Ties keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<CommandCount> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}
