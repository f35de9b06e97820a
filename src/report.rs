//! Rendering of the ranked top-N report

use std::fmt::Write;

use serde::Serialize;

use crate::models::CommandCount;
use crate::utils::sanitize_label;

#[derive(Serialize)]
struct JsonReport<'a> {
    top: usize,
    total: usize,
    commands: &'a [CommandCount],
}

/// Plain text report: a header naming `top_n`, then one `label: count times` line per row
pub fn render_text(top_n: usize, commands: &[CommandCount]) -> String {
    let mut out = format!("Top {} commands:\n", top_n);
    for entry in commands {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}: {} times", sanitize_label(&entry.command), entry.count);
    }
    out
}

/// JSON report; `total` is the number of records that were counted
pub fn render_json(
    top_n: usize,
    total: usize,
    commands: &[CommandCount],
) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(&JsonReport { top: top_n, total, commands })?;
    json.push('\n');
    Ok(json)
}
