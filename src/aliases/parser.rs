use crate::models::AliasTable;

const QUOTE_CHARS: [char; 2] = ['\'', '"'];

/// Parse one line of an alias listing into `(name, expansion)`
///
/// Accepts the `name=expansion` lines printed by zsh and the `alias name='expansion'` lines
/// printed by bash. Quote characters are removed from the expansion. Returns `None` for
/// blank lines, lines without `=`, and lines whose name or expansion is empty.
pub fn parse_alias_line(line: &str) -> Option<(String, String)> {
    let (name, expansion) = line.split_once('=')?;

    let name = name.trim();
    let name = name.strip_prefix("alias ").map(str::trim_start).unwrap_or(name);
    let expansion: String = expansion.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect();
    let expansion = expansion.trim();

    if name.is_empty() || expansion.is_empty() {
        return None;
    }

    Some((name.to_string(), expansion.to_string()))
}

/// Parse a full alias listing, one definition per line
pub fn parse_alias_listing(listing: &str) -> AliasTable {
    listing.lines().filter(|line| !line.trim().is_empty()).filter_map(parse_alias_line).collect()
}
