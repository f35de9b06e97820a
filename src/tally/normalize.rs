use crate::models::AliasTable;

/// Normalize a raw command line into its aggregation label
///
/// The label is the program name plus at most one subcommand word from each of two places:
///
/// 1. The first word is looked up in `aliases`. An alias is replaced by the first word of
///    its expansion, followed by the expansion's second word when it has one.
/// 2. The second word of the raw command line, if any, is appended after that.
///
/// An empty command normalizes to the empty label.
///
/// # Examples
///
/// ```
/// use atuin_stats::models::AliasTable;
/// use atuin_stats::normalize_command;
///
/// let aliases: AliasTable = [("gs", "git status")].into_iter().collect();
/// assert_eq!(normalize_command("gs", &aliases), "git status");
/// assert_eq!(normalize_command("gs --short", &aliases), "git status --short");
/// assert_eq!(normalize_command("ls -la /tmp", &aliases), "ls -la");
/// ```
pub fn normalize_command(command: &str, aliases: &AliasTable) -> String {
    let mut words = command.split_whitespace();
    let Some(program) = words.next() else {
        return String::new();
    };

    let mut label: Vec<&str> = Vec::with_capacity(3);
    match aliases.get(program) {
        Some(expansion) => {
            let mut expanded = expansion.split_whitespace();
            match expanded.next() {
                Some(first) => {
                    label.push(first);
                    label.extend(expanded.next());
                }
                None => label.push(program),
            }
        }
        None => label.push(program),
    }

    label.extend(words.next());
    label.join(" ")
}
