//! Terminal output sanitization for report labels
//!
//! Command labels come straight from the history database, which records whatever the user
//! typed or pasted. A label containing escape sequences could recolor the terminal or move
//! the cursor when the report is printed, so every label goes through [`sanitize_label`]
//! before it reaches stdout.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Removes ANSI escape sequences and control characters from a label
///
/// Handles CSI sequences (`ESC [ ... letter`), OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`) and two-character escapes. Any other control character is dropped.
///
/// # Examples
///
/// ```
/// use atuin_stats::utils::terminal::sanitize_label;
///
/// assert_eq!(sanitize_label("\x1b[31mgit\x1b[0m status"), "git status");
/// ```
pub fn sanitize_label(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.next() {
                Some('[') => {
                    // CSI ends at the first final byte in the @..~ range
                    for next in chars.by_ref() {
                        if ('@'..='~').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() {
            continue;
        }

        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_color() {
        assert_eq!(sanitize_label("\x1b[31mcargo\x1b[0m build"), "cargo build");
    }

    #[test]
    fn test_sanitize_cursor_movement() {
        assert_eq!(sanitize_label("\x1b[2J\x1b[Hls"), "ls");
    }

    #[test]
    fn test_sanitize_osc_title() {
        assert_eq!(sanitize_label("\x1b]0;pwned\x07echo"), "echo");
        assert_eq!(sanitize_label("\x1b]0;pwned\x1b\\echo"), "echo");
    }

    #[test]
    fn test_sanitize_control_characters() {
        assert_eq!(sanitize_label("vim\x07\x08 -p\t"), "vim -p");
    }

    #[test]
    fn test_sanitize_plain_and_unicode() {
        assert_eq!(sanitize_label("git commit"), "git commit");
        assert_eq!(sanitize_label("echo 👋"), "echo 👋");
        assert_eq!(sanitize_label(""), "");
    }

    #[test]
    fn test_sanitize_truncated_sequence() {
        assert_eq!(sanitize_label("ls\x1b["), "ls");
        assert_eq!(sanitize_label("ls\x1b"), "ls");
    }
}
