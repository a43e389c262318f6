//! ANSI escape sequence removal

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// ESC followed by a single Fe byte, or a full CSI sequence
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("Invalid ANSI escape regex")
});

const ESC: char = '\x1B';

/// Remove every ANSI escape sequence from `text`
///
/// Returns the input borrowed when it contains no ESC character. Removing a
/// sequence can leave a stray ESC next to bytes that form a new sequence, so
/// stripping repeats until nothing matches; the result is therefore stable
/// under a second application.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.contains(ESC) || !ANSI_ESCAPE.is_match(text) {
        return Cow::Borrowed(text);
    }

    let mut stripped = ANSI_ESCAPE.replace_all(text, "").into_owned();
    while ANSI_ESCAPE.is_match(&stripped) {
        stripped = ANSI_ESCAPE.replace_all(&stripped, "").into_owned();
    }
    Cow::Owned(stripped)
}
