//! Text helpers shared by the store adapter and the HTTP layer.
//!
//! Error text that reaches clients or diagnostics is shortened so that
//! internal details such as connection strings are not echoed in full.

/// Marker appended to shortened text.
const ELLIPSIS: char = '…';

/// Shortens `value` to at most `max_chars` characters.
///
/// Counting is by `char`, so multi-byte text is never split mid-character.
/// When shortening happens the last retained character is replaced with an
/// ellipsis.
#[must_use]
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if value.chars().count() <= max_chars {
        return value.to_owned();
    }
    let mut shortened: String = value.chars().take(max_chars - 1).collect();
    shortened.push(ELLIPSIS);
    shortened
}
