//! The fixed character set the analyzer counts, plus the boundary filter
//! applied to raw input before it reaches the frequency table.

/// Characters that may appear in the frequency table: lowercase letters
/// `a` through `t` and the decimal digits.
pub const VALID_CHARS: &str = "abcdefghijklmnopqrst01234567890";

/// Lowercases `ch` and returns it if it belongs to [`VALID_CHARS`].
///
/// Whitespace and anything outside the set yield `None`; callers skip
/// those characters entirely, so the core never sees them.
pub fn normalize(ch: char) -> Option<char> {
    if ch.is_whitespace() {
        return None;
    }
    let lower = ch.to_ascii_lowercase();
    if VALID_CHARS.contains(lower) {
        Some(lower)
    } else {
        None
    }
}
