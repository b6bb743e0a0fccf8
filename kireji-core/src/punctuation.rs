//! Punctuation handling
//!
//! Punctuation is the ASCII set ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.

/// Whether `ch` is a punctuation character
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

/// Whether every character of `token` is punctuation
///
/// An empty token is vacuously punctuation-only.
pub fn is_punctuation_only(token: &str) -> bool {
    token.chars().all(is_punctuation)
}

/// Drop punctuation-only tokens, keeping the rest unmodified and in order
///
/// Punctuation attached to a word (`"pond."`) is not stripped.
pub fn filter_punctuation<'a>(tokens: Vec<&'a str>) -> Vec<&'a str> {
    tokens
        .into_iter()
        .filter(|token| !is_punctuation_only(token))
        .collect()
}

/// Drop a single trailing punctuation character, if present
pub fn strip_trailing_punctuation(text: &str) -> &str {
    match text.chars().next_back() {
        Some(last) if is_punctuation(last) => &text[..text.len() - last.len_utf8()],
        _ => text,
    }
}
