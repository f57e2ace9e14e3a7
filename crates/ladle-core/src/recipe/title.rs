//! Recipe title derivation and normalization.
//!
//! Titles come out of free-form generated text, so the rules here are
//! deliberately tolerant: the only hard requirement on the generator's
//! output is a non-empty first line.

/// Maximum stored title length, in characters.
pub const MAX_TITLE_CHARS: usize = 120;

/// Derives a title from raw generated text.
///
/// Takes the first non-empty line, trims it, and truncates to
/// [`MAX_TITLE_CHARS`] characters. Returns an empty string when the input
/// contains no non-empty line.
pub fn sanitize_title(raw: &str) -> String {
    let first_line = raw
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");
    first_line.chars().take(MAX_TITLE_CHARS).collect()
}

/// The de-duplication key for a title: trimmed and case-folded.
///
/// Every duplicate check in the system, local and remote-merge alike, must
/// go through this so that "Tomato Soup" and " tomato soup " collide.
pub fn normalized_title(title: &str) -> String {
    title.trim().to_lowercase()
}
