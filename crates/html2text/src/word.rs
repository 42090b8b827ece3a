//! Word-level helpers for the text scan.
//!
//! A word starts out as a raw run: the bytes from the cursor up to the next
//! space or `<`. Only the space byte separates words; tabs and line breaks
//! are ordinary bytes here and only disappear when trimming reaches them at
//! the edge of a run.

/// Length of the raw run starting at `at`.
pub fn word_run(html: &[u8], at: usize) -> usize {
    strcspn!(html, b' ' | b'<', at)
}

/// Length of the run of separator spaces starting at `at`.
pub fn separator_run(html: &[u8], at: usize) -> usize {
    strspn!(html, b' ', at)
}

/// Strips leading and trailing bytes that are not ASCII alphanumeric.
///
/// Returns an empty slice when nothing alphanumeric remains.
pub fn trim_token(raw: &[u8]) -> &[u8] {
    let Some(start) = raw.iter().position(u8::is_ascii_alphanumeric) else {
        return &[];
    };
    let end = raw
        .iter()
        .rposition(u8::is_ascii_alphanumeric)
        .map_or(start, |last| last + 1);

    &raw[start..end]
}

/// Lowercases the first byte when it is an ASCII uppercase letter. The rest
/// of the word is left alone.
pub fn fold_first(word: &mut [u8]) {
    if let Some(first) = word.first_mut() {
        first.make_ascii_lowercase();
    }
}
