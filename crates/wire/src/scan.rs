//! Whitespace boundary scanning over text lines.
//!
//! All offsets are byte offsets into the scanned `&str`. Whitespace is
//! [`char::is_whitespace`]. None of the functions allocate.

/// Returns the end of the content of `text`: the offset after its last
/// non-whitespace character.
///
/// Returns `text.len()` when there is no trailing whitespace and `0` when
/// `text` is empty or entirely whitespace.
#[inline]
pub fn end_of_content(text: &str) -> usize {
    text.trim_end_matches(char::is_whitespace).len()
}

/// Returns the offset of the first non-whitespace character at or after
/// `from`, or `text.len()` if there is none.
///
/// An offset past the end or inside a multi-byte character finds nothing.
#[inline]
pub fn first_non_whitespace(text: &str, from: usize) -> usize {
    find_from(text, from, |c| !c.is_whitespace())
}

/// Returns the offset of the first whitespace character at or after `from`,
/// or `text.len()` if there is none.
#[inline]
pub fn first_whitespace(text: &str, from: usize) -> usize {
    find_from(text, from, char::is_whitespace)
}

fn find_from(text: &str, from: usize, predicate: impl FnMut(char) -> bool) -> usize {
    text.get(from..).and_then(|rest| rest.find(predicate)).map_or(text.len(), |i| from + i)
}

/// Splits an HTTP initial line into its three fields.
///
/// Works for both `GET /index.html HTTP/1.1` and `HTTP/1.1 404 Not Found`: the
/// first two fields end at whitespace, the third runs to the end of the
/// content and keeps its interior spaces. Missing fields are empty.
pub fn split_initial_line(line: &str) -> [&str; 3] {
    let first_start = first_non_whitespace(line, 0);
    let first_end = first_whitespace(line, first_start);

    let second_start = first_non_whitespace(line, first_end);
    let second_end = first_whitespace(line, second_start);

    let third_start = first_non_whitespace(line, second_end);
    let third_end = end_of_content(line).max(third_start);

    [&line[first_start..first_end], &line[second_start..second_end], &line[third_start..third_end]]
}
