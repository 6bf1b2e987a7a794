//! Placeholder scanning shared by the run-time and const formatters.
//!
//! A placeholder spans from a `{` to the first `}` after it. Anything between
//! the braces is consumed along with them; the strict policy rejects it.

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Placeholder {
    /// Byte offsets of the opening `{` and its closing `}`.
    Found { open: usize, close: usize },
    /// A `{` with no `}` anywhere after it.
    Unclosed { open: usize },
    /// No `{` at or after the scan position.
    Missing,
}

/// Finds the first placeholder starting at byte offset `from`.
pub const fn find_placeholder(template: &[u8], from: usize) -> Placeholder {
    let Some(open) = find_byte(template, from, b'{') else {
        return Placeholder::Missing;
    };

    match find_byte(template, open + 1, b'}') {
        Some(close) => Placeholder::Found { open, close },
        None => Placeholder::Unclosed { open },
    }
}

/// Counts the placeholders a left-to-right scan would consume.
pub const fn count_placeholders(template: &str) -> usize {
    let bytes = template.as_bytes();
    let mut count = 0;
    let mut cursor = 0;

    while let Placeholder::Found { close, .. } = find_placeholder(bytes, cursor) {
        count += 1;
        cursor = close + 1;
    }

    count
}

pub const fn find_byte(haystack: &[u8], from: usize, needle: u8) -> Option<usize> {
    let mut i = from;

    while i < haystack.len() {
        if haystack[i] == needle {
            return Some(i);
        }

        i += 1;
    }

    None
}
