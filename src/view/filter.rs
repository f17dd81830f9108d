//! Substring filter
//!
//! Case-insensitive plain substring containment. No regex, no fuzzy matching.

use std::ops::Range;

/// Normalize raw filter input (surrounding whitespace is ignored)
pub fn normalize_filter_text(text: &str) -> String {
    text.trim().to_string()
}

/// Keep the lines that contain `filter_text`, ignoring case.
///
/// An empty filter keeps everything. Relative order is preserved.
pub fn apply_filter(raw: &[String], filter_text: &str) -> Vec<String> {
    if filter_text.is_empty() {
        return raw.to_vec();
    }
    let needle = filter_text.to_lowercase();
    raw.iter()
        .filter(|line| contains_ignore_case(line, &needle))
        .cloned()
        .collect()
}

/// Case-insensitive containment against an already-lowercased needle
pub fn contains_ignore_case(line: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    if line.is_ascii() && needle_lower.is_ascii() {
        let needle = needle_lower.as_bytes();
        return line
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }
    line.to_lowercase().contains(needle_lower)
}

/// Byte ranges of non-overlapping matches, for highlighting.
///
/// Only ASCII lines are supported; lowercasing non-ASCII text can change byte
/// offsets, so those lines report no ranges and render unhighlighted.
pub fn match_ranges(line: &str, needle_lower: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    if needle_lower.is_empty() || !line.is_ascii() || !needle_lower.is_ascii() {
        return ranges;
    }

    let haystack = line.as_bytes();
    let needle = needle_lower.as_bytes();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()].eq_ignore_ascii_case(needle) {
            ranges.push(start..start + needle.len());
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}
