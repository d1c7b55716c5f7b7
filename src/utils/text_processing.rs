//! Text processing utilities.
//!
//! This module contains helpers for matching search queries against result
//! text and fitting text into narrow columns.

use log::*;
use regex::Regex;

/// Build a case-insensitive regex that matches the query literally.
///
/// Returns `None` for a blank query, which matches everything.
pub fn query_regex(query: &str) -> Option<Regex> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    match Regex::new(&format!("(?i){}", regex::escape(query))) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Failed to compile query regex for '{}': {}", query, e);
            None
        }
    }
}

/// Return the byte ranges of every match of `re` in `text`.
///
pub fn highlight_ranges(text: &str, re: Option<&Regex>) -> Vec<(usize, usize)> {
    match re {
        Some(re) => re.find_iter(text).map(|m| (m.start(), m.end())).collect(),
        None => Vec::new(),
    }
}

/// Split text into segments, flagging the ones that matched.
///
pub fn split_highlighted<'a>(text: &'a str, ranges: &[(usize, usize)]) -> Vec<(&'a str, bool)> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for &(start, end) in ranges {
        if start > cursor {
            segments.push((&text[cursor..start], false));
        }
        segments.push((&text[start..end], true));
        cursor = end;
    }
    if cursor < text.len() {
        segments.push((&text[cursor..], false));
    }
    segments
}

/// Truncate text to at most `max_chars` characters, marking the cut with an
/// ellipsis.
///
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push('…');
    truncated
}
