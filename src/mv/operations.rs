//! Multivalue string operations
//!
//! Positional access to records encoded with AM / VM / SM marks.
//! Positions are 1-based; a position of 0 stops the descent at that level.

use std::ops::Range;

use crate::protocol::marks::{AM, SM, VM};

// =============================================================================
// Counting
// =============================================================================

/// Number of `delimiter`-separated parts in `s`
///
/// Returns 0 for an empty string. An empty delimiter counts every character
/// as its own part.
pub fn lk_dcount(s: &str, delimiter: &str) -> usize {
    if s.is_empty() {
        return 0;
    }
    if delimiter.is_empty() {
        return s.chars().count();
    }
    s.matches(delimiter).count() + 1
}

/// Number of `delimiter` occurrences in `s`
///
/// Same edge cases as [`lk_dcount`].
pub fn lk_count(s: &str, delimiter: &str) -> usize {
    if s.is_empty() {
        return 0;
    }
    if delimiter.is_empty() {
        return s.chars().count();
    }
    s.matches(delimiter).count()
}

// =============================================================================
// Extraction
// =============================================================================

/// Extract a field, value or subvalue
///
/// A missing field yields "". A missing value or subvalue yields the
/// enclosing level reached so far.
pub fn lk_extract(record: &str, field: usize, value: usize, subvalue: usize) -> &str {
    if field == 0 {
        return record;
    }
    let Some(field_str) = record.split(AM).nth(field - 1) else {
        return "";
    };
    if value == 0 {
        return field_str;
    }
    let Some(value_str) = field_str.split(VM).nth(value - 1) else {
        return field_str;
    };
    if subvalue == 0 {
        return value_str;
    }
    value_str.split(SM).nth(subvalue - 1).unwrap_or(value_str)
}

/// Extract by dictionary name
///
/// `dictionaries` is an AM-delimited list of names; the position of
/// `dict_name` in it (case-insensitive) selects the field. Unknown names
/// yield "".
pub fn lk_extract_by_name<'a>(
    record: &'a str,
    dict_name: &str,
    dictionaries: &str,
    value: usize,
    subvalue: usize,
) -> &'a str {
    if dict_name.is_empty() || dictionaries.is_empty() {
        return "";
    }
    match dictionaries
        .split(AM)
        .position(|name| name.eq_ignore_ascii_case(dict_name))
    {
        Some(index) => lk_extract(record, index + 1, value, subvalue),
        None => "",
    }
}

// =============================================================================
// Substitution
// =============================================================================

/// Replace literal occurrences of `old` with `new`
///
/// With `occurrence` and `start` both 0 every occurrence is replaced.
/// Otherwise matching begins at character position `start` (0-based) and
/// at most `occurrence` matches are changed (0 = no limit). Text before
/// `start` is copied unchanged.
pub fn lk_change(s: &str, old: &str, new: &str, occurrence: usize, start: usize) -> String {
    if old.is_empty() {
        return s.to_owned();
    }
    if occurrence == 0 && start == 0 {
        return s.replace(old, new);
    }

    let split = s
        .char_indices()
        .nth(start)
        .map_or(s.len(), |(index, _)| index);
    let (head, tail) = s.split_at(split);

    let mut out = String::with_capacity(s.len());
    out.push_str(head);
    if occurrence == 0 {
        out.push_str(&tail.replace(old, new));
    } else {
        out.push_str(&tail.replacen(old, new, occurrence));
    }
    out
}

/// Replace a field, value or subvalue in place
///
/// Positions beyond the current structure are created by padding with
/// empty fields / values / subvalues. A value-level cursor never leaves its
/// field and a subvalue-level cursor never leaves its value.
pub fn lk_replace(record: &str, new_val: &str, field: usize, value: usize, subvalue: usize) -> String {
    if field == 0 {
        return new_val.to_owned();
    }

    let mut buf = record.to_owned();
    let mut span = 0..buf.len();
    for (mark, pos) in [(AM, field), (VM, value), (SM, subvalue)] {
        if pos == 0 {
            break;
        }
        span = descend(&mut buf, span, mark, pos);
    }

    buf.replace_range(span, new_val);
    buf
}

/// Narrow `span` to its `pos`-th `mark`-separated element
///
/// Missing elements are appended to the end of `span` as a run of marks;
/// the returned range is then the empty slot after the last one.
fn descend(buf: &mut String, span: Range<usize>, mark: char, pos: usize) -> Range<usize> {
    let mut element_start = span.start;
    let mut element = 1;

    for (offset, c) in buf[span.clone()].char_indices() {
        if c != mark {
            continue;
        }
        if element == pos {
            return element_start..span.start + offset;
        }
        element += 1;
        element_start = span.start + offset + c.len_utf8();
    }
    if element == pos {
        return element_start..span.end;
    }

    let padding: String = std::iter::repeat(mark).take(pos - element).collect();
    buf.insert_str(span.end, &padding);
    let slot = span.end + padding.len();
    slot..slot
}
