//! Delimiter Grammar
//!
//! Reserved marks used at each nesting level of the wire format.
//!
//! ```text
//! payload   := CUSTOMVARS US OPTIONS US INPUTDATA
//! INPUTDATA := group ( FS group )*          e.g. ids FS records FS originals
//! group     := entry ( RS entry )*          one entry per record
//! entry     := field ( AM field )*
//! field     := value ( VM value )*
//! value     := subvalue ( SM subvalue )*
//! ```
//!
//! There is no escaping: a payload containing any of these characters
//! corrupts framing.

// =============================================================================
// Outer framing (ASCII control characters)
// =============================================================================

/// Unit Separator: CUSTOMVARS / OPTIONS / INPUTDATA
pub const US: char = '\u{1F}';

/// File Separator: sub-groups inside INPUTDATA and response blocks
pub const FS: char = '\u{1C}';

/// Record Separator: repeated record entries within a group
pub const RS: char = '\u{1E}';

/// Device Control 4: subroutine arguments
pub const DC4: char = '\u{14}';

// =============================================================================
// Multivalue marks (high bytes)
// =============================================================================

/// Item Mark
pub const IM: char = '\u{FF}';

/// Attribute Mark: fields within one record
pub const AM: char = '\u{FE}';

/// Value Mark: multivalues within a field
pub const VM: char = '\u{FD}';

/// Subvalue Mark: subvalues within a value
pub const SM: char = '\u{FC}';

/// Text Mark
pub const TM: char = '\u{FB}';

/// Every reserved character, outermost first
pub const RESERVED: [char; 9] = [US, FS, RS, DC4, IM, AM, VM, SM, TM];

/// Render flags as the wire expects them
pub fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Returns true if `s` contains any reserved character
pub fn has_reserved(s: &str) -> bool {
    s.chars().any(|c| RESERVED.contains(&c))
}

// =============================================================================
// Visible notation
// =============================================================================

const VISIBLE: [(char, &str); 9] = [
    (AM, "^"),
    (VM, "]"),
    (SM, "\\"),
    (TM, "{"),
    (IM, "<IM>"),
    (US, "<US>"),
    (FS, "<FS>"),
    (RS, "<RS>"),
    (DC4, "<DC4>"),
];

/// Replace every reserved character with its printable form
///
/// AM `^`, VM `]`, SM `\`, TM `{`, the rest as `<NAME>`.
pub fn to_visible(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match VISIBLE.iter().find(|(mark, _)| *mark == c) {
            Some((_, shown)) => out.push_str(shown),
            None => out.push(c),
        }
    }
    out
}

/// Inverse of [`to_visible`]
pub fn from_visible(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    'outer: while let Some(c) = rest.chars().next() {
        for (mark, shown) in VISIBLE.iter() {
            if let Some(tail) = rest.strip_prefix(shown) {
                out.push(*mark);
                rest = tail;
                continue 'outer;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}
