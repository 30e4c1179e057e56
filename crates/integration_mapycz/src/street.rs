//! Street name and number extraction for Czech addresses
//!
//! Mapy.cz reports a building as one string such as `Moravské náměstí 127/3`.
//! Numbers take the forms `3`, `127/3` (conscription/orientation pair) or
//! `12a`, optionally introduced by the conscription marker `č.p.` and a space.

use std::sync::LazyLock;

use regex::Regex;

const CONSCRIPTION_MARKER: &str = "č.p.";

/// Trailing street number
static STREET_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"(?i)(?:č\.p\.\s+)?(?P<street_number>[0-9]+(?:/[0-9]+)?[a-z]?)\s*\z")
        .expect("valid street number pattern")
});

/// Whole string: optional `ulice` marker, street name, street number
///
/// A name may start with digits (`28. října`) but a purely numeric token is
/// never a name. Names exclude `/` and `,` and end in a non-space character.
static STREET_NAME_AND_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(concat!(
        r"(?i)^(?:(?:\s?ulice\s*)?(?P<street_name>[0-9]*[^/,0-9]*[^/,0-9\s]))?\s*",
        r"(?P<number_part>(?:č\.p\.\s+)?(?P<street_number>[0-9]+(?:/[0-9]+)?[a-z]?))\s*\z",
    ))
    .expect("valid street name pattern")
});

/// Extract the street number from the end of `name`
///
/// A number glued directly onto `č.p.` (no space) is not taken from that
/// position; scanning resumes one character further on.
pub fn street_number(name: &str) -> Option<&str> {
    let mut start = 0;
    while let Some(caps) = STREET_NUMBER.captures_at(name, start) {
        let whole = caps.get(0)?;
        if !follows_conscription_marker(name, whole.start()) {
            return caps.name("street_number").map(|m| m.as_str());
        }
        start = next_char_boundary(name, whole.start());
    }
    None
}

/// Extract the street name from a `<name> <number>` string
///
/// Returns `None` unless the whole string is a (possibly empty) name
/// followed by a street number. A bare number matches with an empty name.
pub fn street_name(name: &str) -> Option<&str> {
    let caps = STREET_NAME_AND_NUMBER.captures(name)?;
    let number_part = caps.name("number_part")?;
    if follows_conscription_marker(name, number_part.start()) {
        return None;
    }
    Some(caps.name("street_name").map_or("", |m| m.as_str()))
}

/// Remove a leading `word` followed by one whitespace character
///
/// `strip_prefix_word("okres Brno-město", "okres")` gives `"Brno-město"`;
/// text without the prefix is returned unchanged.
pub fn strip_prefix_word<'a>(text: &'a str, word: &str) -> &'a str {
    let Some(rest) = text.strip_prefix(word) else {
        return text;
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => text,
    }
}

fn follows_conscription_marker(haystack: &str, pos: usize) -> bool {
    haystack[..pos].to_lowercase().ends_with(CONSCRIPTION_MARKER)
}

fn next_char_boundary(haystack: &str, pos: usize) -> usize {
    pos + haystack[pos..].chars().next().map_or(1, char::len_utf8)
}
