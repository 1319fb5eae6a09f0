//! HTML entity decoding for API text.
//!
//! Open Trivia DB returns every textual field HTML-encoded (`&quot;`,
//! `&#039;`, `&eacute;`, ...). [`decode`] turns those sequences back into
//! characters in a single pass, the way an HTML parser decodes character
//! references in text content:
//!
//! - every HTML5 named reference, plus the legacy names that may omit `;`
//! - decimal and hex references, with or without the trailing `;`
//! - `&#128;` to `&#159;` remapped to their Windows-1252 characters
//!
//! Anything else is left untouched.

mod entities;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

use entities::NAMED_REFERENCES;

/// Matches `&#123`, `&#x7B` and `&name`, each with an optional `;`.
static ENTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#([0-9]+);?|#[xX]([0-9a-fA-F]+);?|([^\t\n\x0C <&#;]{1,32};?))")
        .expect("Invalid entity regex")
});

/// Windows-1252 characters for `&#128;` to `&#159;`. Code points with no
/// Windows-1252 assignment keep their C1 control character.
const WINDOWS_1252_C1: [char; 32] = [
    '\u{20ac}', '\u{81}', '\u{201a}', '\u{192}', '\u{201e}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{2c6}', '\u{2030}', '\u{160}', '\u{2039}', '\u{152}', '\u{8d}', '\u{17d}', '\u{8f}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{2dc}', '\u{2122}', '\u{161}', '\u{203a}', '\u{153}', '\u{9d}', '\u{17e}', '\u{178}',
];

/// Decode HTML entities in `text`.
///
/// # Examples
///
/// ```
/// use trivia_dash::decode::decode;
///
/// assert_eq!(decode("Science &amp; Nature"), "Science & Nature");
/// assert_eq!(decode("Plain text"), "Plain text");
/// ```
pub fn decode(text: &str) -> String {
    decode_cow(text).into_owned()
}

/// Decode HTML entities, borrowing when there is nothing to replace.
pub fn decode_cow(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    ENTITY_REGEX.replace_all(text, |caps: &Captures| replace_entity(caps))
}

fn replace_entity(caps: &Captures) -> String {
    if let Some(dec) = caps.get(1) {
        return numeric(dec.as_str().parse::<u32>().ok()).to_string();
    }
    if let Some(hex) = caps.get(2) {
        return numeric(u32::from_str_radix(hex.as_str(), 16).ok()).to_string();
    }
    match caps.get(3) {
        Some(name) => named(name.as_str()),
        None => caps[0].to_string(),
    }
}

fn lookup(name: &str) -> Option<&'static str> {
    NAMED_REFERENCES
        .binary_search_by(|(key, _)| (*key).cmp(name))
        .ok()
        .map(|index| NAMED_REFERENCES[index].1)
}

/// Exact match first, then the longest legacy prefix (`&notit;` is `¬it;`).
fn named(name: &str) -> String {
    if let Some(value) = lookup(name) {
        return value.to_string();
    }
    (2..name.len())
        .rev()
        .filter(|&end| name.is_char_boundary(end))
        .find_map(|end| lookup(&name[..end]).map(|value| format!("{value}{}", &name[end..])))
        .unwrap_or_else(|| format!("&{name}"))
}

/// NUL, surrogates and out-of-range code points become U+FFFD.
fn numeric(code: Option<u32>) -> char {
    match code {
        Some(0) | None => char::REPLACEMENT_CHARACTER,
        Some(code @ 0x80..=0x9f) => WINDOWS_1252_C1[(code - 0x80) as usize],
        Some(code) => char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
    }
}
