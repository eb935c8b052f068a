//! Preeti legacy-font transliteration.
//!
//! Older Nepali ledgers were typeset in Preeti, an 8-bit font that stores
//! Devanagari glyphs at ASCII codepoints. Extracted text from those PDFs
//! arrives as gibberish like `g]kfn` and must be remapped to real
//! Devanagari (`नेपाल`) before any header matching can work.
//!
//! Conversion is a per-character table lookup followed by composition
//! passes that fix glyph ordering: Preeti types the i-matra and reph
//! visually (before/after the syllable), Unicode stores them logically.
//!
//! Not every fragment is Preeti. [`maybe_preeti_to_unicode`] applies a
//! guard chain so real Devanagari, member IDs, and amounts pass through
//! untouched.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;

/// Glyph table for the standard Preeti layout.
///
/// Keys are the ASCII/Latin-1 codepoints the font repurposes; values are
/// the Devanagari text each glyph stands for. Characters absent from the
/// table (spaces, most punctuation) pass through unchanged.
static PREETI_MAP: phf::Map<char, &'static str> = phf_map! {
    'a' => "ब", 'b' => "द", 'c' => "अ", 'd' => "म", 'e' => "भ",
    'f' => "ा", 'g' => "न", 'h' => "ज", 'i' => "ष्", 'j' => "व",
    'k' => "प", 'l' => "ि", 'm' => "फ", 'n' => "ल", 'o' => "य",
    'p' => "उ", 'q' => "त्र", 'r' => "च", 's' => "क", 't' => "त",
    'u' => "ग", 'v' => "ख", 'w' => "ध", 'x' => "ह", 'y' => "थ",
    'z' => "श",
    'A' => "ब्", 'B' => "ध", 'C' => "ऋ", 'D' => "म्", 'E' => "भ्",
    'F' => "ँ", 'G' => "न्", 'H' => "ज्", 'I' => "क्ष्", 'J' => "व्",
    'K' => "प्", 'L' => "ी", 'M' => "ः", 'N' => "ल्", 'O' => "इ",
    'P' => "ए", 'Q' => "त्त", 'R' => "च्", 'S' => "क्", 'T' => "त्",
    'U' => "ग्", 'V' => "ख्", 'W' => "ध्", 'X' => "ह्", 'Y' => "थ्",
    'Z' => "श्",
    '0' => "ण्", '1' => "ज्ञ", '2' => "द्द", '3' => "घ", '4' => "द्ध",
    '5' => "छ", '6' => "ट", '7' => "ठ", '8' => "ड", '9' => "ढ",
    '!' => "१", '@' => "२", '#' => "३", '$' => "४", '%' => "५",
    '^' => "६", '&' => "७", '*' => "८", '(' => "९", ')' => "०",
    '~' => "ञ्", '`' => "ञ", '-' => "(", '_' => ")", '+' => "ं",
    '[' => "ृ", '{' => "र्", ']' => "े", '}' => "ै", '\\' => "्",
    '|' => "्र", ';' => "स", ':' => "स्", '\'' => "ु", '"' => "ू",
    '<' => "?", '.' => "।", '>' => "श्र", '/' => "र", '?' => "रु",
    '=' => ".",
    'ˆ' => "फ्", 'å' => "द्व", '÷' => "/",
};

/// Literal glyph-pair compositions, applied in order.
///
/// The matra pairs must run before the standalone vowel pairs: `cf]`
/// maps to अ+ा+े, which becomes अ+ो and only then ओ.
const COMPOSITIONS: &[(&str, &str)] = &[
    ("््", "्"),
    ("ाे", "ो"),
    ("ेा", "ो"),
    ("ाै", "ौ"),
    ("ैा", "ौ"),
    ("अो", "ओ"),
    ("अौ", "औ"),
    ("अा", "आ"),
    ("एे", "ऐ"),
    ("एै", "ऐ"),
];

lazy_static! {
    /// i-matra typed before its consonant cluster; Unicode wants it after
    static ref RE_I_MATRA: Regex =
        Regex::new(r"ि((?:[क-ह]्)*[क-ह])").unwrap();
    /// reph typed after its syllable; Unicode wants र् before the cluster
    static ref RE_REPH: Regex =
        Regex::new(r"((?:[क-ह]्)*[क-ह](?:[ािीुूृेैोौ]|[ंँः])*)र्").unwrap();
}

/// Digit share above which a fragment is treated as an ID or amount
/// rather than encoded text.
const DIGIT_GUARD_RATIO: f32 = 0.6;

/// Check whether the text contains any Devanagari codepoint.
pub fn is_devanagari(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

/// Convert Preeti-encoded text to Unicode Devanagari unconditionally.
///
/// Use [`maybe_preeti_to_unicode`] when the input may already be Unicode
/// or may be a numeric value that only looks like Preeti.
///
/// # Examples
///
/// ```
/// use ledgerlift::text::legacy_to_unicode;
///
/// assert_eq!(legacy_to_unicode("g]kfn"), "नेपाल");
/// assert_eq!(legacy_to_unicode("ldlt"), "मिति");
/// ```
pub fn legacy_to_unicode(text: &str) -> String {
    let mut mapped = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        match PREETI_MAP.get(&ch) {
            Some(replacement) => mapped.push_str(replacement),
            None => mapped.push(ch),
        }
    }
    compose(mapped)
}

/// Reorder and merge glyphs into canonical Unicode sequences.
fn compose(mut text: String) -> String {
    for (from, to) in COMPOSITIONS {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }
    let text = RE_I_MATRA.replace_all(&text, "${1}ि");
    let text = RE_REPH.replace_all(&text, "र्${1}");
    // O{ types ई as इ plus a top stroke; the stroke maps to a reph that
    // has no consonant to attach to
    text.replace("इर्", "ई")
}

/// Convert a fragment only when it plausibly holds Preeti text.
///
/// Guard chain, first match wins:
/// 1. already contains Devanagari: return unchanged
/// 2. only ASCII digits and value punctuation (amounts, dates, IDs):
///    return unchanged
/// 3. digit share of 60% or more (member IDs with separators): return
///    unchanged
/// 4. convert; keep the result only if it produced Devanagari, otherwise
///    return the original
///
/// # Examples
///
/// ```
/// use ledgerlift::text::maybe_preeti_to_unicode;
///
/// assert_eq!(maybe_preeti_to_unicode("g]kfn"), "नेपाल");
/// assert_eq!(maybe_preeti_to_unicode("नेपाल"), "नेपाल");
/// assert_eq!(maybe_preeti_to_unicode("550022050100002/13-14"), "550022050100002/13-14");
/// ```
pub fn maybe_preeti_to_unicode(text: &str) -> String {
    if is_devanagari(text) {
        return text.to_string();
    }
    if is_plain_ascii_value(text) || digit_ratio(text) >= DIGIT_GUARD_RATIO {
        return text.to_string();
    }
    let converted = legacy_to_unicode(text);
    if is_devanagari(&converted) {
        converted
    } else {
        text.to_string()
    }
}

/// True for strings made only of digits and the punctuation that appears
/// in amounts, dates, and member IDs.
fn is_plain_ascii_value(text: &str) -> bool {
    !text.trim().is_empty()
        && text.chars().all(|c| {
            c.is_ascii_digit()
                || c.is_ascii_whitespace()
                || matches!(c, '.' | ',' | '/' | '-' | ':' | '(' | ')' | '%')
        })
}

/// Share of ASCII digits among non-whitespace characters.
fn digit_ratio(text: &str) -> f32 {
    let total = text.chars().filter(|c| !c.is_whitespace()).count();
    if total == 0 {
        return 0.0;
    }
    let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
    digits as f32 / total as f32
}
