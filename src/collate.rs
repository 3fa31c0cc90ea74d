//! Spanish collation.
//!
//! A three-level comparison in the style of the Unicode Collation Algorithm,
//! tailored for Spanish:
//!
//! 1. **Primary**: base letters after NFD decomposition, case-folded, accents
//!    ignored. `ñ` is a letter of its own between `n` and `o`. Whitespace
//!    sorts before punctuation/symbols, which sort before digits, which sort
//!    before letters.
//! 2. **Secondary**: accents, left to right; unaccented before accented.
//!    Marks rank in DUCET order (acute, grave, breve, circumflex, caron, ring,
//!    diaeresis, double acute, tilde, dot, cedilla, ogonek, macron, stroke).
//! 3. **Tertiary**: case; lowercase before uppercase.
//!
//! Latin letters without a canonical decomposition are folded onto their base
//! letters: `ł`, `ø`, `đ`, `ħ`, `ŧ` sort as `l`, `o`, `d`, `h`, `t` with a
//! stroke mark, and `æ`, `œ`, `ß` expand to `ae`, `oe`, `ss` with a tertiary
//! difference.
//!
//! Strings that tie on all three levels compare equal, so canonically
//! equivalent spellings (`"á"` precomposed vs `"a\u{301}"`) are the same key.
//!
//! ```rust
//! use std::cmp::Ordering;
//! use catalogo::collate;
//!
//! assert_eq!(collate("Nuno", "Núñez"), Ordering::Less);
//! assert_eq!(collate("Álvarez", "Azuela"), Ordering::Less);
//! ```

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const COMBINING_TILDE: char = '\u{0303}';

// Secondary weight of the stroke in `ł`, `ø`, `đ`; ranks after every mark in
// `mark_weight`'s table.
const STROKE: u32 = 14;

// Primary weight classes, most significant byte of a primary weight.
const CLASS_SPACE: u32 = 1;
const CLASS_SYMBOL: u32 = 2;
const CLASS_DIGIT: u32 = 3;
const CLASS_LATIN: u32 = 4;
const CLASS_OTHER_LETTER: u32 = 5;

/// Compare two strings under Spanish collation rules.
pub fn collate(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Precomputed sort key; comparing keys is equivalent to [`collate`].
///
/// Build once per string when the same value takes part in many comparisons.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<u32>,
    secondary: Vec<u32>,
    tertiary: Vec<u8>,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let mut key = CollationKey {
            primary: Vec::with_capacity(text.len()),
            secondary: Vec::with_capacity(text.len()),
            tertiary: Vec::with_capacity(text.len()),
        };
        // Whether the last base character was an `n` that has not yet
        // absorbed a tilde.
        let mut open_n = false;

        for ch in text.nfd() {
            if is_combining_mark(ch) {
                if ch == COMBINING_TILDE && open_n {
                    if let Some(last) = key.primary.last_mut() {
                        *last += 1;
                    }
                    open_n = false;
                    continue;
                }
                open_n = false;
                key.secondary.push(mark_weight(ch));
                continue;
            }

            let upper = ch.is_uppercase();
            for lower in ch.to_lowercase() {
                if let Some((bases, mark, variant)) = expansion(lower) {
                    for base in bases.chars() {
                        key.primary.push(primary_weight(base));
                        key.secondary.push(0);
                        key.tertiary.push(case_weight(upper, variant));
                    }
                    if let Some(mark) = mark {
                        key.secondary.push(mark);
                    }
                    open_n = false;
                    continue;
                }
                key.primary.push(primary_weight(lower));
                key.secondary.push(0);
                key.tertiary.push(case_weight(upper, false));
                open_n = lower == 'n';
            }
        }

        key
    }
}

fn primary_weight(ch: char) -> u32 {
    let (class, value) = if ch.is_whitespace() {
        (CLASS_SPACE, 0)
    } else if ch.is_ascii_lowercase() {
        // Even slots for a..z; the odd slot after `n` is `ñ`.
        (CLASS_LATIN, (ch as u32 - 'a' as u32) * 2)
    } else if ch.is_alphabetic() {
        (CLASS_OTHER_LETTER, ch as u32)
    } else if ch.is_numeric() {
        (CLASS_DIGIT, ch as u32)
    } else {
        (CLASS_SYMBOL, ch as u32)
    };
    (class << 24) | value
}

/// Secondary weight of a combining mark. Common Latin marks follow DUCET
/// order; anything else ranks after them by code point.
fn mark_weight(mark: char) -> u32 {
    match mark {
        '\u{0301}' => 1,  // acute
        '\u{0300}' => 2,  // grave
        '\u{0306}' => 3,  // breve
        '\u{0302}' => 4,  // circumflex
        '\u{030C}' => 5,  // caron
        '\u{030A}' => 6,  // ring above
        '\u{0308}' => 7,  // diaeresis
        '\u{030B}' => 8,  // double acute
        '\u{0303}' => 9,  // tilde
        '\u{0307}' => 10, // dot above
        '\u{0327}' => 11, // cedilla
        '\u{0328}' => 12, // ogonek
        '\u{0304}' => 13, // macron
        other => 0x100 + other as u32,
    }
}

/// Lowercase Latin letters that NFD leaves whole but that sort with plain
/// letters: base letters, an optional secondary mark, and whether the letter
/// is a tertiary variant of its expansion.
fn expansion(ch: char) -> Option<(&'static str, Option<u32>, bool)> {
    let mapped = match ch {
        'ł' => ("l", Some(STROKE), false),
        'ø' => ("o", Some(STROKE), false),
        'đ' => ("d", Some(STROKE), false),
        'ħ' => ("h", Some(STROKE), false),
        'ŧ' => ("t", Some(STROKE), false),
        'æ' => ("ae", None, true),
        'œ' => ("oe", None, true),
        'ß' => ("ss", None, true),
        _ => return None,
    };
    Some(mapped)
}

fn case_weight(upper: bool, variant: bool) -> u8 {
    u8::from(upper) * 2 + u8::from(variant)
}
