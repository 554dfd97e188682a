//! Lookup-key normalization for ingredient phrases.
//!
//! Every phrase that touches an alias dictionary, at build time and at
//! query time, goes through [`normalize`] so the two sides always agree on
//! the key. The rules are deliberately small:
//!
//! - Unicode NFKC normalization, then locale-free lowercasing
//! - Letters, digits, `&`, and `-` are token characters; everything else
//!   is a delimiter
//! - Delimiter runs between tokens collapse to one ASCII space; delimiter
//!   runs at the edges (including a trailing period) vanish
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no locale dependence. Same input, same key, on any
//! machine. The function is idempotent: feeding a key back in returns it
//! unchanged.
//!
//! Digit sequences pass through verbatim, so color numbers stay distinct
//! ("red 40" never collides with "red 5"), and `&` survives so "FD&C"
//! keeps its shape.

use unicode_normalization::UnicodeNormalization;

/// Returns true for characters that survive normalization as part of a
/// token: Unicode letters and digits, plus `&` and `-`.
pub fn is_token_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '&' || ch == '-'
}

/// Collapses repeated whitespace, trims the edges, and normalizes newlines
/// to single spaces. Unlike [`normalize`] this keeps casing and punctuation,
/// so it is the right tool for display text rather than lookup keys.
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}

/// Canonicalizes a raw phrase into a dictionary lookup key.
///
/// Returns an empty string when the input contains no token characters.
pub fn normalize(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    // A delimiter run only becomes a space once the next token character
    // arrives, which drops leading and trailing runs for free.
    let mut pending_space = false;

    for ch in text.nfkc() {
        // Lowercasing can expand a single character into several.
        for lower in ch.to_lowercase() {
            if is_token_char(lower) {
                if pending_space {
                    key.push(' ');
                    pending_space = false;
                }
                key.push(lower);
            } else if !key.is_empty() {
                pending_space = true;
            }
        }
    }

    key
}
