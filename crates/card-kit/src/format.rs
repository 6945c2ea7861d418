//! Card Number Input Gating and Display Formatting
//!
//! Mirrors the two halves of the card field's input handling: a keystroke
//! gate that decides whether a pending character may be entered at all,
//! and a reformatter that regroups the digits for display.

use crate::brand::CardBrand;

/// A keystroke as seen by the card number field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// A control character or a modifier combination (ctrl/meta chords,
    /// arrows, backspace and friends).
    Control,
}

/// Decide whether a keystroke on the card number field is accepted.
///
/// `current_display` is the field's value before the keystroke, separators
/// included. `has_selection` is true when the field has selected text; a
/// digit typed over a selection replaces text rather than appending, so the
/// length cap does not apply to it.
pub fn accepts_keystroke(current_display: &str, key: Key, has_selection: bool) -> bool {
    let ch = match key {
        Key::Control => return false,
        Key::Char(ch) => ch,
    };
    if !ch.is_ascii_digit() {
        return false;
    }
    if has_selection {
        return true;
    }
    // Cap the length based on the brand the resulting number would imply.
    let digits = digit_count(current_display) + 1;
    let mut candidate = String::with_capacity(current_display.len() + 1);
    candidate.extend(current_display.chars().filter(char::is_ascii_digit));
    candidate.push(ch);
    digits <= CardBrand::detect(&candidate).max_digits()
}

/// Regroup a raw card number for display.
///
/// Strips every non-digit, truncates to the detected brand's digit cap and
/// rebuilds the groups from scratch, so the function is idempotent and
/// never reorders or adds digits. The caller only applies the result when
/// the caret sits at the end of the field.
pub fn reformat(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let brand = CardBrand::detect(&digits);
    let digits = &digits[..digits.len().min(brand.max_digits())];

    let mut out = String::with_capacity(digits.len() + 4);
    let mut rest = digits;
    for &size in brand.groups() {
        if rest.is_empty() {
            break;
        }
        let take = size.min(rest.len());
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&rest[..take]);
        rest = &rest[take..];
    }
    out
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}
