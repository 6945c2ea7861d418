//! Card Brand Model
//!
//! The three recognized networks plus an Unknown fallback, each with its
//! digit cap, display grouping and brand-icon visibility rules.

use serde::{Deserialize, Serialize};

/// A brand icon shown next to the card number field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BrandIcon {
    Visa,
    MasterCard,
    Amex,
}

/// Card network inferred from the number's leading digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardBrand {
    #[default]
    Unknown,
    Visa,
    MasterCard,
    AmericanExpress,
}

impl CardBrand {
    /// Detect the brand from a digit prefix.
    ///
    /// Total: every input, including the empty string, maps to exactly one
    /// variant. Non-digit characters in `digits` never match a prefix and
    /// fall through to `Unknown`.
    pub fn detect(digits: &str) -> Self {
        if digits.starts_with('4') {
            return Self::Visa;
        }
        if digits.starts_with("34") || digits.starts_with("37") {
            return Self::AmericanExpress;
        }
        if let Some(two) = leading_number(digits, 2) {
            if (51..=55).contains(&two) {
                return Self::MasterCard;
            }
        }
        if let Some(four) = leading_number(digits, 4) {
            // 2-series MasterCard range.
            if (2221..=2720).contains(&four) {
                return Self::MasterCard;
            }
        }
        Self::Unknown
    }

    /// Maximum number of digits a card of this brand can hold.
    pub const fn max_digits(self) -> usize {
        match self {
            Self::AmericanExpress => 15,
            Self::Unknown | Self::Visa | Self::MasterCard => 19,
        }
    }

    /// Digit-group sizes used when displaying the number.
    pub const fn groups(self) -> &'static [usize] {
        match self {
            Self::AmericanExpress => &[4, 6, 5],
            Self::Unknown | Self::Visa | Self::MasterCard => &[4, 4, 4, 4, 3],
        }
    }

    /// Icons rendered at full opacity for this brand.
    pub const fn icons_to_show(self) -> &'static [BrandIcon] {
        match self {
            Self::Unknown => &[BrandIcon::Amex, BrandIcon::MasterCard, BrandIcon::Visa],
            Self::Visa => &[BrandIcon::Visa],
            Self::MasterCard => &[BrandIcon::MasterCard],
            Self::AmericanExpress => &[BrandIcon::Amex],
        }
    }

    /// Icons dimmed for this brand.
    pub const fn icons_to_hide(self) -> &'static [BrandIcon] {
        match self {
            Self::Unknown => &[],
            Self::Visa => &[BrandIcon::Amex, BrandIcon::MasterCard],
            Self::MasterCard => &[BrandIcon::Amex, BrandIcon::Visa],
            Self::AmericanExpress => &[BrandIcon::MasterCard, BrandIcon::Visa],
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "American Express",
        }
    }
}

/// Parse the first `n` characters as a number, if they are all digits.
fn leading_number(s: &str, n: usize) -> Option<u32> {
    if s.len() < n || !s.is_char_boundary(n) {
        return None;
    }
    s[..n].parse().ok()
}
