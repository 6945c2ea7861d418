//! Card Check Collaborator
//!
//! Submit-time checks for the card fields. The trait keeps the form
//! controller independent of any particular processor's validation rules;
//! [`BuiltinCardChecks`] is the stock implementation.

use chrono::{DateTime, Datelike, Utc};

use crate::brand::CardBrand;

/// Card validation collaborator (Strategy pattern)
///
/// Implement this to plug in a processor-specific validation library.
pub trait CardChecks: Send + Sync {
    /// Infer the brand from a (possibly partial) card number.
    fn card_type(&self, number: &str) -> CardBrand;

    /// Check a full card number (separators tolerated).
    fn validate_card_number(&self, number: &str) -> bool;

    /// Check that an expiry month/year pair lies in the future.
    ///
    /// A card is good through the end of its expiry month, so the current
    /// month counts as valid.
    fn validate_expiry(&self, month: u32, year: i32) -> bool;

    /// Check a card security code.
    fn validate_cvc(&self, cvc: &str) -> bool;
}

/// Stock card checks: prefix-based brand detection, Luhn plus length for
/// the number, 3-4 digits for the CVC.
pub struct BuiltinCardChecks {
    /// Fixed clock for deterministic expiry tests; `None` means wall clock.
    now: Option<DateTime<Utc>>,
}

impl Default for BuiltinCardChecks {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinCardChecks {
    pub const fn new() -> Self {
        Self { now: None }
    }

    /// Create with a fixed notion of "now".
    pub const fn with_now(now: DateTime<Utc>) -> Self {
        Self { now: Some(now) }
    }

    fn today(&self) -> (i32, u32) {
        let now = self.now.unwrap_or_else(Utc::now);
        (now.year(), now.month())
    }
}

impl CardChecks for BuiltinCardChecks {
    fn card_type(&self, number: &str) -> CardBrand {
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        CardBrand::detect(&digits)
    }

    fn validate_card_number(&self, number: &str) -> bool {
        let mut digits = Vec::with_capacity(19);
        for ch in number.chars() {
            if let Some(d) = ch.to_digit(10) {
                digits.push(d);
            } else if ch != ' ' && ch != '-' {
                return false;
            }
        }
        (12..=19).contains(&digits.len()) && luhn(&digits)
    }

    fn validate_expiry(&self, month: u32, year: i32) -> bool {
        if !(1..=12).contains(&month) {
            return false;
        }
        let (this_year, this_month) = self.today();
        year > this_year || (year == this_year && month >= this_month)
    }

    fn validate_cvc(&self, cvc: &str) -> bool {
        (3..=4).contains(&cvc.len()) && cvc.chars().all(|c| c.is_ascii_digit())
    }
}

/// Luhn checksum over a digit sequence.
fn luhn(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> BuiltinCardChecks {
        // 2026-08-15
        BuiltinCardChecks::with_now(Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_number_luhn_vectors() {
        let checks = BuiltinCardChecks::new();
        assert!(checks.validate_card_number("4111111111111111"));
        assert!(checks.validate_card_number("4111 1111 1111 1111"));
        assert!(checks.validate_card_number("5500-0000-0000-0004"));
        assert!(checks.validate_card_number("378282246310005"));
        // Bad checksum.
        assert!(!checks.validate_card_number("4111111111111112"));
        // Too short, too long, junk.
        assert!(!checks.validate_card_number("41111111111"));
        assert!(!checks.validate_card_number("41111111111111111111"));
        assert!(!checks.validate_card_number("4111 1111 1111 111x"));
        assert!(!checks.validate_card_number(""));
    }

    #[test]
    fn test_expiry_boundaries() {
        let checks = fixed();
        // Current month is still valid.
        assert!(checks.validate_expiry(8, 2026));
        assert!(checks.validate_expiry(9, 2026));
        assert!(checks.validate_expiry(1, 2027));
        // Last month is not.
        assert!(!checks.validate_expiry(7, 2026));
        assert!(!checks.validate_expiry(12, 2025));
        // Nonsense months.
        assert!(!checks.validate_expiry(0, 2030));
        assert!(!checks.validate_expiry(13, 2030));
    }

    #[test]
    fn test_cvc_format() {
        let checks = BuiltinCardChecks::new();
        assert!(checks.validate_cvc("123"));
        assert!(checks.validate_cvc("1234"));
        assert!(!checks.validate_cvc("12"));
        assert!(!checks.validate_cvc("12345"));
        assert!(!checks.validate_cvc("12a"));
        assert!(!checks.validate_cvc(""));
    }

    #[test]
    fn test_card_type_strips_separators() {
        let checks = BuiltinCardChecks::new();
        assert_eq!(checks.card_type("4111 1111"), CardBrand::Visa);
        assert_eq!(checks.card_type("3782 822463"), CardBrand::AmericanExpress);
        assert_eq!(checks.card_type(""), CardBrand::Unknown);
    }
}
