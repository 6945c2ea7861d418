//! Field Validators
//!
//! Pure predicates, one per logical field. Each returns either `Ok(())` or
//! the exact user-facing message; surfacing the message is the
//! controller's job, so everything here is testable without a form.

use card_kit::CardChecks;

use crate::error::FieldError;

pub type FieldResult = Result<(), FieldError>;

pub fn name(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::empty("Please specify your name."));
    }
    Ok(())
}

pub fn email(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::empty("Please specify your email address."));
    }
    if !has_at_with_parts(value) {
        return Err(FieldError::format("Please provide a valid email address"));
    }
    Ok(())
}

pub fn territory(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::empty("Please select your country."));
    }
    Ok(())
}

/// Tax-ID check for territories that require one. The value must be longer
/// than four characters and start with the territory's tax prefix,
/// case-insensitively.
pub fn tax_id(prefix: &str, value: &str) -> FieldResult {
    let lead: String = value.chars().take(2).collect::<String>().to_uppercase();
    if value.chars().count() <= 4 || lead != prefix {
        return Err(FieldError::format("Invalid VAT ID."));
    }
    Ok(())
}

pub fn card_number(checks: &dyn CardChecks, value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::empty("Card number must be present."));
    }
    if !checks.validate_card_number(value) {
        return Err(FieldError::format("Card number format is invalid."));
    }
    Ok(())
}

pub fn expiry(checks: &dyn CardChecks, month: &str, year: &str) -> FieldResult {
    if month.is_empty() {
        return Err(FieldError::empty("Card expiration month must be present."));
    }
    if year.is_empty() {
        return Err(FieldError::empty("Card expiration year must be present."));
    }
    let future = FieldError::format("Card expiration date must be in the future.");
    let (Ok(month), Ok(year)) = (month.parse::<u32>(), year.parse::<i32>()) else {
        return Err(future);
    };
    if !checks.validate_expiry(month, year) {
        return Err(future);
    }
    Ok(())
}

pub fn cvc(checks: &dyn CardChecks, value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::empty("Card security code must be present."));
    }
    if !checks.validate_cvc(value) {
        return Err(FieldError::format("Card security code format is invalid."));
    }
    Ok(())
}

/// Minimal email shape: an `@` with non-empty parts on both sides.
fn has_at_with_parts(value: &str) -> bool {
    value
        .char_indices()
        .any(|(i, ch)| ch == '@' && i > 0 && i + 1 < value.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_kit::BuiltinCardChecks;
    use chrono::{TimeZone, Utc};

    use crate::error::FieldErrorKind;

    fn checks() -> BuiltinCardChecks {
        BuiltinCardChecks::with_now(Utc.with_ymd_and_hms(2026, 8, 15, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_name_blank() {
        let err = name("").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::Empty);
        assert_eq!(err.message, "Please specify your name.");
        assert!(name("Tav").is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert_eq!(email("").unwrap_err().kind, FieldErrorKind::Empty);
        assert_eq!(email("nope").unwrap_err().kind, FieldErrorKind::Format);
        assert_eq!(email("@host").unwrap_err().kind, FieldErrorKind::Format);
        assert_eq!(email("user@").unwrap_err().kind, FieldErrorKind::Format);
        assert!(email("a@b").is_ok());
        assert!(email("user@example.com").is_ok());
        assert_eq!(email("bad").unwrap_err().message, "Please provide a valid email address");
    }

    #[test]
    fn test_territory_blank() {
        assert_eq!(territory("").unwrap_err().message, "Please select your country.");
        assert!(territory("DE").is_ok());
    }

    #[test]
    fn test_tax_id_rules() {
        // Too short, even with the right prefix.
        assert_eq!(tax_id("DE", "DE12").unwrap_err().message, "Invalid VAT ID.");
        // Wrong prefix.
        assert!(tax_id("DE", "FR123456").is_err());
        // Case-insensitive prefix match.
        assert!(tax_id("DE", "de123456").is_ok());
        assert!(tax_id("DE", "DE123456").is_ok());
        // Empty prefix never matches a populated value.
        assert!(tax_id("", "AB123456").is_err());
    }

    #[test]
    fn test_card_number() {
        let checks = checks();
        assert_eq!(
            card_number(&checks, "").unwrap_err().message,
            "Card number must be present."
        );
        assert_eq!(
            card_number(&checks, "4111111111111112").unwrap_err().message,
            "Card number format is invalid."
        );
        assert!(card_number(&checks, "4111 1111 1111 1111").is_ok());
    }

    #[test]
    fn test_expiry() {
        let checks = checks();
        assert_eq!(
            expiry(&checks, "", "2030").unwrap_err().message,
            "Card expiration month must be present."
        );
        assert_eq!(
            expiry(&checks, "12", "").unwrap_err().message,
            "Card expiration year must be present."
        );
        assert_eq!(
            expiry(&checks, "7", "2026").unwrap_err().message,
            "Card expiration date must be in the future."
        );
        assert_eq!(expiry(&checks, "xx", "yy").unwrap_err().kind, FieldErrorKind::Format);
        assert!(expiry(&checks, "8", "2026").is_ok());
        assert!(expiry(&checks, "01", "2030").is_ok());
    }

    #[test]
    fn test_cvc() {
        let checks = checks();
        assert_eq!(cvc(&checks, "").unwrap_err().message, "Card security code must be present.");
        assert_eq!(
            cvc(&checks, "12").unwrap_err().message,
            "Card security code format is invalid."
        );
        assert!(cvc(&checks, "123").is_ok());
    }
}
