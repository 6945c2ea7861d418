//! Form Error Types

use thiserror::Error;

/// What went wrong with a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Required value missing.
    Empty,
    /// Value present but fails a format or brand rule.
    Format,
}

/// A field-level validation failure with its user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: &'static str,
}

impl FieldError {
    pub const fn empty(message: &'static str) -> Self {
        Self { kind: FieldErrorKind::Empty, message }
    }

    pub const fn format(message: &'static str) -> Self {
        Self { kind: FieldErrorKind::Format, message }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

/// Page-level failure shown in the banner above the form. These never
/// clear field-level errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PageError {
    /// The processor rejected the payment details with its own message.
    #[error("{0}")]
    Processor(String),

    /// The tokenize call failed without a usable structured error.
    #[error(
        "Sorry, there was an unexpected error contacting the credit card \
         processor. Please try again later."
    )]
    Transport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_messages() {
        assert_eq!(PageError::Processor("card declined".into()).to_string(), "card declined");
        assert!(PageError::Transport.to_string().starts_with("Sorry, there was an unexpected"));
    }
}
