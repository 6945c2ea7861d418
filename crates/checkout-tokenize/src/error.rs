//! Tokenization Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, TokenizeError>;

/// Tokenization failures, split by who rejected the card.
#[derive(Error, Debug)]
pub enum TokenizeError {
    /// The processor rejected the card details and supplied a message
    /// suitable for showing to the user.
    #[error("{message}")]
    Declined { message: String },

    /// The processor answered with a non-success status and no usable
    /// structured error.
    #[error("Tokenization failed with status {status}")]
    Transport { status: u16 },

    /// The request never completed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl TokenizeError {
    /// Whether the user can fix this by correcting their card details.
    pub const fn is_declined(&self) -> bool {
        matches!(self, Self::Declined { .. })
    }
}
