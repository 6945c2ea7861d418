//! Tokenize Client Trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw card details handed to the processor.
///
/// All fields are strings straight from the form; the processor does the
/// final authoritative validation.
#[derive(Clone, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub cvc: String,
    pub exp_month: String,
    pub exp_year: String,
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never let a full card number reach the logs.
        f.debug_struct("CardDetails")
            .field("number", &mask(&self.number))
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .finish_non_exhaustive()
    }
}

fn mask(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(char::is_ascii_digit).collect();
    if digits.len() <= 4 {
        return "****".into();
    }
    let last4: String = digits[digits.len() - 4..].iter().collect();
    format!("****{last4}")
}

/// An opaque single-use token returned by the processor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardToken {
    /// Token identifier, written into the form's hidden token field.
    pub id: String,
}

/// Tokenization collaborator (Strategy pattern)
///
/// Implement this for each payment processor. The form controller issues
/// at most one outstanding call at a time and the implementation must
/// resolve exactly once.
#[async_trait]
pub trait TokenizeClient: Send + Sync {
    /// Exchange card details for an opaque token.
    async fn create_token(&self, card: &CardDetails) -> Result<CardToken>;

    /// Client name, for logging.
    fn name(&self) -> &str;
}
