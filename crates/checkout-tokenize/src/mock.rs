//! Mock Tokenize Client
//!
//! Programmable double for controller tests. Records how many times it was
//! called so tests can assert the single-outstanding-call invariant.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::client::{CardDetails, CardToken, TokenizeClient};
use crate::error::{Result, TokenizeError};

/// What the mock should answer with.
#[derive(Clone, Debug)]
pub enum MockOutcome {
    /// Succeed with this token id.
    Token(String),
    /// Fail with a structured processor message.
    Declined(String),
    /// Fail with a bare non-success status.
    Transport(u16),
}

/// Mock tokenize client with a fixed outcome.
pub struct MockTokenizeClient {
    outcome: MockOutcome,
    calls: AtomicUsize,
}

impl Default for MockTokenizeClient {
    fn default() -> Self {
        Self::succeeding("tok_test")
    }
}

impl MockTokenizeClient {
    pub fn new(outcome: MockOutcome) -> Self {
        Self { outcome, calls: AtomicUsize::new(0) }
    }

    /// Mock that always returns `token_id`.
    pub fn succeeding(token_id: &str) -> Self {
        Self::new(MockOutcome::Token(token_id.to_string()))
    }

    /// Mock that always declines with `message`.
    pub fn declining(message: &str) -> Self {
        Self::new(MockOutcome::Declined(message.to_string()))
    }

    /// Mock that always fails with a bare status.
    pub fn failing(status: u16) -> Self {
        Self::new(MockOutcome::Transport(status))
    }

    /// Number of `create_token` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenizeClient for MockTokenizeClient {
    async fn create_token(&self, _card: &CardDetails) -> Result<CardToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Token(id) => Ok(CardToken { id: id.clone() }),
            MockOutcome::Declined(message) => {
                Err(TokenizeError::Declined { message: message.clone() })
            }
            MockOutcome::Transport(status) => Err(TokenizeError::Transport { status: *status }),
        }
    }

    fn name(&self) -> &str {
        "MockTokenize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardDetails {
        CardDetails {
            number: "4111111111111111".into(),
            cvc: "123".into(),
            exp_month: "12".into(),
            exp_year: "2030".into(),
        }
    }

    #[tokio::test]
    async fn test_mock_success_and_call_count() {
        let mock = MockTokenizeClient::succeeding("tok_abc");
        let token = mock.create_token(&card()).await.unwrap();
        assert_eq!(token.id, "tok_abc");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_declined() {
        let mock = MockTokenizeClient::declining("card declined");
        let err = mock.create_token(&card()).await.unwrap_err();
        assert!(err.is_declined());
        assert_eq!(err.to_string(), "card declined");
    }

    #[tokio::test]
    async fn test_mock_transport() {
        let mock = MockTokenizeClient::failing(500);
        let err = mock.create_token(&card()).await.unwrap_err();
        assert!(!err.is_declined());
    }
}
