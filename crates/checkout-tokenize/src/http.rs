//! HTTP Tokenize Client
//!
//! Speaks the processor's token endpoint directly: a form-encoded POST
//! authenticated with the publishable key, answering either a token id or
//! a structured error object.

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::{CardDetails, CardToken, TokenizeClient};
use crate::error::{Result, TokenizeError};

const DEFAULT_ENDPOINT: &str = "https://api.stripe.com/v1/tokens";

/// Tokenize client backed by the processor's HTTP API.
pub struct HttpTokenizeClient {
    http: reqwest::Client,
    endpoint: String,
    publishable_key: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpTokenizeClient {
    /// Create a client for the default token endpoint.
    pub fn new(publishable_key: &str) -> Self {
        Self::with_endpoint(publishable_key, DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom endpoint (test servers).
    pub fn with_endpoint(publishable_key: &str, endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            publishable_key: publishable_key.to_string(),
        }
    }
}

#[async_trait]
impl TokenizeClient for HttpTokenizeClient {
    async fn create_token(&self, card: &CardDetails) -> Result<CardToken> {
        let params = [
            ("card[number]", card.number.as_str()),
            ("card[cvc]", card.cvc.as_str()),
            ("card[exp_month]", card.exp_month.as_str()),
            ("card[exp_year]", card.exp_year.as_str()),
        ];

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.publishable_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let token: TokenResponse = serde_json::from_str(&body)
                .map_err(|_| TokenizeError::Transport { status: status.as_u16() })?;
            tracing::info!(token = %token.id, "Tokenized card");
            return Ok(CardToken { id: token.id });
        }

        // The processor signals card problems with a structured error body.
        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&body) {
            tracing::warn!(status = status.as_u16(), "Card declined by processor");
            return Err(TokenizeError::Declined { message: err.error.message });
        }

        tracing::warn!(status = status.as_u16(), "Unexpected processor response");
        Err(TokenizeError::Transport { status: status.as_u16() })
    }

    fn name(&self) -> &str {
        "HttpTokenize"
    }
}
