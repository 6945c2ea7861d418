//! # checkout-tokenize
//!
//! Tokenization collaborator for the checkout form: exchanges raw card
//! details for an opaque single-use token, so the card number never
//! reaches the form's own server.
//!
//! The [`TokenizeClient`] trait is the seam the form controller talks to.
//! [`HttpTokenizeClient`] speaks the processor's token endpoint over
//! reqwest; [`MockTokenizeClient`] is a programmable double for tests.
//!
//! The contract is one call, one resolution: the client resolves exactly
//! once per `create_token` call, with either a token or an error.

mod client;
mod error;
mod http;
mod mock;

pub use client::{CardDetails, CardToken, TokenizeClient};
pub use error::{Result, TokenizeError};
pub use http::HttpTokenizeClient;
pub use mock::{MockOutcome, MockTokenizeClient};
