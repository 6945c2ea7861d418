//! # checkout-form
//!
//! Client-side checkout form core: field validation, card number
//! formatting, inline error coordination and the
//! submit → tokenize → resubmit state machine.
//!
//! ## Flow
//!
//! ```text
//! keystroke ──▶ card-kit gate ──▶ accepted / cancelled
//! input     ──▶ reformat + brand icons ──▶ surface
//! input     ──▶ validator (after first submit) ──▶ presenter show/hide
//! submit    ──▶ all validators ──┬─▶ first error: scroll + halt
//!                                ├─▶ no card data: native submit
//!                                └─▶ tokenize ──┬─▶ token: native submit
//!                                               └─▶ error: page banner
//! ```
//!
//! The controller never touches a real UI: everything goes through the
//! [`FormSurface`] trait, so the whole machine is unit-testable with the
//! [`surface::MockSurface`] double.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use card_kit::BuiltinCardChecks;
//! use checkout_form::{FormController, ReferenceData};
//! use checkout_tokenize::HttpTokenizeClient;
//!
//! let mut form = FormController::bind(
//!     surface, // your FormSurface adapter over the real page
//!     BuiltinCardChecks::new(),
//!     HttpTokenizeClient::new("pk_test_xxx"),
//!     ReferenceData::builtin(),
//! );
//!
//! // Wire DOM events to the handle_* methods, then:
//! let outcome = form.handle_submit().await;
//! ```

mod controller;
mod error;
mod model;
mod presenter;
mod refdata;
pub mod surface;
pub mod validate;

pub use controller::{FormController, SubmitOutcome};
pub use error::{FieldError, FieldErrorKind, PageError};
pub use model::{FieldId, FormKind, FormState, Plan};
pub use presenter::ErrorPresenter;
pub use refdata::{ReferenceData, TIERS};
pub use surface::FormSurface;
pub use validate::FieldResult;
