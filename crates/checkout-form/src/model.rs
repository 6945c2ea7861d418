//! Form Data Model
//!
//! The logical field identifiers, the per-form mutable state and the plan
//! tiers. One `FormState` exists per bound form; only the controller
//! mutates it.

use serde::{Deserialize, Serialize};

/// Logical form field, stable across the session.
///
/// `CardExpiry` is a single slot covering both the month and year selects,
/// which share one error container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldId {
    Name,
    Email,
    Territory,
    TaxId,
    CardNumber,
    CardExpiry,
    CardCvc,
}

impl FieldId {
    /// Stable token, used in logs and as the error-container key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Territory => "territory",
            Self::TaxId => "tax-id",
            Self::CardNumber => "card-number",
            Self::CardExpiry => "card-exp",
            Self::CardCvc => "card-cvc",
        }
    }
}

/// Whether the form signs up a new backer or updates an existing
/// recurring payment. Signup forms carry the name and email fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Signup,
    Update,
}

/// Mutable per-form state, owned by the controller.
#[derive(Clone, Copy, Debug, Default)]
pub struct FormState {
    /// True after the first submit attempt; gates live revalidation.
    pub submitted: bool,
    /// True while a tokenize call is outstanding; guards against duplicate
    /// submits. Stays true once native submission begins (terminal).
    pub submitting: bool,
}

impl FormState {
    pub const fn new() -> Self {
        Self { submitted: false, submitting: false }
    }
}

/// Backing plan tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plan {
    Donor,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Plan {
    /// Parse a plan select value. Only "donor" gets special treatment
    /// anywhere in the form, so unrecognized values fall back to a
    /// sponsorship tier.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "donor" => Self::Donor,
            "silver" => Self::Silver,
            "gold" => Self::Gold,
            "platinum" => Self::Platinum,
            _ => Self::Bronze,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }

    /// Donations skip the tax-ID requirement.
    pub const fn is_donor(self) -> bool {
        matches!(self, Self::Donor)
    }
}
