//! # card-kit
//!
//! Card brand detection, keystroke gating and display formatting for the
//! checkout form.
//!
//! The crate is deliberately DOM-free: it answers three questions the form
//! controller asks on every keystroke in the card number field:
//!
//! - which brand does the number-so-far imply? ([`CardBrand::detect`])
//! - should this keystroke be allowed at all? ([`accepts_keystroke`])
//! - what should the field display? ([`reformat`])
//!
//! It also carries the [`CardChecks`] collaborator trait used at submit
//! time (Luhn, expiry-in-future, CVC format), with a builtin
//! implementation in [`BuiltinCardChecks`].

pub mod brand;
pub mod checks;
pub mod format;

pub use brand::{BrandIcon, CardBrand};
pub use checks::{BuiltinCardChecks, CardChecks};
pub use format::{accepts_keystroke, reformat, Key};
