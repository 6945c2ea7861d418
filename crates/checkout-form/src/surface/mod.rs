//! Form Surface
//!
//! The thin presentation boundary between the state machine and whatever
//! actually renders the form. The controller reads field values and emits
//! effects through this trait only, so the whole machine runs without a
//! live UI. A recording double lives in [`mock`].

pub mod mock;

pub use mock::MockSurface;

use card_kit::BrandIcon;

use crate::model::FieldId;

/// The fixed set of fields and effects the checkout form exposes.
///
/// Getters return the current raw value of a control. `email` and
/// `card_number` return `None` when the form variant omits those fields
/// entirely (update forms have no contact fields; some signup variants
/// have no card section).
pub trait FormSurface {
    fn name(&self) -> String;

    /// `None` when the form has no email field, which marks it as a
    /// recurring-payment update form rather than a signup form.
    fn email(&self) -> Option<String>;

    fn plan(&self) -> String;

    fn territory(&self) -> String;

    fn tax_id(&self) -> String;

    /// `None` when the form has no card section.
    fn card_number(&self) -> Option<String>;

    fn exp_month(&self) -> String;

    fn exp_year(&self) -> String;

    fn cvc(&self) -> String;

    /// Whether the caret sits at the end of the card number field.
    /// Reformatting is only applied there; mid-string edits are left
    /// untouched.
    fn caret_at_end(&self) -> bool;

    /// Replace the card number display with a reformatted value.
    fn set_card_number(&mut self, value: &str);

    /// Dim or restore one of the brand icons.
    fn set_icon_dimmed(&mut self, icon: BrandIcon, dimmed: bool);

    /// Show the tax-ID field prefilled with `Some(prefix)`, or hide and
    /// clear it with `None`.
    fn set_tax_field(&mut self, prefill: Option<&str>);

    /// Update the submit button's label.
    fn set_submit_label(&mut self, label: &str);

    /// Update the confirmation wording ("donation" / "sponsorship").
    fn set_confirm_noun(&mut self, noun: &str);

    /// Re-render the displayed plan prices for a territory. Rendering is
    /// entirely the surface's concern.
    fn refresh_prices(&mut self, territory: &str);

    /// Render an inline error message and mark the field's container.
    fn show_field_error(&mut self, field: FieldId, message: &str);

    /// Clear a field's error styling and message.
    fn clear_field_error(&mut self, field: FieldId);

    /// Create or replace the single page-level banner and scroll to it.
    fn show_page_error(&mut self, message: &str);

    /// Scroll the field's container into view.
    fn scroll_to_field(&mut self, field: FieldId);

    /// Write the opaque card token into the hidden token field.
    fn set_token(&mut self, token: &str);

    /// Swap the submit button for the loading indicator.
    fn show_loader(&mut self);

    /// Perform the native form submission. Terminal: the page navigates
    /// away and no further effects are observed.
    fn submit_form(&mut self);
}
