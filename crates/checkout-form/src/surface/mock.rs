//! Mock Form Surface
//!
//! Recording double for controller and presenter tests: field values are
//! plain settable fields, every effect is captured for assertion.

use std::collections::BTreeMap;

use card_kit::BrandIcon;

use super::FormSurface;
use crate::model::FieldId;

/// In-memory form surface.
#[derive(Debug, Default)]
pub struct MockSurface {
    // Field values.
    pub name: String,
    pub email: Option<String>,
    pub plan: String,
    pub territory: String,
    pub tax_id: String,
    pub card_number: Option<String>,
    pub exp_month: String,
    pub exp_year: String,
    pub cvc: String,
    pub caret_at_end: bool,

    // Recorded effects.
    pub dimmed_icons: BTreeMap<BrandIcon, bool>,
    pub tax_field: Option<Option<String>>,
    pub submit_label: Option<String>,
    pub confirm_noun: Option<String>,
    pub refreshed_prices: Vec<String>,
    pub field_errors: BTreeMap<FieldId, String>,
    pub cleared_fields: Vec<FieldId>,
    pub page_errors: Vec<String>,
    pub scrolled_to: Vec<FieldId>,
    pub token: Option<String>,
    pub loader_shown: bool,
    pub submitted_natively: bool,
}

impl MockSurface {
    /// A signup form: contact fields and a card section, all blank.
    pub fn signup() -> Self {
        Self {
            email: Some(String::new()),
            card_number: Some(String::new()),
            caret_at_end: true,
            ..Self::default()
        }
    }

    /// A signup form without a card section.
    pub fn signup_without_card() -> Self {
        Self { email: Some(String::new()), ..Self::default() }
    }

    /// A recurring-payment update form: card section, no contact fields.
    pub fn update() -> Self {
        Self {
            card_number: Some(String::new()),
            caret_at_end: true,
            ..Self::default()
        }
    }

    /// Last visibility/prefill applied to the tax-ID field.
    pub fn tax_field_prefill(&self) -> Option<&str> {
        self.tax_field.as_ref().and_then(|v| v.as_deref())
    }
}

impl FormSurface for MockSurface {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn email(&self) -> Option<String> {
        self.email.clone()
    }

    fn plan(&self) -> String {
        self.plan.clone()
    }

    fn territory(&self) -> String {
        self.territory.clone()
    }

    fn tax_id(&self) -> String {
        self.tax_id.clone()
    }

    fn card_number(&self) -> Option<String> {
        self.card_number.clone()
    }

    fn exp_month(&self) -> String {
        self.exp_month.clone()
    }

    fn exp_year(&self) -> String {
        self.exp_year.clone()
    }

    fn cvc(&self) -> String {
        self.cvc.clone()
    }

    fn caret_at_end(&self) -> bool {
        self.caret_at_end
    }

    fn set_card_number(&mut self, value: &str) {
        self.card_number = Some(value.to_string());
    }

    fn set_icon_dimmed(&mut self, icon: BrandIcon, dimmed: bool) {
        self.dimmed_icons.insert(icon, dimmed);
    }

    fn set_tax_field(&mut self, prefill: Option<&str>) {
        // Mirror the real surface: showing prefills the value, hiding
        // clears it.
        self.tax_id = prefill.unwrap_or_default().to_string();
        self.tax_field = Some(prefill.map(str::to_string));
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = Some(label.to_string());
    }

    fn set_confirm_noun(&mut self, noun: &str) {
        self.confirm_noun = Some(noun.to_string());
    }

    fn refresh_prices(&mut self, territory: &str) {
        self.refreshed_prices.push(territory.to_string());
    }

    fn show_field_error(&mut self, field: FieldId, message: &str) {
        self.field_errors.insert(field, message.to_string());
    }

    fn clear_field_error(&mut self, field: FieldId) {
        self.field_errors.remove(&field);
        self.cleared_fields.push(field);
    }

    fn show_page_error(&mut self, message: &str) {
        self.page_errors.push(message.to_string());
    }

    fn scroll_to_field(&mut self, field: FieldId) {
        self.scrolled_to.push(field);
    }

    fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn show_loader(&mut self) {
        self.loader_shown = true;
    }

    fn submit_form(&mut self) {
        self.submitted_natively = true;
    }
}
