//! Form Controller
//!
//! The submission state machine: `Idle → Validating → (Invalid |
//! Tokenizing) → (Idle-with-errors | Submitted)`. One controller owns one
//! form's state and mediates every event between the surface, the
//! validators, the card checks and the tokenize collaborator.

use card_kit::{accepts_keystroke, reformat, CardChecks, Key};
use checkout_tokenize::{CardDetails, TokenizeClient, TokenizeError};

use crate::error::PageError;
use crate::model::{FieldId, FormKind, FormState, Plan};
use crate::presenter::ErrorPresenter;
use crate::refdata::ReferenceData;
use crate::surface::FormSurface;
use crate::validate::{self, FieldResult};

const LABEL_DONATION: &str = "Confirm Monthly Donation";
const LABEL_SPONSORSHIP: &str = "Confirm Monthly Sponsorship";

/// How a submit attempt resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submit was already in flight; nothing ran.
    Ignored,
    /// Field validation failed; focus went to the first errored field.
    Blocked(FieldId),
    /// The tokenize collaborator rejected the card; the page banner shows
    /// why and the form stays editable.
    Rejected(PageError),
    /// Native form submission began. Terminal.
    Submitted,
}

/// Orchestrates one checkout form.
pub struct FormController<S, C, T> {
    surface: S,
    checks: C,
    tokenize: T,
    refdata: ReferenceData,
    kind: FormKind,
    state: FormState,
    presenter: ErrorPresenter,
}

impl<S, C, T> FormController<S, C, T>
where
    S: FormSurface,
    C: CardChecks,
    T: TokenizeClient,
{
    /// Bind a controller to a form. The form kind is derived from the
    /// surface: a form with an email field is a signup form.
    pub fn bind(surface: S, checks: C, tokenize: T, refdata: ReferenceData) -> Self {
        let kind = if surface.email().is_some() { FormKind::Signup } else { FormKind::Update };
        Self {
            surface,
            checks,
            tokenize,
            refdata,
            kind,
            state: FormState::new(),
            presenter: ErrorPresenter::new(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub const fn state(&self) -> &FormState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access, for adapters feeding in new field values.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn tokenize_client(&self) -> &T {
        &self.tokenize
    }

    // ---------------------------------------------------------------
    // Live events
    // ---------------------------------------------------------------

    /// Name field `input`. Signup forms only; no-op before the first
    /// submit attempt.
    pub fn handle_name_input(&mut self) {
        if self.kind != FormKind::Signup || !self.state.submitted {
            return;
        }
        let result = validate::name(&self.surface.name());
        self.report(FieldId::Name, result);
    }

    /// Email field `input`.
    pub fn handle_email_input(&mut self) {
        if self.kind != FormKind::Signup || !self.state.submitted {
            return;
        }
        let result = validate::email(&self.surface.email().unwrap_or_default());
        self.report(FieldId::Email, result);
    }

    /// Plan select `change`: retune the tax-ID field and the submit
    /// wording.
    pub fn handle_plan_change(&mut self) {
        self.sync_tax_field();
        if Plan::parse(&self.surface.plan()).is_donor() {
            self.surface.set_submit_label(LABEL_DONATION);
            self.surface.set_confirm_noun("donation");
        } else {
            self.surface.set_submit_label(LABEL_SPONSORSHIP);
            self.surface.set_confirm_noun("sponsorship");
        }
    }

    /// Territory select `change`: retune the tax-ID field, let the
    /// surface re-render prices, and live revalidate the selection.
    pub fn handle_territory_change(&mut self) {
        self.sync_tax_field();
        let territory = self.surface.territory();
        self.surface.refresh_prices(&territory);
        if self.state.submitted {
            let result = validate::territory(&territory);
            self.report(FieldId::Territory, result);
        }
    }

    /// Tax-ID field `input`/`keypress`. Before the first submit attempt
    /// this clears the field's error state unconditionally.
    pub fn handle_tax_id_input(&mut self) {
        if !self.state.submitted {
            self.presenter.hide(&mut self.surface, FieldId::TaxId);
            return;
        }
        let prefix = self.current_tax_prefix().unwrap_or_default();
        let result = validate::tax_id(&prefix, &self.surface.tax_id());
        self.report(FieldId::TaxId, result);
    }

    /// Card number `keypress`: decide whether the keystroke is accepted.
    pub fn handle_card_keypress(&self, key: Key, has_selection: bool) -> bool {
        let current = self.surface.card_number().unwrap_or_default();
        accepts_keystroke(&current, key, has_selection)
    }

    /// CVC `keypress`: digits only; control keys pass through to the
    /// browser.
    pub fn handle_cvc_keypress(&self, key: Key) -> bool {
        match key {
            Key::Control => true,
            Key::Char(ch) => ch.is_ascii_digit(),
        }
    }

    /// Card number `input`: swap brand icons, reformat the display when
    /// the caret is at the end, live revalidate.
    pub fn handle_card_input(&mut self) {
        let Some(mut number) = self.surface.card_number() else {
            return;
        };
        let brand = self.checks.card_type(&number);
        for &icon in brand.icons_to_show() {
            self.surface.set_icon_dimmed(icon, false);
        }
        for &icon in brand.icons_to_hide() {
            self.surface.set_icon_dimmed(icon, true);
        }
        if self.surface.caret_at_end() {
            let formatted = reformat(&number);
            if formatted != number {
                self.surface.set_card_number(&formatted);
                number = formatted;
            }
        }
        if self.state.submitted {
            let result = validate::card_number(&self.checks, &number);
            self.report(FieldId::CardNumber, result);
        }
    }

    /// Expiry month/year `change`.
    pub fn handle_expiry_change(&mut self) {
        if !self.state.submitted {
            return;
        }
        let result =
            validate::expiry(&self.checks, &self.surface.exp_month(), &self.surface.exp_year());
        self.report(FieldId::CardExpiry, result);
    }

    /// CVC `input`.
    pub fn handle_cvc_input(&mut self) {
        if !self.state.submitted {
            return;
        }
        let result = validate::cvc(&self.checks, &self.surface.cvc());
        self.report(FieldId::CardCvc, result);
    }

    // ---------------------------------------------------------------
    // Submit
    // ---------------------------------------------------------------

    /// Form `submit`: run every applicable validator in a fixed order,
    /// then either halt on the first error, tokenize the card, or submit
    /// natively.
    pub async fn handle_submit(&mut self) -> SubmitOutcome {
        if self.state.submitting {
            tracing::debug!("Ignoring submit while one is in flight");
            return SubmitOutcome::Ignored;
        }
        self.state.submitted = true;
        // Set before the suspension point below so no interleaved submit
        // can start a second tokenize call.
        self.state.submitting = true;
        self.presenter.reset_pass();

        let process_card = self.run_validators();

        if let Some(first) = self.presenter.first_error() {
            self.surface.scroll_to_field(first);
            self.state.submitting = false;
            tracing::info!(field = first.as_str(), "Submit blocked by field errors");
            return SubmitOutcome::Blocked(first);
        }

        if !process_card {
            self.finish_submit(None);
            return SubmitOutcome::Submitted;
        }

        let card = CardDetails {
            number: self.surface.card_number().unwrap_or_default(),
            cvc: self.surface.cvc(),
            exp_month: self.surface.exp_month(),
            exp_year: self.surface.exp_year(),
        };
        match self.tokenize.create_token(&card).await {
            Ok(token) => {
                self.finish_submit(Some(&token.id));
                SubmitOutcome::Submitted
            }
            Err(err) => {
                let page = match err {
                    TokenizeError::Declined { message } => PageError::Processor(message),
                    TokenizeError::Transport { .. } | TokenizeError::Network(_) => {
                        PageError::Transport
                    }
                };
                tracing::warn!(client = self.tokenize.name(), %page, "Tokenization failed");
                self.surface.show_page_error(&page.to_string());
                self.state.submitting = false;
                SubmitOutcome::Rejected(page)
            }
        }
    }

    /// Run the full validation pass. Returns whether card data must be
    /// tokenized. Every applicable validator runs so all simultaneous
    /// problems surface at once; the fixed order makes the first error
    /// deterministic.
    fn run_validators(&mut self) -> bool {
        let mut process_card = false;

        if self.kind == FormKind::Signup {
            let result = validate::name(&self.surface.name());
            self.report(FieldId::Name, result);
            let result = validate::email(&self.surface.email().unwrap_or_default());
            self.report(FieldId::Email, result);
            if self.surface.card_number().is_some() {
                process_card = true;
            }
        } else if let Some(number) = self.surface.card_number() {
            // Update forms leave card fields blank to keep the card on
            // file; any populated sub-field means a replacement card.
            process_card = !number.is_empty()
                || !self.surface.exp_month().is_empty()
                || !self.surface.exp_year().is_empty()
                || !self.surface.cvc().is_empty();
        }

        let territory = self.surface.territory();
        let result = validate::territory(&territory);
        self.report(FieldId::Territory, result);

        if let Some(prefix) = self.current_tax_prefix() {
            if !Plan::parse(&self.surface.plan()).is_donor() {
                let result = validate::tax_id(&prefix, &self.surface.tax_id());
                self.report(FieldId::TaxId, result);
            }
        }

        if process_card {
            let result =
                validate::card_number(&self.checks, &self.surface.card_number().unwrap_or_default());
            self.report(FieldId::CardNumber, result);
            let result =
                validate::expiry(&self.checks, &self.surface.exp_month(), &self.surface.exp_year());
            self.report(FieldId::CardExpiry, result);
            let result = validate::cvc(&self.checks, &self.surface.cvc());
            self.report(FieldId::CardCvc, result);
        }

        process_card
    }

    /// Terminal: hand off to native submission. `submitting` stays set;
    /// the page navigates away.
    fn finish_submit(&mut self, token: Option<&str>) {
        if let Some(token) = token {
            self.surface.set_token(token);
        }
        self.surface.show_loader();
        self.surface.submit_form();
        tracing::info!(tokenized = token.is_some(), "Native form submission started");
    }

    /// Shared by the submit pass and live revalidation: failures surface,
    /// successes clear the field's recorded error.
    fn report(&mut self, field: FieldId, result: FieldResult) {
        match result {
            Ok(()) => self.presenter.hide(&mut self.surface, field),
            Err(err) => self.presenter.show(&mut self.surface, field, err.message),
        }
    }

    /// Show or hide the tax-ID field for the current (territory, plan)
    /// pair, prefilling the prefix when shown.
    fn sync_tax_field(&mut self) {
        let prefix = self.current_tax_prefix();
        if prefix.is_some() && !Plan::parse(&self.surface.plan()).is_donor() {
            self.surface.set_tax_field(prefix.as_deref());
        } else {
            self.surface.set_tax_field(None);
        }
    }

    fn current_tax_prefix(&self) -> Option<String> {
        self.refdata.tax_prefix(&self.surface.territory()).map(str::to_string)
    }
}
