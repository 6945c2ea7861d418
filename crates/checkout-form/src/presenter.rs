//! Error Presenter
//!
//! Tracks which fields are currently in error, renders and clears the
//! inline messages through the form surface, and remembers the first
//! errored field of each validation pass for focus.

use std::collections::BTreeSet;

use crate::model::FieldId;
use crate::surface::FormSurface;

#[derive(Debug, Default)]
pub struct ErrorPresenter {
    errors: BTreeSet<FieldId>,
    first_error: Option<FieldId>,
}

impl ErrorPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render an inline error. Idempotent for a field already in error;
    /// the message text still updates. The first field shown since the
    /// last `reset_pass` is recorded for focus.
    pub fn show<S: FormSurface>(&mut self, surface: &mut S, field: FieldId, message: &str) {
        surface.show_field_error(field, message);
        self.errors.insert(field);
        if self.first_error.is_none() {
            self.first_error = Some(field);
        }
    }

    /// Clear an inline error.
    ///
    /// Gated on a previously recorded error for every field except the tax
    /// ID, whose visual state always clears. (The tax-ID field's error is
    /// also cleared on keystrokes before any submit attempt, so the gate
    /// would leave stale styling behind.)
    pub fn hide<S: FormSurface>(&mut self, surface: &mut S, field: FieldId) {
        if field != FieldId::TaxId && !self.errors.contains(&field) {
            return;
        }
        self.errors.remove(&field);
        surface.clear_field_error(field);
    }

    /// Start a new submit validation pass. Clears only the first-error
    /// marker; the error set stays, field by field, until each validator
    /// reruns.
    pub fn reset_pass(&mut self) {
        self.first_error = None;
    }

    /// First field shown in error this pass, in validation order.
    pub fn first_error(&self) -> Option<FieldId> {
        self.first_error
    }

    pub fn has_error(&self, field: FieldId) -> bool {
        self.errors.contains(&field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
