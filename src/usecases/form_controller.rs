//! Form state: the editable draft and the per-field validation messages.
//!
//! Never talks to the network; a valid submit is handed to a [`SubmitPort`].

use crate::domain::{validate, Draft, Field, ValidationErrors};
use crate::ports::SubmitPort;
use crate::usecases::session_controller::OperationOutcome;
use std::sync::Arc;
use tracing::debug;

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are stored on the form and nothing was sent.
    Rejected,
    /// Request handed to the session; carries its outcome.
    Forwarded(OperationOutcome),
}

pub struct FormController {
    draft: Draft,
    errors: ValidationErrors,
    sink: Arc<dyn SubmitPort>,
}

impl FormController {
    pub fn new(sink: Arc<dyn SubmitPort>) -> Self {
        Self {
            draft: Draft::default(),
            errors: ValidationErrors::default(),
            sink,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Store the new value and drop any message recorded for that field,
    /// whether or not the new value is valid.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value.into());
        if self.errors.clear(field) {
            debug!(field = %field, "cleared validation error on edit");
        }
    }

    /// Validate the draft and forward the trimmed request.
    ///
    /// The draft is left as typed so the user can see what was submitted.
    pub async fn submit(&mut self) -> SubmitOutcome {
        match validate(&self.draft) {
            Ok(request) => {
                self.errors = ValidationErrors::default();
                SubmitOutcome::Forwarded(self.sink.submit_full_request(request).await)
            }
            Err(errors) => {
                debug!(errors = %errors, "form rejected");
                self.errors = errors;
                SubmitOutcome::Rejected
            }
        }
    }
}
