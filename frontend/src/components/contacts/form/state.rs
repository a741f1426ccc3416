//! Component state for the contact form.
//!
//! The state is plain data (no DOM refs), so every transition the update
//! logic relies on is a method here and runs unchanged under `cargo test`.

use common::model::contact::{ContactDraft, ValidationErrors};

/// Whether a submission is currently in flight. Drives the disabled state
/// and label of the submit button, and guards against re-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// Main state container for the `ContactFormComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct ContactFormComponent {
    /// Current input values, mutated field by field while the user types.
    pub draft: ContactDraft,

    /// Messages from the last submission attempt. Replaced wholesale on
    /// each attempt so stale messages never linger.
    pub errors: ValidationErrors,

    /// Submission progress flag.
    pub state: SubmissionState,

    /// Confirmation banner shown after a successful save, until cleared.
    pub success_message: Option<String>,
}

impl ContactFormComponent {
    pub fn new() -> Self {
        Self {
            draft: ContactDraft::default(),
            errors: ValidationErrors::default(),
            state: SubmissionState::Idle,
            success_message: None,
        }
    }

    /// Recomputes the error set from the current draft, stores it (also on
    /// success, clearing stale messages), and reports overall validity.
    pub fn validate(&mut self) -> bool {
        self.errors = self.draft.validate();
        self.errors.is_valid()
    }

    /// Marks the submission as in flight and drops any previous banner.
    pub fn begin_submit(&mut self) {
        self.state = SubmissionState::Submitting;
        self.success_message = None;
    }

    /// Applies a successful save: empty draft, no errors, banner shown.
    pub fn finish_submit_ok(&mut self) {
        self.draft = ContactDraft::default();
        self.errors = ValidationErrors::default();
        self.success_message = Some("Contacto guardado correctamente.".to_string());
        self.state = SubmissionState::Idle;
    }

    /// Applies a failed save: the draft stays as typed so the user can
    /// retry, and no banner appears.
    pub fn finish_submit_err(&mut self) {
        self.state = SubmissionState::Idle;
    }
}
