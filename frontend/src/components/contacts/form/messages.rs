use common::model::contact::ContactDraft;

use super::handler::SubmitError;

/// One of the four editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Tag,
}

pub enum Msg {
    /// A keystroke changed one field of the draft.
    UpdateField(Field, String),
    /// The form was submitted (default browser submission already prevented).
    Submit,
    /// The handler future or the local fallback finished.
    SubmitFinished(Result<(), SubmitError>),
    /// The confirmation banner timed out.
    ClearSuccessMessage,
}

impl Field {
    /// Writes `value` into the matching draft field.
    pub fn apply(self, draft: &mut ContactDraft, value: String) {
        match self {
            Field::Name => draft.name = value,
            Field::Phone => draft.phone = value,
            Field::Email => draft.email = value,
            Field::Tag => draft.tag = value,
        }
    }
}
