//! Defines the properties for the `ContactFormComponent`.

use yew::prelude::*;

use super::handler::SubmitHandler;

/// Properties for the `ContactFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ContactFormProps {
    /// Optional save operation invoked with the draft once it validates.
    ///
    /// - If `Some(handler)`, the form awaits the handler's future. On
    ///   success the form resets and shows its confirmation banner; on
    ///   failure the draft is kept so the user can retry.
    ///
    /// - If `None` (the default), the form appends the contact to the
    ///   browser's local storage instead.
    #[prop_or_default]
    pub on_submit: Option<SubmitHandler>,
}
