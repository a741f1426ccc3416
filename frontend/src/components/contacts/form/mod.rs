//! Contact creation form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! props, and the submit-handler capability.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ContactFormProps`, `ContactFormComponent`,
//!   `SubmitHandler`, `SubmitError`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.

mod handler;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use handler::{SubmitError, SubmitHandler};
pub use messages::{Field, Msg};
pub use props::ContactFormProps;
pub use state::{ContactFormComponent, SubmissionState};

use yew::prelude::*;

impl Component for ContactFormComponent {
    type Message = Msg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ContactFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
