//! View rendering for the contact form component.
//!
//! One labelled input per field, with the matching message underneath when
//! the last submission attempt rejected it. The submit button is disabled
//! and relabelled while a save is in flight.
//!
//! All user-facing messages remain in Spanish by design.

use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{Field, Msg};
use super::state::{ContactFormComponent, SubmissionState};

/// Main view function for the contact form component.
pub fn view(component: &ContactFormComponent, ctx: &Context<ContactFormComponent>) -> Html {
    let link = ctx.link();
    let submitting = component.state == SubmissionState::Submitting;

    html! {
        <form
            class="contact-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            <h2 class="contact-form-title">{"Nuevo contacto"}</h2>

            { success_banner(component) }

            { labelled_input("Nombre *", "text", Field::Name, &component.draft.name, &component.errors.name, link) }
            { labelled_input("Teléfono *", "text", Field::Phone, &component.draft.phone, &component.errors.phone, link) }
            { labelled_input("Correo *", "email", Field::Email, &component.draft.email, &component.errors.email, link) }
            { labelled_input("Etiqueta (opcional)", "text", Field::Tag, &component.draft.tag, "", link) }

            <div class="contact-form-actions">
                <button type="submit" class="contact-form-submit" disabled={submitting}>
                    { if submitting { "Guardando..." } else { "Agregar contacto" } }
                </button>
            </div>
        </form>
    }
}

/// Renders the confirmation banner, or nothing when there is none to show.
fn success_banner(component: &ContactFormComponent) -> Html {
    match &component.success_message {
        Some(message) => html! {
            <div class="contact-form-success">{ message }</div>
        },
        None => html! {},
    }
}

/// Builds one labelled input plus its message paragraph.
/// `error` is empty when the field passed the last check (or has no rules).
fn labelled_input(
    label: &str,
    input_type: &'static str,
    field: Field,
    value: &str,
    error: &str,
    link: &Scope<ContactFormComponent>,
) -> Html {
    html! {
        <div class="contact-form-field">
            <label>{ label }</label>
            <input
                type={input_type}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    Msg::UpdateField(field, input.value())
                })}
            />
            {
                if error.is_empty() {
                    html! {}
                } else {
                    html! { <p class="contact-form-error">{ error }</p> }
                }
            }
        </div>
    }
}
