//! Update function for the contact form component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `ContactFormComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Field edits flow into the draft with no side effects.
//! - Submission validates first and stops silently when a field fails,
//!   leaving the fresh messages visible.
//! - A valid draft goes to the injected handler when one was supplied,
//!   otherwise it is appended to the local store under a timestamp id.
//! - Handler failures are logged to the console and swallowed; the user
//!   only notices the missing confirmation banner.
//! - The banner clears itself after three seconds.

use gloo_console::error;
use js_sys::Date;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::contact::StoredContact;

use crate::storage::{ContactStore, LocalStorage};

use super::messages::Msg;
use super::state::{ContactFormComponent, SubmissionState};

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (e.g., async callbacks).
/// - Returns `true` to re-render the view, `false` to short-circuit when
///   only side effects occur.
pub fn update(
    component: &mut ContactFormComponent,
    ctx: &Context<ContactFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            field.apply(&mut component.draft, value);
            true
        }
        Msg::Submit => {
            if component.state == SubmissionState::Submitting {
                return false;
            }
            if !component.validate() {
                return true;
            }

            component.begin_submit();

            let draft = component.draft.clone();
            let link = ctx.link().clone();
            match &ctx.props().on_submit {
                Some(handler) => {
                    let handler = handler.clone();
                    spawn_local(async move {
                        let result = handler.run(draft).await;
                        link.send_message(Msg::SubmitFinished(result));
                    });
                }
                None => {
                    let id = Date::now() as u64;
                    ContactStore::new(LocalStorage).append(StoredContact::from_draft(draft, id));
                    link.send_message(Msg::SubmitFinished(Ok(())));
                }
            }
            true
        }
        Msg::SubmitFinished(Ok(())) => {
            component.finish_submit_ok();

            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                link.send_message(Msg::ClearSuccessMessage);
            });
            true
        }
        Msg::SubmitFinished(Err(err)) => {
            error!("Error guardando contacto:", err.to_string());
            component.finish_submit_err();
            true
        }
        Msg::ClearSuccessMessage => {
            component.success_message = None;
            true
        }
    }
}
