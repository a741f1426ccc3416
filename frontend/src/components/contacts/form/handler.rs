//! The submit-handler capability injected through props.
//!
//! A parent that wants to own persistence (typically a POST to some API)
//! passes a [`SubmitHandler`]; the form awaits its future and reacts to the
//! returned result. When no handler is supplied the form falls back to the
//! local store instead.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use common::model::contact::ContactDraft;

/// Failure signal carried back from a submit handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError(pub String);

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// Cloneable wrapper around the save operation a parent supplies.
///
/// The future runs on the single-threaded Yew scheduler, so neither the
/// closure nor the future needs to be `Send`.
#[derive(Clone)]
pub struct SubmitHandler {
    f: Rc<dyn Fn(ContactDraft) -> SubmitFuture>,
}

impl SubmitHandler {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(ContactDraft) -> Fut + 'static,
        Fut: Future<Output = Result<(), SubmitError>> + 'static,
    {
        Self {
            f: Rc::new(move |draft| Box::pin(f(draft))),
        }
    }

    /// Starts the save operation for one validated draft.
    pub fn run(&self, draft: ContactDraft) -> SubmitFuture {
        (self.f)(draft)
    }
}

// Props equality only needs to detect a swapped handler.
impl PartialEq for SubmitHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for SubmitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubmitHandler")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_equality_is_by_identity() {
        let a = SubmitHandler::new(|_draft| async { Ok(()) });
        let b = SubmitHandler::new(|_draft| async { Ok(()) });
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_error_displays_its_message() {
        let err = SubmitError("sin conexión".to_string());
        assert_eq!(err.to_string(), "sin conexión");
    }
}
