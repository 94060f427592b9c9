//! Contact form relay.
//!
//! Submission is split around the network call: [`begin`] swaps the submit
//! button into its busy state and remembers the original label, and
//! [`PendingSubmit::finish`] reports the outcome and restores the button.
//! The browser shell awaits the POST between the two.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status or transport failure becomes a [`SubmitError`]. The
//! error is logged; the user only sees the generic failure banner, and the
//! form keeps its contents so they can retry.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::banner::{Banner, Notifier};
use crate::config::Messages;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("form backend responded with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("form fields unavailable: {0}")]
    FormData(String),
}

/// Map an HTTP status to the submission outcome. Only 2xx is success.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

/// The form's submit button.
pub trait SubmitControl {
    /// Current inner HTML.
    fn label(&self) -> String;
    fn set_label(&self, html: &str);
    fn set_enabled(&self, enabled: bool);
}

pub trait ResettableForm {
    /// Clear every field back to its initial value.
    fn reset(&self);
}

/// A submission whose request is in flight.
#[derive(Debug)]
#[must_use = "the submit control stays disabled until `finish` runs"]
pub struct PendingSubmit {
    original_label: String,
}

/// Put `control` into its busy state.
pub fn begin<C: SubmitControl>(control: &C, busy_label: &str) -> PendingSubmit {
    let original_label = control.label();
    control.set_label(busy_label);
    control.set_enabled(false);
    PendingSubmit { original_label }
}

impl PendingSubmit {
    pub fn original_label(&self) -> &str {
        &self.original_label
    }

    /// Report `outcome` and restore the control. Success clears the form.
    pub fn finish<C, F, N>(self, outcome: Result<(), SubmitError>, control: &C, form: &F, notifier: &N, messages: &Messages)
    where
        C: SubmitControl,
        F: ResettableForm,
        N: Notifier,
    {
        match outcome {
            Ok(()) => {
                notifier.notify(Banner::success(messages.contact_success.as_str()));
                form.reset();
            }
            Err(err) => {
                log::error!("contact form submission failed: {err}");
                notifier.notify(Banner::error(messages.contact_failure.as_str()));
            }
        }
        control.set_label(&self.original_label);
        control.set_enabled(true);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::ContactForm;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gloo_net::http::Request;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, FormData, HtmlButtonElement, HtmlFormElement};

    use super::{ResettableForm, SubmitControl, SubmitError, begin, check_status};
    use crate::banner::DomNotifier;
    use crate::config::{Messages, PortfolioConfig};
    use crate::dom::{self, Listener};

    /// Submit button; a form without one still submits, just without the
    /// busy state.
    struct DomSubmitButton(Option<HtmlButtonElement>);

    impl SubmitControl for DomSubmitButton {
        fn label(&self) -> String {
            self.0.as_ref().map(|b| b.inner_html()).unwrap_or_default()
        }

        fn set_label(&self, html: &str) {
            if let Some(button) = &self.0 {
                button.set_inner_html(html);
            }
        }

        fn set_enabled(&self, enabled: bool) {
            if let Some(button) = &self.0 {
                button.set_disabled(!enabled);
            }
        }
    }

    struct DomForm(HtmlFormElement);

    impl ResettableForm for DomForm {
        fn reset(&self) {
            self.0.reset();
        }
    }

    /// POST the form's fields as multipart data.
    async fn post_form(endpoint: &str, form: &HtmlFormElement) -> Result<(), SubmitError> {
        let fields = FormData::new_with_form(form).map_err(|err| SubmitError::FormData(dom::describe(&err)))?;
        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .body(fields)
            .map_err(|err| SubmitError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        check_status(response.status())
    }

    struct Shared {
        form: DomForm,
        button: DomSubmitButton,
        notifier: DomNotifier,
        endpoint: String,
        messages: Messages,
    }

    pub struct ContactForm {
        _submit: Listener,
    }

    impl ContactForm {
        /// Intercept submission of the contact form. Returns `Ok(None)` when
        /// the page has no contact form.
        ///
        /// # Errors
        ///
        /// Returns the browser error if the submit listener cannot be attached.
        pub fn mount(document: &Document, config: &PortfolioConfig, notifier: DomNotifier) -> Result<Option<Self>, JsValue> {
            let Some(form) = document
                .get_element_by_id(&config.selectors.contact_form_id)
                .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
            else {
                return Ok(None);
            };
            let button = dom::query_in(&form, &config.selectors.submit_button)
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());

            let shared = Rc::new(Shared {
                form: DomForm(form.clone()),
                button: DomSubmitButton(button),
                notifier,
                endpoint: config.contact_endpoint.clone(),
                messages: config.messages.clone(),
            });

            let submit = Listener::new(&form, "submit", move |ev| {
                ev.prevent_default();
                let shared = Rc::clone(&shared);
                let pending = begin(&shared.button, &shared.messages.sending_label);
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = post_form(&shared.endpoint, &shared.form.0).await;
                    pending.finish(outcome, &shared.button, &shared.form, &shared.notifier, &shared.messages);
                });
            })?;
            Ok(Some(Self { _submit: submit }))
        }
    }
}
