//! Inline service worker.
//!
//! The worker is built from a Blob URL rather than a file, and only claims
//! open pages as soon as it activates. It does no caching.

#[cfg(test)]
#[path = "worker_test.rs"]
mod worker_test;

pub const WORKER_MIME: &str = "application/javascript";

pub const WORKER_SCRIPT: &str = "\
self.addEventListener('install', function(event) {
    event.waitUntil(self.skipWaiting());
});
self.addEventListener('activate', function(event) {
    event.waitUntil(self.clients.claim());
});
";

/// When to register the worker relative to the window `load` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationTiming {
    /// `load` has already fired; register right away.
    Now,
    /// Wait for `load`.
    OnLoad,
}

/// Decide from `document.readyState`. The wasm module usually finishes
/// instantiating after `load`, so `"complete"` is the common case.
pub fn registration_timing(ready_state: &str) -> RegistrationTiming {
    if ready_state == "complete" {
        RegistrationTiming::Now
    } else {
        RegistrationTiming::OnLoad
    }
}

#[cfg(feature = "hydrate")]
pub use browser::register_on_load;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, BlobPropertyBag, Url, Window};

    use super::{RegistrationTiming, WORKER_MIME, WORKER_SCRIPT, registration_timing};
    use crate::dom::{self, Listener};

    fn script_url() -> Result<String, JsValue> {
        let parts = js_sys::Array::of1(&JsValue::from_str(WORKER_SCRIPT));
        let bag = BlobPropertyBag::new();
        bag.set_type(WORKER_MIME);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &bag)?;
        Url::create_object_url_with_blob(&blob)
    }

    async fn register(window: Window) -> Result<(), JsValue> {
        let url = script_url()?;
        let registration = window.navigator().service_worker().register(&url);
        JsFuture::from(registration).await?;
        Ok(())
    }

    fn spawn_register(window: Window) {
        wasm_bindgen_futures::spawn_local(async move {
            match register(window).await {
                Ok(()) => log::debug!("service worker registered"),
                Err(err) => log::warn!("service worker registration failed: {}", dom::describe(&err)),
            }
        });
    }

    /// Register the worker once the window has loaded, or immediately if it
    /// already has. Returns the pending `load` hook, or `None` when there is
    /// nothing left to wait for or no service worker support.
    pub fn register_on_load(window: &Window) -> Option<Listener> {
        let supported = js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker")).unwrap_or(false);
        if !supported {
            log::debug!("service workers unsupported; skipping registration");
            return None;
        }
        let ready_state = window.document().map(|doc| doc.ready_state()).unwrap_or_default();
        if registration_timing(&ready_state) == RegistrationTiming::Now {
            spawn_register(window.clone());
            return None;
        }
        let window_for_cb = window.clone();
        let listener = Listener::new(window, "load", move |_| spawn_register(window_for_cb.clone()));
        match listener {
            Ok(listener) => Some(listener),
            Err(err) => {
                log::warn!("service worker load hook not attached: {}", dom::describe(&err));
                None
            }
        }
    }
}
