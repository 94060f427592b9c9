//! One-shot scroll reveal.
//!
//! Sections tagged for reveal gain the `visible` class the first time at
//! least 10% of them sits inside the viewport shrunk by 50px at the bottom.
//! Revealed sections are dropped from the trigger, so the class is never
//! removed and never re-added.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::visibility::{TriggerMode, TriggerOptions};

pub const REVEALED_CLASS: &str = "visible";

pub fn trigger_options() -> TriggerOptions {
    TriggerOptions { threshold: 0.1, root_margin: "0px 0px -50px 0px", mode: TriggerMode::OneShot }
}

#[cfg(feature = "hydrate")]
pub use browser::RevealAnimator;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsValue;
    use web_sys::Document;

    use super::{REVEALED_CLASS, trigger_options};
    use crate::dom;
    use crate::visibility::VisibilityTrigger;

    pub struct RevealAnimator {
        trigger: VisibilityTrigger,
    }

    impl RevealAnimator {
        /// Register every element matching `selector`.
        ///
        /// # Errors
        ///
        /// Returns the browser error if the observer cannot be created.
        pub fn mount(document: &Document, selector: &str) -> Result<Self, JsValue> {
            let trigger = VisibilityTrigger::new(&trigger_options(), |el| dom::add_class(el, REVEALED_CLASS))?;
            let sections = dom::query_all(document, selector);
            trigger.observe_all(&sections);
            log::debug!("reveal watching {} sections", sections.len());
            Ok(Self { trigger })
        }

        /// Sections not yet revealed.
        pub fn pending(&self) -> usize {
            self.trigger.watching()
        }
    }
}
