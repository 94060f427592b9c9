//! Ambient "light hit" flashes on cards.
//!
//! Two independent sources apply the same transient `light-hit` class:
//! a repeatable 30% visibility trigger on cards and the page title, and a
//! periodic tick that flashes one random card regardless of visibility.
//! Each flash removes the class after its window; overlapping flashes are
//! allowed.

#[cfg(test)]
#[path = "ambient_test.rs"]
mod ambient_test;

use crate::visibility::{TriggerMode, TriggerOptions};

pub const HIGHLIGHT_CLASS: &str = "light-hit";

pub fn trigger_options() -> TriggerOptions {
    TriggerOptions { threshold: 0.3, root_margin: "0px", mode: TriggerMode::Repeatable }
}

/// One highlight: add `class` now and remove it `remove_after_ms` later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flash {
    pub class: &'static str,
    pub remove_after_ms: u32,
}

pub fn flash_schedule(highlight_ms: u32) -> Flash {
    Flash { class: HIGHLIGHT_CLASS, remove_after_ms: highlight_ms }
}

/// Pick one candidate given a uniform sample in `[0, 1)`.
///
/// Samples outside the range are clamped, so `1.0` picks the last candidate
/// and negative or NaN samples pick the first. Empty input picks nothing.
pub fn pick<T>(uniform: f64, candidates: &[T]) -> Option<&T> {
    let last = candidates.len().checked_sub(1)?;
    let sample = if uniform.is_nan() { 0.0 } else { uniform.clamp(0.0, 1.0) };
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = ((sample * candidates.len() as f64).floor() as usize).min(last);
    candidates.get(index)
}

#[cfg(feature = "hydrate")]
pub use browser::AmbientEffects;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::{Interval, Timeout};
    use wasm_bindgen::JsValue;
    use web_sys::{Document, Element};

    use super::{Flash, flash_schedule, pick, trigger_options};
    use crate::config::PortfolioConfig;
    use crate::dom;
    use crate::visibility::VisibilityTrigger;

    fn flash(el: &Element, schedule: Flash) {
        dom::add_class(el, schedule.class);
        let el = el.clone();
        Timeout::new(schedule.remove_after_ms, move || dom::remove_class(&el, schedule.class)).forget();
    }

    pub struct AmbientEffects {
        _trigger: VisibilityTrigger,
        _ticker: Interval,
    }

    impl AmbientEffects {
        /// # Errors
        ///
        /// Returns the browser error if the observer cannot be created.
        pub fn mount(document: &Document, config: &PortfolioConfig) -> Result<Self, JsValue> {
            let schedule = flash_schedule(config.timing.highlight_ms);
            let trigger = VisibilityTrigger::new(&trigger_options(), move |el| flash(el, schedule))?;
            trigger.observe_all(&dom::query_all(document, &config.selectors.glow_targets));

            // Candidates are re-queried each tick so cards added later join in.
            let document = document.clone();
            let selector = config.selectors.flash_candidates.clone();
            let ticker = Interval::new(config.timing.flash_interval_ms, move || {
                let cards = dom::query_all(&document, &selector);
                if let Some(card) = pick(js_sys::Math::random(), &cards) {
                    flash(card, schedule);
                }
            });

            Ok(Self { _trigger: trigger, _ticker: ticker })
        }
    }
}
