//! Viewport visibility triggers.
//!
//! A trigger watches a set of elements and fires a callback when one of them
//! crosses its visibility threshold. One-shot triggers drop an element from
//! the set the first time it fires; repeatable triggers keep it and fire on
//! every qualifying entry.
//!
//! The membership bookkeeping lives in [`ObservedSet`], which is generic over
//! the element handle so it can be exercised without a browser. The
//! `IntersectionObserver` shell feeds it `(element, is_intersecting)` pairs.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMode {
    /// Fire once per element, then stop observing it.
    OneShot,
    /// Fire on every entry into the viewport.
    Repeatable,
}

/// Intersection settings for a trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerOptions {
    /// Fraction of the element that must be visible, in `0.0..=1.0`.
    pub threshold: f64,
    /// CSS margin applied to the viewport before testing intersection.
    pub root_margin: &'static str,
    pub mode: TriggerMode,
}

/// Elements currently registered with a trigger.
#[derive(Clone, Debug)]
pub struct ObservedSet<K> {
    mode: TriggerMode,
    members: Vec<K>,
}

impl<K: PartialEq + Clone> ObservedSet<K> {
    pub fn new(mode: TriggerMode) -> Self {
        Self { mode, members: Vec::new() }
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Register `key`. Returns `false` if it was already registered.
    pub fn observe(&mut self, key: K) -> bool {
        if self.members.contains(&key) {
            return false;
        }
        self.members.push(key);
        true
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Process one batch of intersection entries and return the keys whose
    /// callback should fire, in entry order.
    ///
    /// Entries that are not intersecting, or whose key is not registered
    /// (a stale entry for an element already dropped by a one-shot trigger),
    /// never fire. One-shot keys are unregistered as they fire.
    pub fn dispatch<I>(&mut self, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = (K, bool)>,
    {
        let mut fired = Vec::new();
        for (key, intersecting) in entries {
            if !intersecting {
                continue;
            }
            let Some(pos) = self.members.iter().position(|member| *member == key) else {
                continue;
            };
            if self.mode == TriggerMode::OneShot {
                self.members.swap_remove(pos);
            }
            fired.push(key);
        }
        fired
    }
}

#[cfg(feature = "hydrate")]
pub use browser::VisibilityTrigger;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{ObservedSet, TriggerMode, TriggerOptions};

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// `IntersectionObserver` wrapper. Disconnects when dropped.
    pub struct VisibilityTrigger {
        observer: IntersectionObserver,
        observed: Rc<RefCell<ObservedSet<Element>>>,
        _callback: EntriesCallback,
    }

    impl VisibilityTrigger {
        /// Create a trigger that calls `on_fire` for each qualifying element.
        ///
        /// # Errors
        ///
        /// Returns the browser error when `IntersectionObserver` cannot be
        /// constructed (unsupported browser or invalid root margin).
        pub fn new<F>(options: &TriggerOptions, on_fire: F) -> Result<Self, JsValue>
        where
            F: Fn(&Element) + 'static,
        {
            let observed = Rc::new(RefCell::new(ObservedSet::new(options.mode)));
            let observed_for_cb = Rc::clone(&observed);
            let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.target(), entry.is_intersecting()));
                let (fired, mode) = {
                    let mut set = observed_for_cb.borrow_mut();
                    (set.dispatch(batch), set.mode())
                };
                for el in &fired {
                    if mode == TriggerMode::OneShot {
                        observer.unobserve(el);
                    }
                    on_fire(el);
                }
            });

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(options.root_margin);
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

            Ok(Self { observer, observed, _callback: callback })
        }

        pub fn observe(&self, el: &Element) {
            if self.observed.borrow_mut().observe(el.clone()) {
                self.observer.observe(el);
            }
        }

        pub fn observe_all(&self, elements: &[Element]) {
            for el in elements {
                self.observe(el);
            }
        }

        /// Number of elements still being watched.
        pub fn watching(&self) -> usize {
            self.observed.borrow().len()
        }
    }

    impl Drop for VisibilityTrigger {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}
