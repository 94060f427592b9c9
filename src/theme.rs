//! Light/dark theme.
//!
//! The active theme resolves by precedence: the stored `theme` preference,
//! then the system `prefers-color-scheme: dark` signal, then light. Dark mode
//! is expressed as a `dark` class on `<html>` plus a sun icon on the toggle
//! button; light mode removes the class and shows a moon.
//!
//! TRADE-OFFS
//! ==========
//! A failed preference write is logged and the visual toggle still happens;
//! the page then reverts to the system signal on the next load.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;

use crate::storage::{Preference, PreferenceStore};

pub const STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Toggle button transform during the click pulse.
pub const PULSE_TRANSFORM: &str = "scale(1.1)";
pub const REST_TRANSFORM: &str = "scale(1)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `dark`/`light` is unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon classes for the toggle button: the icon shows the theme one click
    /// away.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon text-gray-600",
            Self::Dark => "fas fa-sun text-yellow-500",
        }
    }
}

/// Resolve the initial theme from a stored value and the system signal.
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Where the theme becomes visible.
pub trait ThemeSurface {
    /// Make `theme` the visible theme.
    fn apply(&self, theme: Theme);

    /// Play the click affordance on the toggle control.
    fn pulse(&self);
}

/// Owns the current theme and keeps the surface and preference in step.
pub struct ThemeController<S, V> {
    preference: Preference<S>,
    surface: V,
    current: Cell<Theme>,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
    /// Resolve the initial theme and apply it. Nothing is persisted until
    /// the first toggle.
    pub fn new(store: S, surface: V, system_prefers_dark: bool) -> Self {
        let preference = Preference::new(STORAGE_KEY, store);
        let initial = resolve(preference.load().as_deref(), system_prefers_dark);
        surface.apply(initial);
        Self { preference, surface, current: Cell::new(initial) }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Flip the theme, persist it, and pulse the control.
    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.current.set(next);
        self.surface.apply(next);
        if let Err(err) = self.preference.save(next.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        self.surface.pulse();
        next
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{DomThemeSurface, ThemeToggle, system_prefers_dark};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsValue;
    use web_sys::{Document, Element};

    use super::{DARK_CLASS, DARK_QUERY, PULSE_TRANSFORM, REST_TRANSFORM, Theme, ThemeController, ThemeSurface};
    use crate::config::PortfolioConfig;
    use crate::dom::{self, Listener};
    use crate::storage::PreferenceStore;

    pub fn system_prefers_dark() -> bool {
        dom::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }

    /// `<html>` class plus the toggle button and its icon. Any of them may be
    /// missing from the page.
    pub struct DomThemeSurface {
        root: Option<Element>,
        button: Option<Element>,
        icon: Option<Element>,
        pulse_ms: u32,
    }

    impl ThemeSurface for DomThemeSurface {
        fn apply(&self, theme: Theme) {
            if let Some(root) = &self.root {
                if theme.is_dark() {
                    dom::add_class(root, DARK_CLASS);
                } else {
                    dom::remove_class(root, DARK_CLASS);
                }
            }
            if let Some(icon) = &self.icon {
                icon.set_class_name(theme.icon_class());
            }
        }

        fn pulse(&self) {
            let Some(button) = self.button.clone() else {
                return;
            };
            dom::set_style(&button, "transform", PULSE_TRANSFORM);
            Timeout::new(self.pulse_ms, move || dom::set_style(&button, "transform", REST_TRANSFORM)).forget();
        }
    }

    /// Mounted theme toggle: controller plus its click listener.
    pub struct ThemeToggle {
        controller: Rc<ThemeController<Box<dyn PreferenceStore>, DomThemeSurface>>,
        _click: Option<Listener>,
    }

    impl ThemeToggle {
        /// Apply the initial theme and wire the toggle button. Without a
        /// button the theme is still applied; there is just nothing to click.
        ///
        /// # Errors
        ///
        /// Returns the browser error if the click listener cannot be attached.
        pub fn mount(
            document: &Document,
            config: &PortfolioConfig,
            store: Box<dyn PreferenceStore>,
        ) -> Result<Self, JsValue> {
            let button = document.get_element_by_id(&config.selectors.theme_toggle_id);
            let surface = DomThemeSurface {
                root: document.document_element(),
                icon: button.as_ref().and_then(|b| dom::query_in(b, "i")),
                button: button.clone(),
                pulse_ms: config.timing.theme_pulse_ms,
            };
            let controller = Rc::new(ThemeController::new(store, surface, system_prefers_dark()));
            log::debug!("theme resolved to {}", controller.current().as_str());

            let click = match &button {
                Some(button) => {
                    let controller_for_click = Rc::clone(&controller);
                    Some(Listener::new(button, "click", move |_| {
                        let theme = controller_for_click.toggle();
                        log::debug!("theme toggled to {}", theme.as_str());
                    })?)
                }
                None => {
                    log::debug!("theme: no toggle control; theme applied without one");
                    None
                }
            };
            Ok(Self { controller, _click: click })
        }

        pub fn current(&self) -> Theme {
            self.controller.current()
        }
    }
}
