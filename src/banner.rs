//! Transient status banners.
//!
//! A banner is a fixed, centered message at the top of the viewport. It stays
//! up for its display window, fades out, and removes itself. Call sites that
//! need at most one visible banner tag theirs with a marker class; showing a
//! new marked banner first removes every existing one with the same marker.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

/// Classes shared by every banner.
pub const BASE_CLASSES: &str = "fixed top-6 left-1/2 transform -translate-x-1/2 z-50 px-6 py-3 rounded-lg shadow-lg transition-all duration-300 text-white";

/// Transform applied while the banner fades out.
pub const EXIT_TRANSFORM: &str = "translate(-50%, -20px)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Error,
}

impl BannerKind {
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Info => "bg-blue-500",
            Self::Success => "bg-green-500",
            Self::Error => "bg-red-500",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, message: message.into() }
    }
}

/// How a call site's banners behave.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerPolicy {
    /// Time on screen before the fade starts.
    pub display_ms: u32,
    /// Fade duration before removal.
    pub fade_ms: u32,
    /// Marker class for exclusive banners.
    pub exclusive_marker: Option<&'static str>,
}

impl BannerPolicy {
    /// Full class attribute for a banner of `kind` under this policy.
    pub fn class_name(&self, kind: BannerKind) -> String {
        let mut classes = Vec::with_capacity(3);
        if let Some(marker) = self.exclusive_marker {
            classes.push(marker);
        }
        classes.push(BASE_CLASSES);
        classes.push(kind.color_class());
        classes.join(" ")
    }

    /// Whether showing a banner under this policy removes an existing banner
    /// whose class attribute is `existing_classes`. Only banners carrying this
    /// policy's marker are evicted; unmarked policies evict nothing.
    pub fn evicts(&self, existing_classes: &str) -> bool {
        self.exclusive_marker
            .is_some_and(|marker| existing_classes.split_ascii_whitespace().any(|class| class == marker))
    }
}

/// Something that can put a banner in front of the user.
pub trait Notifier {
    fn notify(&self, banner: Banner);
}

#[cfg(feature = "hydrate")]
pub use browser::DomNotifier;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;
    use web_sys::{Document, Element};

    use super::{Banner, BannerPolicy, EXIT_TRANSFORM, Notifier};
    use crate::dom;

    /// Appends banners to `document.body`.
    #[derive(Clone)]
    pub struct DomNotifier {
        document: Document,
        policy: BannerPolicy,
    }

    impl DomNotifier {
        pub fn new(document: Document, policy: BannerPolicy) -> Self {
            Self { document, policy }
        }

        fn clear_marked(&self) {
            let Some(marker) = self.policy.exclusive_marker else {
                return;
            };
            for el in dom::query_all(&self.document, &format!(".{marker}")) {
                if self.policy.evicts(&el.class_name()) {
                    el.remove();
                }
            }
        }

        fn schedule_dismiss(&self, el: Element) {
            let fade_ms = self.policy.fade_ms;
            Timeout::new(self.policy.display_ms, move || {
                dom::set_style(&el, "opacity", "0");
                dom::set_style(&el, "transform", EXIT_TRANSFORM);
                Timeout::new(fade_ms, move || el.remove()).forget();
            })
            .forget();
        }
    }

    impl Notifier for DomNotifier {
        fn notify(&self, banner: Banner) {
            self.clear_marked();
            let Some(body) = self.document.body() else {
                log::debug!("no <body>; dropping banner {:?}", banner.message);
                return;
            };
            let el = match self.document.create_element("div") {
                Ok(el) => el,
                Err(err) => {
                    log::debug!("banner element creation failed: {}", dom::describe(&err));
                    return;
                }
            };
            el.set_class_name(&self.policy.class_name(banner.kind));
            el.set_text_content(Some(&banner.message));
            if let Err(err) = body.append_child(&el) {
                log::debug!("banner attach failed: {}", dom::describe(&err));
                return;
            }
            self.schedule_dismiss(el);
        }
    }
}
