//! Composition root.
//!
//! Builds every page behavior exactly once and owns the resulting listeners,
//! observers, and timers. Components whose anchor element is missing from the
//! page are skipped; a component that fails to mount is logged and skipped so
//! the rest of the page still works.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::ambient::AmbientEffects;
use crate::anchor::AnchorScroller;
use crate::banner::{BannerPolicy, DomNotifier};
use crate::config::PortfolioConfig;
use crate::dom::{self, Listener};
use crate::export::{BANNER_MARKER, DocumentExporter};
use crate::form::ContactForm;
use crate::hover::HoverAffordances;
use crate::reveal::RevealAnimator;
use crate::storage;
use crate::theme::ThemeToggle;
use crate::worker;

/// Every mounted page behavior.
pub struct Portfolio {
    pub theme: Option<ThemeToggle>,
    pub reveal: Option<RevealAnimator>,
    pub ambient: Option<AmbientEffects>,
    pub contact: Option<ContactForm>,
    pub anchors: AnchorScroller,
    pub hover: HoverAffordances,
    pub exporter: Option<DocumentExporter>,
    pub worker: Option<Listener>,
}

/// Keep a component that mounted, log and drop one that failed.
fn settle<T>(name: &str, mounted: Result<Option<T>, JsValue>) -> Option<T> {
    match mounted {
        Ok(Some(component)) => Some(component),
        Ok(None) => {
            log::debug!("{name}: anchor element not on page; skipped");
            None
        }
        Err(err) => {
            log::error!("{name}: mount failed: {}", dom::describe(&err));
            None
        }
    }
}

impl Portfolio {
    pub fn mount(document: &Document, config: &PortfolioConfig) -> Self {
        let contact_banners = DomNotifier::new(
            document.clone(),
            BannerPolicy {
                display_ms: config.timing.contact_banner_ms,
                fade_ms: config.timing.banner_fade_ms,
                exclusive_marker: None,
            },
        );
        let export_banners = DomNotifier::new(
            document.clone(),
            BannerPolicy {
                display_ms: config.timing.export_banner_ms,
                fade_ms: config.timing.banner_fade_ms,
                exclusive_marker: Some(BANNER_MARKER),
            },
        );

        Self {
            theme: settle("theme", ThemeToggle::mount(document, config, storage::page_store()).map(Some)),
            reveal: settle("reveal", RevealAnimator::mount(document, &config.selectors.reveal).map(Some)),
            ambient: settle("ambient", AmbientEffects::mount(document, config).map(Some)),
            contact: settle("contact form", ContactForm::mount(document, config, contact_banners)),
            anchors: AnchorScroller::mount(document, &config.selectors.anchors),
            hover: HoverAffordances::mount(document, config),
            exporter: settle("pdf export", DocumentExporter::mount(document, config, export_banners)),
            worker: dom::window().and_then(|w| worker::register_on_load(&w)),
        }
    }
}

fn mount_page(document: &Document) {
    let config = PortfolioConfig::load(document);
    let portfolio = Portfolio::mount(document, &config);
    log::info!(
        "portfolio loaded: theme={} pending_reveals={}",
        portfolio.theme.as_ref().map_or("none", |t| t.current().as_str()),
        portfolio.reveal.as_ref().map_or(0, RevealAnimator::pending),
    );
    // Page behaviors live until the page unloads.
    Box::leak(Box::new(portfolio));
}

/// Mount now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub fn boot() {
    let Some(document) = dom::document() else {
        log::error!("no document; portfolio behaviors not mounted");
        return;
    };
    if document.ready_state() != "loading" {
        mount_page(&document);
        return;
    }

    let document_for_cb = document.clone();
    let listener = Listener::new(&document, "DOMContentLoaded", move |_| mount_page(&document_for_cb));
    match listener {
        Ok(listener) => {
            Box::leak(Box::new(listener));
        }
        Err(err) => log::error!("DOMContentLoaded hook not attached: {}", dom::describe(&err)),
    }
}
