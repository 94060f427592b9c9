//! Smooth scrolling for in-page links.
//!
//! Every link whose `href` starts with `#` is intercepted: navigation is
//! always suppressed, and the page smooth-scrolls the element with the
//! fragment's id to the top of the viewport. Unknown or empty fragments do
//! nothing.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// The element id an in-page `href` points at.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.trim().strip_prefix('#').filter(|id| !id.is_empty())
}

/// Resolve the scroll target for a clicked link, using `lookup` to find an
/// element by id.
pub fn scroll_target<T, F>(href: &str, lookup: F) -> Option<T>
where
    F: FnOnce(&str) -> Option<T>,
{
    fragment_id(href).and_then(lookup)
}

#[cfg(feature = "hydrate")]
pub use browser::AnchorScroller;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use super::scroll_target;
    use crate::dom::{self, Listener};

    fn scroll_to(el: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }

    pub struct AnchorScroller {
        _clicks: Vec<Listener>,
    }

    impl AnchorScroller {
        /// Intercept clicks on every link matching `selector`. Links whose
        /// listener cannot be attached keep their default navigation.
        pub fn mount(document: &Document, selector: &str) -> Self {
            let clicks = dom::query_all(document, selector)
                .into_iter()
                .filter_map(|link| {
                    let document = document.clone();
                    let href_source = link.clone();
                    Listener::new(&link, "click", move |ev| {
                        ev.prevent_default();
                        let href = href_source.get_attribute("href").unwrap_or_default();
                        if let Some(target) = scroll_target(&href, |id| document.get_element_by_id(id)) {
                            scroll_to(&target);
                        }
                    })
                    .map_err(|err| log::debug!("anchor listener not attached: {}", dom::describe(&err)))
                    .ok()
                })
                .collect();
            Self { _clicks: clicks }
        }
    }
}
