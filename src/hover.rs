//! Pointer hover affordances on cards.
//!
//! Project cards lift while hovered; education and tech cards grow their
//! leading icon instead. Cards without an icon are left alone.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEffect {
    /// Translate the card itself upwards.
    Lift,
    /// Scale the card's first `<i>` icon.
    IconScale,
}

impl HoverEffect {
    /// CSS transform for the hovered (`true`) or resting state.
    pub fn transform(self, hovered: bool) -> &'static str {
        match (self, hovered) {
            (Self::Lift, true) => "translateY(-8px)",
            (Self::Lift, false) => "translateY(0)",
            (Self::IconScale, true) => "scale(1.1)",
            (Self::IconScale, false) => "scale(1)",
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::HoverAffordances;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element};

    use super::HoverEffect;
    use crate::config::PortfolioConfig;
    use crate::dom::{self, Listener};

    fn effect_target(card: &Element, effect: HoverEffect) -> Option<Element> {
        match effect {
            HoverEffect::Lift => Some(card.clone()),
            HoverEffect::IconScale => dom::query_in(card, "i"),
        }
    }

    fn attach(card: &Element, effect: HoverEffect, out: &mut Vec<Listener>) {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let card_for_cb = card.clone();
            let listener = Listener::new(card, event, move |_| {
                if let Some(target) = effect_target(&card_for_cb, effect) {
                    dom::set_style(&target, "transform", effect.transform(hovered));
                }
            });
            match listener {
                Ok(listener) => out.push(listener),
                Err(err) => log::debug!("hover listener not attached: {}", dom::describe(&err)),
            }
        }
    }

    pub struct HoverAffordances {
        _listeners: Vec<Listener>,
    }

    impl HoverAffordances {
        pub fn mount(document: &Document, config: &PortfolioConfig) -> Self {
            let mut listeners = Vec::new();
            for card in dom::query_all(document, &config.selectors.lift_cards) {
                attach(&card, HoverEffect::Lift, &mut listeners);
            }
            for card in dom::query_all(document, &config.selectors.icon_cards) {
                attach(&card, HoverEffect::IconScale, &mut listeners);
            }
            Self { _listeners: listeners }
        }
    }
}
