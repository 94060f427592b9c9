//! # portfolio
//!
//! WASM behavior layer for the static portfolio page. The markup and styling
//! are served as plain HTML/CSS; this crate attaches to them after load and
//! owns every interactive behavior: theme switching, scroll reveal, ambient
//! card highlights, the contact form, anchor scrolling, hover affordances,
//! PDF export, and the inline service worker.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Typed page configuration with defaults |
//! | [`storage`] | Durable single-key preference storage |
//! | [`visibility`] | Viewport intersection triggers (one-shot / repeatable) |
//! | [`banner`] | Transient auto-dismissing status banners |
//! | [`theme`] | Light/dark theme resolution, persistence, and toggle |
//! | [`reveal`] | One-shot scroll reveal of tagged sections |
//! | [`ambient`] | Visibility and timer driven "light hit" flashes |
//! | [`form`] | Contact form relay to the form backend |
//! | [`anchor`] | Smooth scrolling for in-page links |
//! | [`hover`] | Pointer hover lift / icon scale on cards |
//! | [`export`] | Page-to-PDF export with print fallback |
//! | [`worker`] | Inline service worker registration |
//! | `dom` | Shared web-sys helpers (hydrate only) |
//! | `app` | Composition root (hydrate only) |
//!
//! Each module keeps its decision logic free of web-sys so it runs under
//! native `cargo test`; the browser shells are compiled only with the
//! `hydrate` feature.

pub mod ambient;
pub mod anchor;
pub mod banner;
pub mod config;
pub mod export;
pub mod form;
pub mod hover;
pub mod reveal;
pub mod storage;
pub mod theme;
pub mod visibility;
pub mod worker;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point.
///
/// Installs the panic hook and console logger, reads the page configuration,
/// and mounts the composition root once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger already installed: {err}").into());
    }
    app::boot();
}
