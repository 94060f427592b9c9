//! Page-to-PDF export.
//!
//! Rendering is delegated to the page's `html2pdf` bundle: the export region
//! is rasterised at 2x and paginated onto portrait A4 pages, then saved under
//! a fixed filename. Every exporter banner is exclusive, so the preparing,
//! success and failure messages replace each other.
//!
//! ERROR HANDLING
//! ==============
//! Any failure in the pipeline (missing region, missing library, rejected
//! render) is logged, reported with one failure banner, and followed by the
//! browser's print dialog after a short delay.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::Serialize;

use crate::banner::{Banner, Notifier};
use crate::config::{ExportSettings, Messages};

/// Marker class shared by all exporter banners.
pub const BANNER_MARKER: &str = "pdf-notification";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export region {0:?} not found")]
    MissingRegion(String),
    #[error("pdf renderer unavailable: {0}")]
    RendererUnavailable(String),
    #[error("pdf render failed: {0}")]
    Render(String),
    #[error("render options not encodable: {0}")]
    Options(#[from] serde_json::Error),
}

/// Options object passed to `html2pdf().set(...)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    pub margin: [u32; 4],
    pub filename: String,
    pub image: ImageOptions,
    pub html2canvas: RasterOptions,
    #[serde(rename = "jsPDF")]
    pub js_pdf: PageOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub format: &'static str,
    pub quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterOptions {
    pub scale: u32,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub logging: bool,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageOptions {
    pub unit: &'static str,
    pub format: &'static str,
    pub orientation: &'static str,
}

impl RenderOptions {
    pub fn from_settings(settings: &ExportSettings) -> Self {
        Self {
            margin: settings.margin_mm,
            filename: settings.filename.clone(),
            image: ImageOptions { format: "jpeg", quality: settings.image_quality },
            html2canvas: RasterOptions {
                scale: settings.raster_scale,
                use_cors: true,
                logging: false,
                background_color: settings.background.clone(),
            },
            js_pdf: PageOptions { unit: "mm", format: "a4", orientation: "portrait" },
        }
    }

    /// JSON text of the options object.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Options`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Native print dialog, used when rendering fails.
pub trait PrintFallback {
    fn schedule_print(&self, delay_ms: u32);
}

/// Announce that an export has started.
pub fn begin<N: Notifier>(notifier: &N, messages: &Messages) {
    notifier.notify(Banner::info(messages.export_preparing.as_str()));
}

/// Report the render outcome, falling back to printing on failure.
pub fn finish<N, P>(outcome: Result<(), ExportError>, notifier: &N, printer: &P, messages: &Messages, print_delay_ms: u32)
where
    N: Notifier,
    P: PrintFallback,
{
    match outcome {
        Ok(()) => notifier.notify(Banner::success(messages.export_success.as_str())),
        Err(err) => {
            log::error!("pdf export failed: {err}");
            notifier.notify(Banner::error(messages.export_failure.as_str()));
            printer.schedule_print(print_delay_ms);
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::DocumentExporter;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, Element};

    use super::{ExportError, PrintFallback, RenderOptions, begin, finish};
    use crate::banner::DomNotifier;
    use crate::config::{Messages, PortfolioConfig};
    use crate::dom::{self, Listener};

    #[wasm_bindgen]
    extern "C" {
        /// Worker returned by the global `html2pdf()` factory.
        type Html2PdfWorker;

        #[wasm_bindgen(catch, js_name = html2pdf)]
        fn html2pdf() -> Result<Html2PdfWorker, JsValue>;

        #[wasm_bindgen(method, catch)]
        fn set(this: &Html2PdfWorker, options: &JsValue) -> Result<Html2PdfWorker, JsValue>;

        #[wasm_bindgen(method, catch, js_name = from)]
        fn from_element(this: &Html2PdfWorker, source: &Element) -> Result<Html2PdfWorker, JsValue>;

        #[wasm_bindgen(method, catch)]
        fn save(this: &Html2PdfWorker) -> Result<js_sys::Promise, JsValue>;
    }

    struct WindowPrint;

    impl PrintFallback for WindowPrint {
        fn schedule_print(&self, delay_ms: u32) {
            Timeout::new(delay_ms, || {
                let Some(window) = dom::window() else {
                    return;
                };
                if let Err(err) = window.print() {
                    log::error!("print fallback failed: {}", dom::describe(&err));
                }
            })
            .forget();
        }
    }

    async fn render(document: &Document, region_selector: &str, options: &RenderOptions) -> Result<(), ExportError> {
        let region = document
            .query_selector(region_selector)
            .ok()
            .flatten()
            .ok_or_else(|| ExportError::MissingRegion(region_selector.to_owned()))?;
        let options = js_sys::JSON::parse(&options.to_json()?).map_err(|err| ExportError::Render(dom::describe(&err)))?;

        let worker = html2pdf().map_err(|err| ExportError::RendererUnavailable(dom::describe(&err)))?;
        let saving = worker
            .set(&options)
            .and_then(|w| w.from_element(&region))
            .and_then(|w| w.save())
            .map_err(|err| ExportError::Render(dom::describe(&err)))?;
        JsFuture::from(saving)
            .await
            .map_err(|err| ExportError::Render(dom::describe(&err)))?;
        Ok(())
    }

    struct Shared {
        document: Document,
        notifier: DomNotifier,
        region_selector: String,
        options: RenderOptions,
        messages: Messages,
        print_delay_ms: u32,
    }

    pub struct DocumentExporter {
        _click: Listener,
    }

    impl DocumentExporter {
        /// Wire the export button. Returns `Ok(None)` when the page has none.
        ///
        /// # Errors
        ///
        /// Returns the browser error if the click listener cannot be attached.
        pub fn mount(document: &Document, config: &PortfolioConfig, notifier: DomNotifier) -> Result<Option<Self>, JsValue> {
            let Some(button) = document.get_element_by_id(&config.selectors.export_button_id) else {
                return Ok(None);
            };
            let shared = Rc::new(Shared {
                document: document.clone(),
                notifier,
                region_selector: config.selectors.export_region.clone(),
                options: RenderOptions::from_settings(&config.export),
                messages: config.messages.clone(),
                print_delay_ms: config.timing.print_delay_ms,
            });

            let click = Listener::new(&button, "click", move |_| {
                let shared = Rc::clone(&shared);
                begin(&shared.notifier, &shared.messages);
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = render(&shared.document, &shared.region_selector, &shared.options).await;
                    finish(outcome, &shared.notifier, &WindowPrint, &shared.messages, shared.print_delay_ms);
                });
            })?;
            Ok(Some(Self { _click: click }))
        }
    }
}
