//! Page configuration.
//!
//! Every field carries a default matching the shipped page markup, so a page
//! without a configuration block behaves identically to one with an empty
//! object. Overrides are read from an optional
//! `<script type="application/json" id="portfolio-config">` element.
//!
//! ERROR HANDLING
//! ==============
//! A malformed block is reported and replaced by the defaults; configuration
//! problems never prevent the page from mounting.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the optional inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/your-form-id";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("contact endpoint must be an http(s) url, got {0:?}")]
    Endpoint(String),
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub contact_endpoint: String,
    pub selectors: Selectors,
    pub timing: Timing,
    pub messages: Messages,
    pub export: ExportSettings,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_owned(),
            selectors: Selectors::default(),
            timing: Timing::default(),
            messages: Messages::default(),
            export: ExportSettings::default(),
        }
    }
}

/// DOM hooks the components attach to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Element id of the theme toggle button.
    pub theme_toggle_id: String,
    pub reveal: String,
    /// Elements flashed when they scroll into view.
    pub glow_targets: String,
    /// Elements eligible for the periodic random flash.
    pub flash_candidates: String,
    pub contact_form_id: String,
    pub submit_button: String,
    pub anchors: String,
    pub lift_cards: String,
    pub icon_cards: String,
    pub export_button_id: String,
    pub export_region: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle_id: "themeToggle".to_owned(),
            reveal: ".scroll-animate".to_owned(),
            glow_targets: ".tech-card, .project-card, .edu-card, .main-title-glow".to_owned(),
            flash_candidates: ".tech-card, .project-card, .edu-card".to_owned(),
            contact_form_id: "contactForm".to_owned(),
            submit_button: "button[type=\"submit\"]".to_owned(),
            anchors: "a[href^=\"#\"]".to_owned(),
            lift_cards: ".project-card".to_owned(),
            icon_cards: ".edu-card, .tech-card".to_owned(),
            export_button_id: "downloadPdf".to_owned(),
            export_region: ".container.mx-auto.px-4.py-8.max-w-5xl".to_owned(),
        }
    }
}

/// Durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub theme_pulse_ms: u32,
    pub highlight_ms: u32,
    pub flash_interval_ms: u32,
    pub contact_banner_ms: u32,
    pub export_banner_ms: u32,
    pub banner_fade_ms: u32,
    pub print_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            theme_pulse_ms: 200,
            highlight_ms: 2000,
            flash_interval_ms: 8000,
            contact_banner_ms: 4000,
            export_banner_ms: 3000,
            banner_fade_ms: 300,
            print_delay_ms: 1000,
        }
    }
}

/// User-facing strings, in the page's language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Inner HTML of the submit button while a submission is in flight.
    pub sending_label: String,
    pub contact_success: String,
    pub contact_failure: String,
    pub export_preparing: String,
    pub export_success: String,
    pub export_failure: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            sending_label: "<i class=\"fas fa-spinner fa-spin mr-2\"></i>Отправка...".to_owned(),
            contact_success: "Сообщение отправлено успешно!".to_owned(),
            contact_failure: "Ошибка отправки. Попробуйте еще раз.".to_owned(),
            export_preparing: "Подготовка PDF...".to_owned(),
            export_success: "PDF успешно создан!".to_owned(),
            export_failure: "Ошибка при создании PDF. Используем альтернативный метод...".to_owned(),
        }
    }
}

/// Rendering parameters handed to the PDF library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub filename: String,
    /// Top, left, bottom, right page margins in millimetres.
    pub margin_mm: [u32; 4],
    pub image_quality: f64,
    pub raster_scale: u32,
    pub background: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename: "Николай-Викторович-Frontend-Developer.pdf".to_owned(),
            margin_mm: [10, 10, 10, 10],
            image_quality: 0.98,
            raster_scale: 2,
            background: "#ffffff".to_owned(),
        }
    }
}

impl PortfolioConfig {
    /// Parse and validate a configuration block. Missing fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or whichever error
    /// [`Self::validate`] reports.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the endpoint is an http(s) URL and that the flash and banner
    /// durations are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Endpoint`] when the endpoint is not http(s) and
    /// [`ConfigError::ZeroDuration`] naming the first zero timing field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.contact_endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::Endpoint(self.contact_endpoint.clone()));
        }
        let durations = [
            ("timing.highlight_ms", self.timing.highlight_ms),
            ("timing.flash_interval_ms", self.timing.flash_interval_ms),
            ("timing.contact_banner_ms", self.timing.contact_banner_ms),
            ("timing.export_banner_ms", self.timing.export_banner_ms),
        ];
        if let Some((field, _)) = durations.into_iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::ZeroDuration { field });
        }
        Ok(())
    }

    /// Resolve the configuration for a page: the inline block when present
    /// and valid, the defaults otherwise.
    pub fn from_block(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring page configuration: {err}");
                Self::default()
            }
        }
    }

    /// Read the inline configuration block from `document`.
    #[cfg(feature = "hydrate")]
    pub fn load(document: &web_sys::Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::from_block(raw.as_deref())
    }
}
