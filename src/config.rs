//! Page configuration with defaults matching the shipped markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page may embed a `<script type="application/json" id="portfolio-config">`
//! block to override element ids, timings or the contact recipient. Every
//! field is optional; anything missing keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::PortfolioError;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub log_level: String,
    pub ids: ElementIds,
    pub theme: ThemeConfig,
    pub galaxy: GalaxyConfig,
    pub counter: CounterConfig,
    pub tilt: TiltConfig,
    pub contact: ContactConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            ids: ElementIds::default(),
            theme: ThemeConfig::default(),
            galaxy: GalaxyConfig::default(),
            counter: CounterConfig::default(),
            tilt: TiltConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

/// DOM ids the behaviors attach to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub canvas: String,
    pub theme_toggle: String,
    pub nav_toggle: String,
    pub nav_links: String,
    pub contact_form: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            canvas: "galaxy".to_owned(),
            theme_toggle: "theme-toggle".to_owned(),
            nav_toggle: "nav-toggle".to_owned(),
            nav_links: "nav-links".to_owned(),
            contact_form: "contact-form".to_owned(),
            name: "name".to_owned(),
            email: "email".to_owned(),
            subject: "subject".to_owned(),
            message: "message".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Delay between lookups while the toggle is not in the DOM yet.
    pub retry_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: "theme".to_owned(), retry_ms: 100 }
    }
}

/// An RGB triple; alpha comes from each particle's depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> String {
        let Self(r, g, b) = self;
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub particle_count: usize,
    pub target_fps: f64,
    pub dark_color: Rgb,
    pub light_color: Rgb,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            target_fps: 30.0,
            dark_color: Rgb(93, 245, 255),
            light_color: Rgb(0, 110, 255),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    /// Intersection ratio that starts a counter.
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { duration_ms: 1800.0, threshold: 0.4 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Peak rotation on each axis, reached at the element's edges.
    pub max_degrees: f64,
    pub perspective_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self { max_degrees: 6.0, perspective_px: 900.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
    pub default_subject: String,
    pub confirmation_delay_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "maxsogbossi@gmail.com".to_owned(),
            default_subject: "Contact depuis le portfolio".to_owned(),
            confirmation_delay_ms: 500,
        }
    }
}

impl PortfolioConfig {
    /// Parse an override block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Config`] when the JSON is malformed or a field
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the override block from the page, falling back to defaults.
    #[cfg(feature = "hydrate")]
    pub fn load() -> Self {
        let Some(raw) = crate::util::dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }

    /// Parsed `log_level`, defaulting to `Info` for unknown names.
    pub fn log_level(&self) -> log::Level {
        match self.log_level.parse::<log::Level>() {
            Ok(level) => level,
            Err(_) => log::Level::Info,
        }
    }
}
