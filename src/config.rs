//! Site configuration: element ids, class names, thresholds and delays.
//!
//! Defaults match the markup served by the hotel site. A page may override any
//! field through an embedded `<script type="application/json" id="site-config">`
//! block; keys are camelCase and every field is optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Id of the optional JSON config block in the page.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_NAVBAR_SCROLL_THRESHOLD: f64 = 60.0;
pub const DEFAULT_REVEAL_OFFSET: f64 = 80.0;
pub const DEFAULT_REPLY_DELAY_MS: u32 = 600;
pub const DEFAULT_BOOKING_PATH: &str = "/booking";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub navbar_scroll_threshold: f64,
    pub reveal_offset: f64,
    pub reply_delay_ms: u32,
    pub booking_path: String,
    pub log_level: String,
    pub ids: ElementIds,
    pub classes: ClassNames,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            navbar_scroll_threshold: DEFAULT_NAVBAR_SCROLL_THRESHOLD,
            reveal_offset: DEFAULT_REVEAL_OFFSET,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            booking_path: DEFAULT_BOOKING_PATH.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            ids: ElementIds::default(),
            classes: ClassNames::default(),
        }
    }
}

/// Element ids the scripts look up. Every element is optional in the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub theme_button: String,
    pub navbar: String,
    pub chat_window: String,
    pub chat_input: String,
    pub chat_body: String,
    pub greeting: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            theme_button: "themeBtn".to_owned(),
            navbar: "navbar".to_owned(),
            chat_window: "chat-window".to_owned(),
            chat_input: "chat-input".to_owned(),
            chat_body: "chat-body".to_owned(),
            greeting: "greeting".to_owned(),
        }
    }
}

/// Class names shared with the stylesheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    /// Marker on every scroll-reveal candidate.
    pub reveal: String,
    /// Added once a candidate has been revealed.
    pub revealed: String,
    pub navbar_scrolled: String,
    pub chat_open: String,
    pub user_message: String,
    pub bot_message: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            reveal: "reveal".to_owned(),
            revealed: "active".to_owned(),
            navbar_scrolled: "scrolled".to_owned(),
            chat_open: "flex-active".to_owned(),
            user_message: "user-msg".to_owned(),
            bot_message: "bot-msg".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a config override block.
    ///
    /// Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| SiteError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the page's embedded config, falling back to defaults.
    ///
    /// An invalid block is logged and ignored rather than aborting boot.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            if let Some(raw) = raw {
                return Self::from_json_or_default(&raw);
            }
        }
        Self::default()
    }

    /// Parse `raw`, logging and returning defaults on failure.
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        require_non_negative("navbarScrollThreshold", self.navbar_scroll_threshold)?;
        require_non_negative("revealOffset", self.reveal_offset)?;
        require_non_empty("themeStorageKey", &self.theme_storage_key)?;
        require_non_empty("bookingPath", &self.booking_path)?;

        let ids = &self.ids;
        for (field, value) in [
            ("ids.themeButton", &ids.theme_button),
            ("ids.navbar", &ids.navbar),
            ("ids.chatWindow", &ids.chat_window),
            ("ids.chatInput", &ids.chat_input),
            ("ids.chatBody", &ids.chat_body),
            ("ids.greeting", &ids.greeting),
        ] {
            require_non_empty(field, value)?;
        }

        let classes = &self.classes;
        for (field, value) in [
            ("classes.reveal", &classes.reveal),
            ("classes.revealed", &classes.revealed),
            ("classes.navbarScrolled", &classes.navbar_scrolled),
            ("classes.chatOpen", &classes.chat_open),
            ("classes.userMessage", &classes.user_message),
            ("classes.botMessage", &classes.bot_message),
        ] {
            require_non_empty(field, value)?;
        }

        self.level()?;
        Ok(())
    }

    /// The configured log level.
    pub fn level(&self) -> Result<log::Level, SiteError> {
        log::Level::from_str(self.log_level.trim())
            .map_err(|_| SiteError::InvalidConfig { field: "logLevel", reason: format!("unknown level {:?}", self.log_level) })
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.reply_delay_ms))
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), SiteError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SiteError::InvalidConfig { field, reason: format!("must be a finite non-negative number, got {value}") })
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), SiteError> {
    if value.trim().is_empty() {
        Err(SiteError::InvalidConfig { field, reason: "must not be empty".to_owned() })
    } else {
        Ok(())
    }
}
