//! Error types for the fallible plumbing around the page behaviors.
//!
//! The behaviors themselves are best-effort and never fail; only boot-time
//! steps (config parsing, listener registration) report errors.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised while configuring or booting the site scripts.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The embedded config block was not valid JSON for `SiteConfig`.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A config value parsed but is out of range.
    #[error("invalid config: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// No global `window` (not running in a browser).
    #[error("browser window unavailable")]
    NoWindow,

    /// The window has no document attached.
    #[error("browser document unavailable")]
    NoDocument,

    /// Attaching an event listener failed.
    #[error("listener registration failed: {event}: {detail}")]
    Listener { event: &'static str, detail: String },
}
