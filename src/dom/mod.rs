//! Page bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components reach the page only through their host traits. `browser`
//! implements every trait over `web-sys` for the hydrate build; tests use an
//! in-memory page instead.

#[cfg(feature = "hydrate")]
pub mod browser;
#[cfg(test)]
pub(crate) mod fake;

use crate::state::chat::ChatHost;
use crate::state::scroll::ScrollHost;
use crate::state::theme::ThemeHost;
use crate::util::booking::Navigator;
use crate::util::greeting::GreetingHost;

/// Everything the site scripts need from a page.
pub trait PageHost: ThemeHost + ScrollHost + GreetingHost + ChatHost + Navigator {
    /// Id of the element that currently holds focus.
    fn focused_id(&self) -> Option<String>;
}
