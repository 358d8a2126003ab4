//! Scroll-driven navbar styling and one-way reveal animations.
//!
//! Both effects run on every scroll tick and once at load. They are
//! independent: a page without a navbar still reveals, and vice versa.
//! Reveal is monotonic; a revealed element is never hidden again.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::SiteConfig;

/// A page element marked for scroll-triggered reveal.
pub trait RevealCandidate {
    fn is_revealed(&self) -> bool;
    /// Top edge relative to the viewport top.
    fn top(&self) -> f64;
    fn reveal(&self);
}

/// Page surface the scroll effects read and write.
pub trait ScrollHost {
    type Candidate: RevealCandidate;

    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Returns `false` when the page has no navbar.
    fn set_navbar_scrolled(&self, scrolled: bool) -> bool;
    fn reveal_candidates(&self) -> Vec<Self::Candidate>;
}

/// Outcome of one scroll tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollTick {
    /// `None` when there was no navbar to style.
    pub navbar_scrolled: Option<bool>,
    /// Candidates newly revealed by this tick.
    pub revealed: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEffects {
    pub navbar_threshold: f64,
    pub reveal_offset: f64,
}

impl ScrollEffects {
    pub fn new(navbar_threshold: f64, reveal_offset: f64) -> Self {
        Self { navbar_threshold, reveal_offset }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.navbar_scroll_threshold, config.reveal_offset)
    }

    /// Navbar is styled once the page has scrolled strictly past the threshold.
    pub fn navbar_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.navbar_threshold
    }

    pub fn in_reveal_zone(&self, top: f64, viewport_height: f64) -> bool {
        top < viewport_height - self.reveal_offset
    }

    pub fn update_navbar(&self, host: &impl ScrollHost) -> Option<bool> {
        let scrolled = self.navbar_scrolled(host.scroll_y());
        host.set_navbar_scrolled(scrolled).then_some(scrolled)
    }

    /// Reveal every unrevealed candidate inside the trigger zone.
    pub fn reveal_visible(&self, host: &impl ScrollHost) -> usize {
        let viewport_height = host.viewport_height();
        let mut revealed = 0;
        for candidate in host.reveal_candidates() {
            if candidate.is_revealed() {
                continue;
            }
            if self.in_reveal_zone(candidate.top(), viewport_height) {
                candidate.reveal();
                revealed += 1;
            }
        }
        revealed
    }

    pub fn on_scroll(&self, host: &impl ScrollHost) -> ScrollTick {
        ScrollTick { navbar_scrolled: self.update_navbar(host), revealed: self.reveal_visible(host) }
    }
}

impl Default for ScrollEffects {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}
