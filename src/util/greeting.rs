//! Time-of-day greeting shown on the landing page.
//!
//! Computed once at load from the local hour; it goes stale if the visitor
//! keeps the page open across a boundary, which is acceptable.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

pub const MORNING_TEXT: &str = "Good Morning from Mahiyanganaya";
pub const AFTERNOON_TEXT: &str = "Good Afternoon from Mahiyanganaya";
pub const EVENING_TEXT: &str = "Good Evening from Mahiyanganaya";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Bucket an hour of day: [0,12) morning, [12,18) afternoon, rest evening.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..12 => Self::Morning,
            12..18 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::Morning => MORNING_TEXT,
            Self::Afternoon => AFTERNOON_TEXT,
            Self::Evening => EVENING_TEXT,
        }
    }
}

pub trait GreetingHost {
    /// Returns `false` when the page has no greeting element.
    fn set_greeting(&self, text: &str) -> bool;
}

/// Write the greeting for `hour` into the page if it has a greeting slot.
pub fn render_greeting(host: &impl GreetingHost, hour: u32) -> Option<Greeting> {
    let greeting = Greeting::for_hour(hour);
    host.set_greeting(greeting.text()).then_some(greeting)
}

/// Local hour of day (0–23) from the browser clock.
#[cfg(feature = "hydrate")]
pub fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}
