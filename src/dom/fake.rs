//! In-memory page and manual timer used by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::PageHost;
use crate::state::chat::{ChatHost, ChatMessage, ReplyScheduler};
use crate::state::scroll::{RevealCandidate, ScrollHost};
use crate::state::theme::ThemeHost;
use crate::util::booking::Navigator;
use crate::util::greeting::GreetingHost;

#[derive(Debug, Default)]
pub struct FakeReveal {
    pub top: Cell<f64>,
    pub revealed: Cell<bool>,
}

impl FakeReveal {
    pub fn at(top: f64) -> Rc<Self> {
        Rc::new(Self { top: Cell::new(top), revealed: Cell::new(false) })
    }
}

impl RevealCandidate for Rc<FakeReveal> {
    fn is_revealed(&self) -> bool {
        self.revealed.get()
    }

    fn top(&self) -> f64 {
        self.top.get()
    }

    fn reveal(&self) {
        self.revealed.set(true);
    }
}

/// A page whose optional elements are each `Some` when present.
#[derive(Debug)]
pub struct FakePage {
    pub theme_attribute: RefCell<Option<String>>,
    pub toggle_icon: RefCell<Option<String>>,
    pub navbar_scrolled: RefCell<Option<bool>>,
    pub scroll_y: Cell<f64>,
    pub viewport_height: Cell<f64>,
    pub candidates: RefCell<Vec<Rc<FakeReveal>>>,
    pub greeting: RefCell<Option<String>>,
    pub chat_open: RefCell<Option<bool>>,
    pub chat_input: RefCell<Option<String>>,
    pub chat_body: RefCell<Option<Vec<ChatMessage>>>,
    pub chat_scrolls: Cell<usize>,
    pub focused: RefCell<Option<String>>,
    pub navigations: RefCell<Vec<String>>,
}

impl FakePage {
    /// Every element present, page at the top, 800px viewport.
    pub fn full() -> Self {
        Self {
            theme_attribute: RefCell::new(None),
            toggle_icon: RefCell::new(Some(crate::state::theme::MOON_ICON.to_owned())),
            navbar_scrolled: RefCell::new(Some(false)),
            scroll_y: Cell::new(0.0),
            viewport_height: Cell::new(800.0),
            candidates: RefCell::new(Vec::new()),
            greeting: RefCell::new(Some(String::new())),
            chat_open: RefCell::new(Some(false)),
            chat_input: RefCell::new(Some(String::new())),
            chat_body: RefCell::new(Some(Vec::new())),
            chat_scrolls: Cell::new(0),
            focused: RefCell::new(None),
            navigations: RefCell::new(Vec::new()),
        }
    }

    /// No optional elements at all.
    pub fn bare() -> Self {
        Self {
            toggle_icon: RefCell::new(None),
            navbar_scrolled: RefCell::new(None),
            greeting: RefCell::new(None),
            chat_open: RefCell::new(None),
            chat_input: RefCell::new(None),
            chat_body: RefCell::new(None),
            ..Self::full()
        }
    }

    pub fn add_candidate(&self, top: f64) -> Rc<FakeReveal> {
        let candidate = FakeReveal::at(top);
        self.candidates.borrow_mut().push(Rc::clone(&candidate));
        candidate
    }

    pub fn type_input(&self, text: &str) {
        *self.chat_input.borrow_mut() = Some(text.to_owned());
    }

    pub fn body(&self) -> Vec<ChatMessage> {
        self.chat_body.borrow().clone().unwrap_or_default()
    }

    pub fn icon(&self) -> Option<String> {
        self.toggle_icon.borrow().clone()
    }

    pub fn attribute(&self) -> Option<String> {
        self.theme_attribute.borrow().clone()
    }
}

impl ThemeHost for FakePage {
    fn theme_attribute(&self) -> Option<String> {
        self.attribute()
    }

    fn set_theme_attribute(&self, value: Option<&str>) {
        *self.theme_attribute.borrow_mut() = value.map(str::to_owned);
    }

    fn set_toggle_icon(&self, icon: &str) -> bool {
        let mut slot = self.toggle_icon.borrow_mut();
        match slot.as_mut() {
            Some(current) => {
                icon.clone_into(current);
                true
            }
            None => false,
        }
    }
}

impl ScrollHost for FakePage {
    type Candidate = Rc<FakeReveal>;

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn set_navbar_scrolled(&self, scrolled: bool) -> bool {
        let mut slot = self.navbar_scrolled.borrow_mut();
        match slot.as_mut() {
            Some(current) => {
                *current = scrolled;
                true
            }
            None => false,
        }
    }

    fn reveal_candidates(&self) -> Vec<Self::Candidate> {
        self.candidates.borrow().clone()
    }
}

impl GreetingHost for FakePage {
    fn set_greeting(&self, text: &str) -> bool {
        let mut slot = self.greeting.borrow_mut();
        match slot.as_mut() {
            Some(current) => {
                text.clone_into(current);
                true
            }
            None => false,
        }
    }
}

impl ChatHost for FakePage {
    fn toggle_chat_window(&self) -> Option<bool> {
        let mut slot = self.chat_open.borrow_mut();
        let open = slot.as_mut()?;
        *open = !*open;
        Some(*open)
    }

    fn chat_input(&self) -> Option<String> {
        self.chat_input.borrow().clone()
    }

    fn clear_chat_input(&self) {
        if let Some(input) = self.chat_input.borrow_mut().as_mut() {
            input.clear();
        }
    }

    fn append_chat_message(&self, message: &ChatMessage) -> bool {
        match self.chat_body.borrow_mut().as_mut() {
            Some(body) => {
                body.push(message.clone());
                true
            }
            None => false,
        }
    }

    fn scroll_chat_to_bottom(&self) {
        self.chat_scrolls.set(self.chat_scrolls.get() + 1);
    }
}

impl Navigator for FakePage {
    fn navigate(&self, href: &str) {
        self.navigations.borrow_mut().push(href.to_owned());
    }
}

impl PageHost for FakePage {
    fn focused_id(&self) -> Option<String> {
        self.focused.borrow().clone()
    }
}

/// Scheduler that holds tasks until the test advances time.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    tasks: Vec<(Duration, Box<dyn FnOnce()>)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Advance the clock and run every task that came due, earliest first.
    pub fn advance(&self, by: Duration) -> usize {
        let due = {
            let mut clock = self.inner.borrow_mut();
            clock.now += by;
            let now = clock.now;
            let (mut due, rest): (Vec<_>, Vec<_>) = clock.tasks.drain(..).partition(|(at, _)| *at <= now);
            clock.tasks = rest;
            due.sort_by_key(|(at, _)| *at);
            due
        };
        let ran = due.len();
        for (_, task) in due {
            task();
        }
        ran
    }
}

impl ReplyScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut clock = self.inner.borrow_mut();
        let at = clock.now + delay;
        clock.tasks.push((at, task));
    }
}
