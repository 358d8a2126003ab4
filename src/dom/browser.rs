//! `web-sys` implementation of the page host traits.
//!
//! Every optional element is looked up by id on each call, so markup that
//! lacks an element simply skips the related effect. DOM calls that report a
//! `JsValue` error are logged at warn level.

use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, Window};

use super::PageHost;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::chat::{ChatHost, ChatMessage, ChatRole, ReplyScheduler};
use crate::state::scroll::{RevealCandidate, ScrollHost};
use crate::state::theme::{THEME_ATTRIBUTE, ThemeHost};
use crate::util::booking::Navigator;
use crate::util::greeting::GreetingHost;

fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{what} failed: {e:?}");
            None
        }
    }
}

/// The live document plus the config that names its elements.
pub struct BrowserPage {
    window: Window,
    document: Document,
    config: Rc<SiteConfig>,
}

impl BrowserPage {
    pub fn new(config: Rc<SiteConfig>) -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoDocument)?;
        Ok(Self { window, document, config })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn chat_input_element(&self) -> Option<HtmlInputElement> {
        let el = self.element(&self.config.ids.chat_input)?;
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(input),
            Err(_) => {
                log::warn!("#{} is not an <input>", self.config.ids.chat_input);
                None
            }
        }
    }

    fn message_class(&self, role: ChatRole) -> &str {
        match role {
            ChatRole::User => &self.config.classes.user_message,
            ChatRole::Bot => &self.config.classes.bot_message,
        }
    }
}

impl ThemeHost for BrowserPage {
    fn theme_attribute(&self) -> Option<String> {
        self.document.document_element()?.get_attribute(THEME_ATTRIBUTE)
    }

    fn set_theme_attribute(&self, value: Option<&str>) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        match value {
            Some(value) => {
                warn_on_err("set data-theme", root.set_attribute(THEME_ATTRIBUTE, value));
            }
            None => {
                warn_on_err("remove data-theme", root.remove_attribute(THEME_ATTRIBUTE));
            }
        }
    }

    fn set_toggle_icon(&self, icon: &str) -> bool {
        let Some(button) = self.element(&self.config.ids.theme_button) else {
            return false;
        };
        button.set_text_content(Some(icon));
        true
    }
}

/// A `.reveal` element.
pub struct BrowserReveal {
    element: Element,
    config: Rc<SiteConfig>,
}

impl RevealCandidate for BrowserReveal {
    fn is_revealed(&self) -> bool {
        self.element.class_list().contains(&self.config.classes.revealed)
    }

    fn top(&self) -> f64 {
        self.element.get_bounding_client_rect().top()
    }

    fn reveal(&self) {
        warn_on_err("reveal", self.element.class_list().add_1(&self.config.classes.revealed));
    }
}

impl ScrollHost for BrowserPage {
    type Candidate = BrowserReveal;

    fn scroll_y(&self) -> f64 {
        warn_on_err("read scrollY", self.window.scroll_y()).unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        warn_on_err("read innerHeight", self.window.inner_height())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn set_navbar_scrolled(&self, scrolled: bool) -> bool {
        let Some(navbar) = self.element(&self.config.ids.navbar) else {
            return false;
        };
        warn_on_err(
            "toggle navbar class",
            navbar.class_list().toggle_with_force(&self.config.classes.navbar_scrolled, scrolled),
        );
        true
    }

    fn reveal_candidates(&self) -> Vec<Self::Candidate> {
        let live = self.document.get_elements_by_class_name(&self.config.classes.reveal);
        (0..live.length())
            .filter_map(|i| live.item(i))
            .map(|element| BrowserReveal { element, config: Rc::clone(&self.config) })
            .collect()
    }
}

impl GreetingHost for BrowserPage {
    fn set_greeting(&self, text: &str) -> bool {
        let Some(el) = self.element(&self.config.ids.greeting) else {
            return false;
        };
        el.set_text_content(Some(text));
        true
    }
}

impl ChatHost for BrowserPage {
    fn toggle_chat_window(&self) -> Option<bool> {
        let chat_window = self.element(&self.config.ids.chat_window)?;
        let classes = chat_window.class_list();
        let open = &self.config.classes.chat_open;
        Some(warn_on_err("toggle chat window", classes.toggle(open)).unwrap_or_else(|| classes.contains(open)))
    }

    fn chat_input(&self) -> Option<String> {
        self.chat_input_element().map(|input| input.value())
    }

    fn clear_chat_input(&self) {
        if let Some(input) = self.chat_input_element() {
            input.set_value("");
        }
    }

    fn append_chat_message(&self, message: &ChatMessage) -> bool {
        let Some(body) = self.element(&self.config.ids.chat_body) else {
            return false;
        };
        let Some(div) = warn_on_err("create chat message", self.document.create_element("div")) else {
            return false;
        };
        div.set_class_name(self.message_class(message.role));
        div.set_text_content(Some(&message.text));
        warn_on_err("append chat message", body.append_child(&div)).is_some()
    }

    fn scroll_chat_to_bottom(&self) {
        if let Some(body) = self.element(&self.config.ids.chat_body) {
            body.set_scroll_top(body.scroll_height());
        }
    }
}

impl Navigator for BrowserPage {
    fn navigate(&self, href: &str) {
        warn_on_err("navigate", self.window.location().set_href(href));
    }
}

impl PageHost for BrowserPage {
    fn focused_id(&self) -> Option<String> {
        self.document.active_element().map(|el| el.id())
    }
}

/// Runs each reply as a detached `spawn_local` task after a timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerScheduler;

impl ReplyScheduler for TimerScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            task();
        });
    }
}
