//! Site wiring: one `Site` value owns every behavior and the hydrate build
//! registers it against the page's load, scroll and keypress events.
//!
//! ARCHITECTURE
//! ============
//! `Site` is generic over the page, the reply scheduler and the key-value
//! store so the whole event flow runs natively in tests. The `hydrate`
//! section below instantiates it over `web-sys`, keeps it in a thread-local
//! and exports the click handlers the markup calls by name.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::dom::PageHost;
use crate::state::chat::{ChatWidget, ReplyScheduler};
use crate::state::scroll::{ScrollEffects, ScrollTick};
use crate::state::theme::{self, Theme};
use crate::util::booking;
use crate::util::greeting::{self, Greeting};
use crate::util::storage::KeyValueStore;

/// What the load handler did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadReport {
    pub theme: Theme,
    pub scroll: ScrollTick,
    pub greeting: Option<Greeting>,
}

pub struct Site<P, S, K> {
    config: Rc<SiteConfig>,
    page: Rc<P>,
    store: K,
    scroll: ScrollEffects,
    chat: ChatWidget<P, S>,
}

impl<P, S, K> Site<P, S, K>
where
    P: PageHost + 'static,
    S: ReplyScheduler,
    K: KeyValueStore,
{
    pub fn new(config: Rc<SiteConfig>, page: Rc<P>, store: K, scheduler: S) -> Self {
        let scroll = ScrollEffects::from_config(&config);
        let chat = ChatWidget::new(Rc::clone(&page), scheduler, config.reply_delay());
        Self { config, page, store, scroll, chat }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn chat(&self) -> &ChatWidget<P, S> {
        &self.chat
    }

    /// DOM-ready handler: persisted theme first, then the initial scroll
    /// tick so above-the-fold elements show, then the greeting.
    pub fn on_load(&self, hour: u32) -> LoadReport {
        let theme = theme::apply_persisted_theme(&self.store, &*self.page, &self.config.theme_storage_key);
        let scroll = self.on_scroll();
        let greeting = greeting::render_greeting(&*self.page, hour);
        log::debug!("site loaded: theme={} revealed={} greeting={greeting:?}", theme.as_str(), scroll.revealed);
        LoadReport { theme, scroll, greeting }
    }

    pub fn on_scroll(&self) -> ScrollTick {
        self.scroll.on_scroll(&*self.page)
    }

    pub fn toggle_theme(&self) -> Theme {
        let next = theme::toggle_theme(&self.store, &*self.page, &self.config.theme_storage_key);
        log::debug!("theme toggled to {}", next.as_str());
        next
    }

    pub fn toggle_chat(&self) -> Option<bool> {
        self.chat.toggle_visibility()
    }

    pub fn send_chat(&self) -> bool {
        self.chat.send_message()
    }

    /// Document-wide keypress handler.
    pub fn on_key(&self, key: &str) -> bool {
        let focused = self.page.focused_id();
        self.chat.on_key(key, focused.as_deref(), &self.config.ids.chat_input)
    }

    pub fn open_booking(&self) {
        booking::open_booking(&*self.page, &self.config.booking_path);
    }
}

#[cfg(feature = "hydrate")]
pub use wasm::*;

#[cfg(feature = "hydrate")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, Event, EventTarget, KeyboardEvent};

    use super::Site;
    use crate::config::SiteConfig;
    use crate::dom::browser::{BrowserPage, TimerScheduler};
    use crate::error::SiteError;
    use crate::util::greeting::current_hour;
    use crate::util::storage::LocalStore;

    type BrowserSite = Site<BrowserPage, TimerScheduler, LocalStore>;

    thread_local! {
        static SITE: RefCell<Option<Rc<BrowserSite>>> = const { RefCell::new(None) };
    }

    fn with_site(action: &'static str, f: impl FnOnce(&BrowserSite)) {
        let site = SITE.with(|slot| slot.borrow().clone());
        match site {
            Some(site) => f(&site),
            None => log::warn!("{action} called before the site booted"),
        }
    }

    /// WASM entry point.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Trace) {
            log::warn!("logger already installed: {e}");
        }

        let config = SiteConfig::load();
        match config.level() {
            Ok(level) => log::set_max_level(level.to_level_filter()),
            Err(e) => log::warn!("{e}"),
        }

        if let Err(e) = boot(config) {
            log::error!("site boot failed: {e}");
        }
    }

    fn boot(config: SiteConfig) -> Result<(), SiteError> {
        let config = Rc::new(config);
        let page = Rc::new(BrowserPage::new(Rc::clone(&config))?);
        let site = Rc::new(Site::new(config, Rc::clone(&page), LocalStore, TimerScheduler));
        SITE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&site)));

        if page.document().ready_state() == "loading" {
            let on_ready = Rc::clone(&site);
            listen(page.document(), "DOMContentLoaded", false, move |_| {
                on_ready.on_load(current_hour());
            })?;
        } else {
            site.on_load(current_hour());
        }

        let on_scroll = Rc::clone(&site);
        listen(page.window(), "scroll", true, move |_| {
            on_scroll.on_scroll();
        })?;

        let on_key = Rc::clone(&site);
        listen(page.document(), "keypress", false, move |event: Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                on_key.on_key(&event.key());
            }
        })?;

        log::info!("site scripts ready");
        Ok(())
    }

    /// Attach a listener for the page's lifetime.
    fn listen(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), SiteError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| SiteError::Listener { event, detail: format!("{e:?}") })?;
        closure.forget();
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme() {
        with_site("toggleTheme", |site| {
            site.toggle_theme();
        });
    }

    #[wasm_bindgen(js_name = openBooking)]
    pub fn open_booking() {
        with_site("openBooking", BrowserSite::open_booking);
    }

    #[wasm_bindgen(js_name = toggleMiyuguna)]
    pub fn toggle_miyuguna() {
        with_site("toggleMiyuguna", |site| {
            site.toggle_chat();
        });
    }

    #[wasm_bindgen(js_name = sendMiyugunaMsg)]
    pub fn send_miyuguna_msg() {
        with_site("sendMiyugunaMsg", |site| {
            site.send_chat();
        });
    }
}
