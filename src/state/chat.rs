//! Miyuguna, the canned-response chat widget.
//!
//! Replies come from fixed keyword rules and land after a fixed delay as
//! detached tasks; nothing is sent over the network.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::rc::Rc;
use std::time::Duration;

pub const ROOM_REPLY: &str = "We have 12 luxury rooms with lake views.";
pub const GREETING_REPLY: &str = "Ayubowan! Welcome to G.M.T. Sorabora.";
pub const FALLBACK_REPLY: &str = "I'm not sure about that, but Sorabora Lake is beautiful this time of year!";

/// Diagnostic logged when the chat window is missing from the page.
pub const MISSING_WINDOW_MESSAGE: &str = "Miyuguna Error: Could not find #chat-window element";

pub const SEND_KEY: &str = "Enter";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

/// A single transcript entry. Appended, never edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Bot, text: text.into() }
    }
}

/// Canned Miyuguna replies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    RoomAvailability,
    Greeting,
    Fallback,
}

impl Reply {
    /// Pick a reply for already lower-cased text. First match wins: `room`
    /// is checked before `hello`/`hi`, whatever order they appear in.
    pub fn for_text(lowered: &str) -> Self {
        if lowered.contains("room") {
            Self::RoomAvailability
        } else if lowered.contains("hello") || lowered.contains("hi") {
            Self::Greeting
        } else {
            Self::Fallback
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::RoomAvailability => ROOM_REPLY,
            Self::Greeting => GREETING_REPLY,
            Self::Fallback => FALLBACK_REPLY,
        }
    }
}

/// True for an Enter press while the chat input holds focus, no matter
/// which element dispatched the event.
pub fn is_send_key(key: &str, focused_id: Option<&str>, input_id: &str) -> bool {
    key == SEND_KEY && focused_id == Some(input_id)
}

/// Page surface the chat widget drives.
pub trait ChatHost {
    /// Toggle the window's open class and return the new visibility, or
    /// `None` when the window element is missing.
    fn toggle_chat_window(&self) -> Option<bool>;
    fn chat_input(&self) -> Option<String>;
    fn clear_chat_input(&self);
    /// Returns `false` when the page has no chat body to append to.
    fn append_chat_message(&self, message: &ChatMessage) -> bool;
    fn scroll_chat_to_bottom(&self);
}

/// Runs a task once after a delay.
///
/// Tasks are detached: there is no cancellation, and overlapping tasks
/// complete in timer order only.
pub trait ReplyScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Miyuguna chat widget: visibility toggle, send, delayed canned reply.
///
/// The transcript lives only in the page's chat body; the widget keeps no
/// copy of it.
pub struct ChatWidget<H, S> {
    host: Rc<H>,
    scheduler: S,
    reply_delay: Duration,
}

impl<H, S> ChatWidget<H, S>
where
    H: ChatHost + 'static,
    S: ReplyScheduler,
{
    pub fn new(host: Rc<H>, scheduler: S, reply_delay: Duration) -> Self {
        Self { host, scheduler, reply_delay }
    }

    /// Open or close the window. A missing window is logged and ignored.
    pub fn toggle_visibility(&self) -> Option<bool> {
        let open = self.host.toggle_chat_window();
        if open.is_none() {
            log::error!("{MISSING_WINDOW_MESSAGE}");
        }
        open
    }

    /// Send the current input and schedule the bot reply.
    ///
    /// Returns `false` without touching the page when the input is missing,
    /// empty or whitespace-only. When the chat body is missing the input is
    /// kept and no reply is scheduled, so nothing the visitor typed is lost.
    pub fn send_message(&self) -> bool {
        let Some(text) = self.host.chat_input() else {
            return false;
        };
        if text.trim().is_empty() {
            return false;
        }

        if !self.host.append_chat_message(&ChatMessage::user(text.as_str())) {
            log::warn!("miyuguna: no chat body; message kept in input");
            return false;
        }
        self.host.clear_chat_input();
        self.host.scroll_chat_to_bottom();

        let lowered = text.to_lowercase();
        log::debug!("miyuguna: reply scheduled in {:?}", self.reply_delay);

        let host = Rc::clone(&self.host);
        self.scheduler.schedule(
            self.reply_delay,
            Box::new(move || {
                let reply = ChatMessage::bot(Reply::for_text(&lowered).text());
                if host.append_chat_message(&reply) {
                    host.scroll_chat_to_bottom();
                } else {
                    log::warn!("miyuguna: chat body gone before reply arrived");
                }
            }),
        );
        true
    }

    /// Global keypress hook.
    pub fn on_key(&self, key: &str, focused_id: Option<&str>, input_id: &str) -> bool {
        is_send_key(key, focused_id, input_id) && self.send_message()
    }
}
