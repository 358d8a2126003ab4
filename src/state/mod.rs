//! Page behaviors that react to user events.
//!
//! DESIGN
//! ======
//! Each behavior owns a narrow host trait and no other behavior's state, so
//! any of them can be absent from a page without affecting the rest.

pub mod chat;
pub mod scroll;
pub mod theme;
