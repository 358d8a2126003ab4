//! # sorabora-site
//!
//! WASM presentation scripts for the G.M.T. Sorabora hotel site: persisted
//! light/dark theme, navbar scroll styling, one-way scroll reveal, the
//! time-of-day greeting, the "Book Now" helper and the Miyuguna chat widget.
//!
//! Behaviors are plain Rust over small host traits (`dom`), so they run and
//! test natively. The `hydrate` feature binds them to the browser with
//! `web-sys` and registers the event listeners at startup.

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod state;
pub mod util;
