//! Small helpers shared by the site wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! navigation) from behavior logic to keep it testable.

pub mod booking;
pub mod greeting;
pub mod storage;
