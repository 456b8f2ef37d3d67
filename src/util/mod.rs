//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser environment concerns from page and
//! component logic. Each helper no-ops when no window is available.

pub mod focus;
pub mod notify;
pub mod scroll;
