//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of page chrome and receive everything they need
//! through props; route-level state stays in `pages`.

pub mod category_tile;
pub mod scroll_to_top;
