//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped signals and effects and delegates
//! rendering details to `components`.

pub mod about;
pub mod home;
pub mod verify;
