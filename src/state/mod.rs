//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs with no `web_sys` dependency so interaction
//! rules can be exercised by native unit tests. Pages own the signals that
//! wrap these structs and translate DOM events into method calls.

pub mod otp;
