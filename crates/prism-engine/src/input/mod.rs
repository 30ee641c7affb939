//! Keyboard handling for the render loop.
//!
//! The lessons only react to one key, so this stays a thin mapping over winit
//! key events rather than a full input-state tracker.

mod keys;

pub use keys::is_exit_key;
