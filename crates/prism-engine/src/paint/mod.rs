//! Colors shared between the frame loop and renderers.

pub mod color;

pub use color::Color;
