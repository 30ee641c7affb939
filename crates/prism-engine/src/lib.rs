//! Prism engine crate.
//!
//! The platform and GPU runtime the triangle lessons are built on: one window,
//! one wgpu device, a fixed-function frame loop, and the helpers to compile a
//! shader pair and draw static vertex buffers in NDC.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
