//! Windowed triangle lessons.
//!
//! Each binary picks one [`Lesson`] from [`lessons`] and hands it to [`run`]:
//! open an 800x600 window, compile the lesson's shader pair, upload its
//! vertices, then clear/draw/present until Escape or the close button.
//!
//! Set `PRISM_WIREFRAME=1` to draw triangle edges only, and `RUST_LOG=debug`
//! for GPU lifecycle logging.

mod lesson;
pub mod lessons;
mod options;

use anyhow::Result;

use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::render::Vertex;
use prism_engine::window::{Runtime, RuntimeConfig};

pub use lesson::{Lesson, LessonApp};
pub use options::{parse_flag, LessonOptions, WIREFRAME_VAR};

/// Runs `lesson` in its own window until it is closed.
pub fn run<V: Vertex>(lesson: Lesson<V>) -> Result<()> {
    init_logging(LoggingConfig::default());

    let options = LessonOptions::from_env();
    log::info!("starting '{}' ({options:?})", lesson.title);

    let config = RuntimeConfig {
        title: lesson.title.to_string(),
        ..RuntimeConfig::default()
    };

    // Literal colors should reach the screen unconverted.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        optional_features: options.optional_features(),
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init, LessonApp::new(lesson, options.pipeline()))
}
