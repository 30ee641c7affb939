use prism_engine::render::PipelineOptions;

/// Environment variable that switches the lessons to wireframe drawing.
pub const WIREFRAME_VAR: &str = "PRISM_WIREFRAME";

/// Runtime switches read from the environment.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct LessonOptions {
    pub wireframe: bool,
}

impl LessonOptions {
    pub fn from_env() -> Self {
        let wireframe = std::env::var(WIREFRAME_VAR)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self { wireframe }
    }

    pub fn pipeline(&self) -> PipelineOptions {
        PipelineOptions {
            wireframe: self.wireframe,
        }
    }

    /// Device features worth asking for, if the adapter has them.
    pub fn optional_features(&self) -> wgpu::Features {
        if self.wireframe {
            wgpu::Features::POLYGON_MODE_LINE
        } else {
            wgpu::Features::empty()
        }
    }
}

/// `1`, `true`, `yes` and `on` (any case, surrounding spaces ignored) are true.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
