//! GPU rendering helpers.
//!
//! Geometry is given directly in normalized device coordinates; nothing here
//! applies a projection. Each lesson owns the handles it creates (program,
//! pipeline, vertex buffers) and releases them by dropping them.

mod ctx;
pub mod mesh;
pub mod pipeline;
pub mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{byte_len, ColoredVertex, Mesh, Position, Vertex};
pub use pipeline::{build_pipeline, draw_meshes, PipelineOptions};
pub use shader::{
    capabilities_for, check_interface, check_vertex_inputs, compile, CompiledShader, ShaderError,
    ShaderProgram, ShaderStage, SlotType,
};
