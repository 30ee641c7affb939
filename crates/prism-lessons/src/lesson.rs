use anyhow::Result;

use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::render::{
    build_pipeline, compile, draw_meshes, Mesh, PipelineOptions, RenderCtx, ShaderError,
    ShaderProgram, ShaderStage, Vertex,
};

use crate::lessons::CLEAR_COLOR;

/// A fixed shader pair and the vertex arrays drawn with it.
///
/// Each batch is uploaded to its own vertex buffer and drawn with its own call.
pub struct Lesson<V: Vertex> {
    pub title: &'static str,
    pub vertex_shader: &'static str,
    pub fragment_shader: &'static str,
    pub batches: Vec<&'static [V]>,
}

impl<V: Vertex> Lesson<V> {
    /// Total vertices across all batches.
    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.len()).sum()
    }
}

/// GPU objects of a running lesson, created once in `setup`.
struct Scene {
    /// `None` when the shaders failed to compile or link.
    pipeline: Option<wgpu::RenderPipeline>,
    meshes: Vec<Mesh>,
}

impl Drop for Scene {
    fn drop(&mut self) {
        log::debug!(
            "releasing lesson resources: {} vertex buffers, pipeline: {}",
            self.meshes.len(),
            self.pipeline.is_some()
        );
    }
}

/// Drives one [`Lesson`]: clear, draw every batch, present, until the window closes.
pub struct LessonApp<V: Vertex> {
    lesson: Lesson<V>,
    options: PipelineOptions,
    scene: Option<Scene>,
}

impl<V: Vertex> LessonApp<V> {
    pub fn new(lesson: Lesson<V>, options: PipelineOptions) -> Self {
        Self {
            lesson,
            options,
            scene: None,
        }
    }

    /// Compiles both stages, links them and builds the pipeline.
    fn build_program(&self, ctx: &RenderCtx<'_>) -> Result<wgpu::RenderPipeline, ShaderError> {
        let title = self.lesson.title;

        let vertex = compile(
            ShaderStage::Vertex,
            &format!("{title} vertex shader"),
            self.lesson.vertex_shader,
        )?;
        let fragment = compile(
            ShaderStage::Fragment,
            &format!("{title} fragment shader"),
            self.lesson.fragment_shader,
        )?;

        let program = ShaderProgram::link(ctx.device, title, vertex, fragment)?;
        build_pipeline(ctx, &program, V::layout(), self.options)
    }
}

impl<V: Vertex> App for LessonApp<V> {
    fn setup(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let pipeline = match self.build_program(ctx) {
            Ok(pipeline) => Some(pipeline),
            Err(err) => {
                log::error!("{err}");
                log::warn!("'{}' continues without a usable shader program", self.lesson.title);
                None
            }
        };

        let meshes = self
            .lesson
            .batches
            .iter()
            .enumerate()
            .map(|(i, batch)| {
                Mesh::upload(ctx.device, &format!("{} vertices #{i}", self.lesson.title), batch)
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "'{}': {} vertices in {} buffer(s)",
            self.lesson.title,
            self.lesson.vertex_count(),
            meshes.len()
        );

        self.scene = Some(Scene { pipeline, meshes });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let scene = self.scene.as_ref();

        ctx.render(CLEAR_COLOR, |_rctx, target| {
            if let Some(Scene {
                pipeline: Some(pipeline),
                meshes,
            }) = scene
            {
                draw_meshes(target, pipeline, meshes);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons;

    #[test]
    fn app_starts_without_gpu_objects() {
        let app = LessonApp::new(lessons::colored_triangle(), PipelineOptions::default());
        assert!(app.scene.is_none());
        assert_eq!(app.lesson.vertex_count(), 3);
    }

    #[test]
    fn empty_lesson_has_no_vertices() {
        let lesson: Lesson<prism_engine::render::Position> = Lesson {
            title: "empty",
            vertex_shader: lessons::POSITION_VS,
            fragment_shader: lessons::ORANGE_FS,
            batches: Vec::new(),
        };
        assert_eq!(lesson.vertex_count(), 0);
    }
}
