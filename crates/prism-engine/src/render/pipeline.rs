use super::shader::capture_validation;
use super::{Mesh, RenderCtx, RenderTarget, ShaderError, ShaderProgram};

/// Per-pipeline rasterization choices.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PipelineOptions {
    /// Draw triangle edges only. Needs `POLYGON_MODE_LINE` on the device;
    /// falls back to filled polygons without it.
    pub wireframe: bool,
}

impl PipelineOptions {
    /// Polygon mode to use given the device features.
    pub fn polygon_mode(&self, features: wgpu::Features) -> wgpu::PolygonMode {
        if !self.wireframe {
            return wgpu::PolygonMode::Fill;
        }
        if features.contains(wgpu::Features::POLYGON_MODE_LINE) {
            wgpu::PolygonMode::Line
        } else {
            wgpu::PolygonMode::Fill
        }
    }
}

/// Builds a triangle-list pipeline drawing `program` over one vertex buffer
/// with the given layout into the surface format.
pub fn build_pipeline(
    ctx: &RenderCtx<'_>,
    program: &ShaderProgram,
    layout: wgpu::VertexBufferLayout<'_>,
    options: PipelineOptions,
) -> Result<wgpu::RenderPipeline, ShaderError> {
    let buffers = [layout];
    program.check_vertex_layout(&buffers)?;

    let polygon_mode = options.polygon_mode(ctx.features);
    if options.wireframe && polygon_mode == wgpu::PolygonMode::Fill {
        log::warn!("wireframe requested but POLYGON_MODE_LINE is unavailable; drawing filled");
    }

    let pipeline_layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prism pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

    let pipeline = capture_validation(ctx.device, program.label(), || {
        ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(program.label()),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: program.vertex_module(),
                entry_point: Some(program.vertex_entry()),
                compilation_options: Default::default(),
                buffers: &buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: program.fragment_module(),
                entry_point: Some(program.fragment_entry()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    })?;

    log::debug!("built pipeline '{}' ({polygon_mode:?})", program.label());
    Ok(pipeline)
}

/// Draws each mesh with `pipeline` on top of the already-cleared target.
pub fn draw_meshes(target: &mut RenderTarget<'_>, pipeline: &wgpu::RenderPipeline, meshes: &[Mesh]) {
    let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("prism draw pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target.color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });

    rpass.set_pipeline(pipeline);
    for mesh in meshes {
        // Empty buffers cannot be sliced.
        if mesh.vertex_count() == 0 {
            continue;
        }
        rpass.set_vertex_buffer(0, mesh.buffer().slice(..));
        rpass.draw(0..mesh.vertex_count(), 0..1);
    }
}
