use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// A vertex type that can be uploaded and described to the pipeline.
pub trait Vertex: Pod {
    fn layout() -> wgpu::VertexBufferLayout<'static>;
}

/// Size in bytes of `count` vertices of type `V`.
#[inline]
pub const fn byte_len<V>(count: usize) -> u64 {
    (count * std::mem::size_of::<V>()) as u64
}

/// Position-only vertex (NDC).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Position {
    pub position: [f32; 3],
}

impl Position {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

impl Vertex for Position {
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Position>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Position followed by an RGB color, interleaved.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColoredVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

impl Vertex for ColoredVertex {
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColoredVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// A static vertex buffer and the number of vertices in it.
pub struct Mesh {
    label: String,
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl Mesh {
    /// Uploads `vertices` into a new vertex buffer.
    pub fn upload<V: Vertex>(device: &wgpu::Device, label: &str, vertices: &[V]) -> Result<Self> {
        let vertex_count =
            u32::try_from(vertices.len()).with_context(|| format!("mesh '{label}' is too large"))?;

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!(
            "uploaded mesh '{label}': {vertex_count} vertices, {} bytes",
            byte_len::<V>(vertices.len())
        );

        Ok(Self {
            label: label.to_owned(),
            buffer,
            vertex_count,
        })
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        log::debug!("releasing mesh '{}'", self.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_three_packed_floats() {
        assert_eq!(std::mem::size_of::<Position>(), 3 * 4);
        let layout = Position::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn colored_vertex_interleaves_color_after_position() {
        assert_eq!(std::mem::size_of::<ColoredVertex>(), 6 * 4);
        let layout = ColoredVertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].offset, 12);
    }

    #[test]
    fn byte_len_is_components_times_count_times_four() {
        assert_eq!(byte_len::<Position>(3), 3 * 3 * 4);
        assert_eq!(byte_len::<Position>(6), 6 * 3 * 4);
        assert_eq!(byte_len::<ColoredVertex>(3), 3 * 6 * 4);
        assert_eq!(byte_len::<Position>(0), 0);
    }

    #[test]
    fn casting_matches_byte_len() {
        let verts = [Position::new(0.0, 0.5, 0.0), Position::new(-0.5, -0.5, 0.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len() as u64, byte_len::<Position>(verts.len()));
    }
}
