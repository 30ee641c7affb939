//! The same pair of triangles, each in its own vertex buffer and draw call.

fn main() -> anyhow::Result<()> {
    prism_lessons::run(prism_lessons::lessons::two_triangles_two_buffers())
}
