//! Two triangles drawn from one vertex buffer with a single draw call.

fn main() -> anyhow::Result<()> {
    prism_lessons::run(prism_lessons::lessons::two_triangles_one_buffer())
}
