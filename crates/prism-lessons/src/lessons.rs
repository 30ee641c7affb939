//! The three lessons: their shaders and hard-coded vertex data.

use prism_engine::paint::Color;
use prism_engine::render::{ColoredVertex, Position};

use crate::Lesson;

/// Window background for every lesson.
pub const CLEAR_COLOR: Color = Color::rgba(0.2, 0.3, 0.3, 1.0);

pub const POSITION_VS: &str = include_str!("shaders/position.vert.wgsl");
pub const ORANGE_FS: &str = include_str!("shaders/orange.frag.wgsl");
pub const VERTEX_COLOR_VS: &str = include_str!("shaders/vertex_color.vert.wgsl");
pub const VERTEX_COLOR_FS: &str = include_str!("shaders/vertex_color.frag.wgsl");

/// One triangle, green / red / blue corners interpolated across the face.
pub static COLORED_TRIANGLE: [ColoredVertex; 3] = [
    ColoredVertex::new([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0]), // bottom left
    ColoredVertex::new([0.5, -0.5, 0.0], [1.0, 0.0, 0.0]),  // bottom right
    ColoredVertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0]),   // top
];

/// Two small triangles side by side, packed into one buffer.
pub static TWO_TRIANGLES: [Position; 6] = [
    // right
    Position::new(0.25, -0.25, 0.0),
    Position::new(0.75, -0.25, 0.0),
    Position::new(0.50, 0.25, 0.0),
    // left
    Position::new(-0.25, -0.25, 0.0),
    Position::new(-0.75, -0.25, 0.0),
    Position::new(-0.50, 0.25, 0.0),
];

/// Left triangle of the separate-buffer lesson.
pub static FIRST_TRIANGLE: [Position; 3] = [
    Position::new(-0.75, -0.5, 0.0),
    Position::new(0.0, -0.5, 0.0),
    Position::new(-0.35, 0.5, 0.0),
];

/// Right triangle of the separate-buffer lesson; shares a corner with the first.
pub static SECOND_TRIANGLE: [Position; 3] = [
    Position::new(0.0, -0.5, 0.0),
    Position::new(0.75, -0.5, 0.0),
    Position::new(0.35, 0.5, 0.0),
];

pub fn colored_triangle() -> Lesson<ColoredVertex> {
    Lesson {
        title: "Triangle",
        vertex_shader: VERTEX_COLOR_VS,
        fragment_shader: VERTEX_COLOR_FS,
        batches: vec![&COLORED_TRIANGLE[..]],
    }
}

pub fn two_triangles_one_buffer() -> Lesson<Position> {
    Lesson {
        title: "Two triangles, one buffer",
        vertex_shader: POSITION_VS,
        fragment_shader: ORANGE_FS,
        batches: vec![&TWO_TRIANGLES[..]],
    }
}

pub fn two_triangles_two_buffers() -> Lesson<Position> {
    Lesson {
        title: "Two triangles, two buffers",
        vertex_shader: POSITION_VS,
        fragment_shader: ORANGE_FS,
        batches: vec![&FIRST_TRIANGLE[..], &SECOND_TRIANGLE[..]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::render::{
        byte_len, check_interface, check_vertex_inputs, compile, ShaderError, ShaderStage, Vertex,
    };

    fn in_ndc(p: [f32; 3]) -> bool {
        p.iter().all(|c| (-1.0..=1.0).contains(c))
    }

    #[test]
    fn vertex_counts_form_whole_triangles() {
        assert_eq!(colored_triangle().vertex_count(), 3);
        assert_eq!(two_triangles_one_buffer().vertex_count(), 6);
        assert_eq!(two_triangles_two_buffers().vertex_count(), 6);

        for batch in two_triangles_two_buffers().batches {
            assert_eq!(batch.len() % 3, 0);
        }
    }

    #[test]
    fn buffer_sizes_match_float_layout() {
        assert_eq!(byte_len::<ColoredVertex>(COLORED_TRIANGLE.len()), 72);
        assert_eq!(byte_len::<Position>(TWO_TRIANGLES.len()), 72);
        assert_eq!(byte_len::<Position>(FIRST_TRIANGLE.len()), 36);
        assert_eq!(byte_len::<Position>(SECOND_TRIANGLE.len()), 36);
    }

    #[test]
    fn all_vertices_are_inside_ndc() {
        assert!(COLORED_TRIANGLE.iter().all(|v| in_ndc(v.position)));
        assert!(TWO_TRIANGLES
            .iter()
            .chain(&FIRST_TRIANGLE)
            .chain(&SECOND_TRIANGLE)
            .all(|v| in_ndc(v.position)));
    }

    #[test]
    fn one_buffer_and_two_buffer_lessons_draw_separate_shapes() {
        let right = &TWO_TRIANGLES[..3];
        let left = &TWO_TRIANGLES[3..];
        assert!(right.iter().all(|v| v.position[0] > 0.0));
        assert!(left.iter().all(|v| v.position[0] < 0.0));

        // The two-buffer triangles touch at the origin's bottom edge.
        assert_eq!(FIRST_TRIANGLE[1], SECOND_TRIANGLE[0]);
    }

    #[test]
    fn clear_color_is_opaque_teal() {
        assert_eq!(CLEAR_COLOR, Color::rgba(0.2, 0.3, 0.3, 1.0));
    }

    #[test]
    fn flat_shaders_compile_and_link() {
        let vs = compile(ShaderStage::Vertex, "position", POSITION_VS).unwrap();
        let fs = compile(ShaderStage::Fragment, "orange", ORANGE_FS).unwrap();
        assert_eq!(check_interface(&vs, &fs), Ok(()));
    }

    #[test]
    fn vertex_color_shaders_compile_and_link() {
        let vs = compile(ShaderStage::Vertex, "vertex color", VERTEX_COLOR_VS).unwrap();
        let fs = compile(ShaderStage::Fragment, "vertex color", VERTEX_COLOR_FS).unwrap();
        assert_eq!(check_interface(&vs, &fs), Ok(()));
    }

    #[test]
    fn shader_inputs_match_vertex_layouts() {
        let vs = compile(ShaderStage::Vertex, "vertex color", VERTEX_COLOR_VS).unwrap();
        assert_eq!(check_vertex_inputs(vs.inputs(), &[ColoredVertex::layout()]), Ok(()));

        let vs = compile(ShaderStage::Vertex, "position", POSITION_VS).unwrap();
        assert_eq!(check_vertex_inputs(vs.inputs(), &[Position::layout()]), Ok(()));
    }

    #[test]
    fn color_shader_is_not_fed_by_position_only_layout() {
        let vs = compile(ShaderStage::Vertex, "vertex color", VERTEX_COLOR_VS).unwrap();
        let err = check_vertex_inputs(vs.inputs(), &[Position::layout()]).unwrap_err();
        assert!(matches!(err, ShaderError::VertexInput { location: 1, .. }), "{err:?}");
    }

    #[test]
    fn lesson_shaders_need_no_device_features() {
        for (stage, source) in [
            (ShaderStage::Vertex, POSITION_VS),
            (ShaderStage::Fragment, ORANGE_FS),
            (ShaderStage::Vertex, VERTEX_COLOR_VS),
            (ShaderStage::Fragment, VERTEX_COLOR_FS),
        ] {
            let shader = compile(stage, "lesson", source).unwrap();
            assert_eq!(shader.check_features(wgpu::Features::empty()), Ok(()));
        }
    }
}
