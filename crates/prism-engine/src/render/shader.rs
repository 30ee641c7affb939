//! Shader compilation and program linking.
//!
//! WGSL sources are parsed and validated with `naga` before anything reaches
//! the device, so a broken shader produces a readable diagnostic instead of a
//! device-lost panic. "Linking" checks that the vertex stage writes every
//! `@location` the fragment stage reads, with the same type, and then creates
//! the wgpu shader modules the pipeline is built from.
//!
//! Compilation validates against every capability naga knows. Linking
//! validates again against what the device actually enabled, and catches
//! anything wgpu still rejects in a validation error scope.

use std::collections::BTreeMap;
use std::fmt;

use naga::front::wgsl;
use naga::valid::{Capabilities, ValidationFlags, Validator};

/// Programmable stage a shader source is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }

    fn to_naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure while compiling or linking a shader program.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// The source did not parse or validate. `log` is the rendered diagnostic.
    Compile {
        stage: ShaderStage,
        label: String,
        log: String,
    },
    /// The source has no entry point for the requested stage.
    MissingEntryPoint { stage: ShaderStage, label: String },
    /// The stage interfaces do not match.
    Link { log: String },
    /// A vertex-stage input is not fed correctly by the vertex buffer layout.
    VertexInput { location: u32, log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { stage, label, log } => {
                write!(f, "{stage} shader '{label}' failed to compile:\n{log}")
            }
            ShaderError::MissingEntryPoint { stage, label } => {
                write!(f, "{stage} shader '{label}' has no @{stage} entry point")
            }
            ShaderError::Link { log } => write!(f, "shader program failed to link: {log}"),
            ShaderError::VertexInput { location, log } => {
                write!(f, "vertex input @location({location}): {log}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// Type of one `@location` slot in a stage interface.
///
/// Interface values are always numeric scalars or vectors, so this is all the
/// information needed to compare two stages.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SlotType {
    pub kind: naga::ScalarKind,
    /// Scalar width in bytes.
    pub width: u8,
    /// 1 for scalars, 2..=4 for vectors.
    pub components: u8,
}

impl SlotType {
    fn from_inner(inner: &naga::TypeInner) -> Option<Self> {
        match *inner {
            naga::TypeInner::Scalar(scalar) => Some(Self {
                kind: scalar.kind,
                width: scalar.width,
                components: 1,
            }),
            naga::TypeInner::Vector { size, scalar } => Some(Self {
                kind: scalar.kind,
                width: scalar.width,
                components: size as u8,
            }),
            _ => None,
        }
    }

    /// Shader-side type a vertex format is read as.
    ///
    /// Normalized formats are read as floats; the byte width of the format is
    /// not reflected here. Returns `None` for formats without a plain mapping.
    pub fn from_vertex_format(format: wgpu::VertexFormat) -> Option<Self> {
        use naga::ScalarKind::{Float, Sint, Uint};
        use wgpu::VertexFormat as V;

        let (kind, components) = match format {
            V::Float32 | V::Float16 | V::Unorm8 | V::Snorm8 | V::Unorm16 | V::Snorm16 => (Float, 1),
            V::Float32x2 | V::Float16x2 | V::Unorm8x2 | V::Snorm8x2 | V::Unorm16x2
            | V::Snorm16x2 => (Float, 2),
            V::Float32x3 => (Float, 3),
            V::Float32x4 | V::Float16x4 | V::Unorm8x4 | V::Snorm8x4 | V::Unorm16x4
            | V::Snorm16x4 => (Float, 4),
            V::Uint32 | V::Uint16 | V::Uint8 => (Uint, 1),
            V::Uint32x2 | V::Uint16x2 | V::Uint8x2 => (Uint, 2),
            V::Uint32x3 => (Uint, 3),
            V::Uint32x4 | V::Uint16x4 | V::Uint8x4 => (Uint, 4),
            V::Sint32 | V::Sint16 | V::Sint8 => (Sint, 1),
            V::Sint32x2 | V::Sint16x2 | V::Sint8x2 => (Sint, 2),
            V::Sint32x3 => (Sint, 3),
            V::Sint32x4 | V::Sint16x4 | V::Sint8x4 => (Sint, 4),
            _ => return None,
        };

        Some(Self {
            kind,
            width: 4,
            components,
        })
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            naga::ScalarKind::Float => "f",
            naga::ScalarKind::Sint => "i",
            naga::ScalarKind::Uint => "u",
            naga::ScalarKind::Bool => return self.fmt_named(f, "bool"),
            _ => return self.fmt_named(f, "abstract"),
        };
        let scalar = format!("{prefix}{}", u32::from(self.width) * 8);
        self.fmt_named(f, &scalar)
    }
}

impl SlotType {
    fn fmt_named(&self, f: &mut fmt::Formatter<'_>, scalar: &str) -> fmt::Result {
        if self.components == 1 {
            f.write_str(scalar)
        } else {
            write!(f, "vec{}<{scalar}>", self.components)
        }
    }
}

/// A validated shader source for one stage.
///
/// This is the "shader object" of the program: it exists between compilation
/// and linking and is consumed by [`ShaderProgram::link`].
#[derive(Debug, Clone)]
pub struct CompiledShader {
    stage: ShaderStage,
    label: String,
    source: String,
    entry_point: String,
    module: naga::Module,
    inputs: BTreeMap<u32, SlotType>,
    outputs: BTreeMap<u32, SlotType>,
}

impl CompiledShader {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// `@location` inputs of the entry point.
    pub fn inputs(&self) -> &BTreeMap<u32, SlotType> {
        &self.inputs
    }

    /// `@location` outputs of the entry point.
    pub fn outputs(&self) -> &BTreeMap<u32, SlotType> {
        &self.outputs
    }

    /// Validates the source again, allowing only what `features` enables.
    pub fn check_features(&self, features: wgpu::Features) -> Result<(), ShaderError> {
        Validator::new(ValidationFlags::all(), capabilities_for(features))
            .validate(&self.module)
            .map(|_| ())
            .map_err(|e| ShaderError::Compile {
                stage: self.stage,
                label: self.label.clone(),
                log: e.emit_to_string(&self.source),
            })
    }
}

/// Shader capabilities granted by a set of device features.
pub fn capabilities_for(features: wgpu::Features) -> Capabilities {
    use wgpu::Features as F;

    let mut caps = Capabilities::empty();
    caps.set(Capabilities::IMMEDIATES, features.contains(F::IMMEDIATES));
    caps.set(Capabilities::FLOAT64, features.contains(F::SHADER_F64));
    caps.set(Capabilities::SHADER_FLOAT16, features.contains(F::SHADER_F16));
    caps.set(Capabilities::SHADER_INT64, features.contains(F::SHADER_INT64));
    caps.set(
        Capabilities::PRIMITIVE_INDEX,
        features.contains(F::SHADER_PRIMITIVE_INDEX),
    );
    caps.set(Capabilities::MULTIVIEW, features.contains(F::MULTIVIEW));
    caps.set(
        Capabilities::EARLY_DEPTH_TEST,
        features.contains(F::SHADER_EARLY_DEPTH_TEST),
    );
    caps.set(
        Capabilities::DUAL_SOURCE_BLENDING,
        features.contains(F::DUAL_SOURCE_BLENDING),
    );
    caps.set(Capabilities::CLIP_DISTANCE, features.contains(F::CLIP_DISTANCES));
    caps
}

/// Runs `create` inside a validation error scope on `device`.
///
/// Errors wgpu reports for the created object come back as `ShaderError::Link`
/// instead of reaching the device's uncaptured-error handler.
pub(crate) fn capture_validation<T>(
    device: &wgpu::Device,
    what: &str,
    create: impl FnOnce() -> T,
) -> Result<T, ShaderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = create();
    match pollster::block_on(scope.pop()) {
        None => Ok(value),
        Some(err) => Err(ShaderError::Link {
            log: format!("{what}: {err}"),
        }),
    }
}

/// Parses and validates a WGSL source for `stage`.
///
/// The first entry point of the matching stage is used.
pub fn compile(stage: ShaderStage, label: &str, source: &str) -> Result<CompiledShader, ShaderError> {
    let compile_error = |log: String| ShaderError::Compile {
        stage,
        label: label.to_owned(),
        log,
    };

    let module = wgsl::parse_str(source).map_err(|e| compile_error(e.emit_to_string(source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| compile_error(e.emit_to_string(source)))?;

    let entry = module
        .entry_points
        .iter()
        .find(|ep| ep.stage == stage.to_naga())
        .ok_or_else(|| ShaderError::MissingEntryPoint {
            stage,
            label: label.to_owned(),
        })?;

    let mut inputs = BTreeMap::new();
    for arg in &entry.function.arguments {
        collect_locations(&module, arg.ty, arg.binding.as_ref(), &mut inputs);
    }

    let mut outputs = BTreeMap::new();
    if let Some(result) = &entry.function.result {
        collect_locations(&module, result.ty, result.binding.as_ref(), &mut outputs);
    }

    log::debug!(
        "compiled {stage} shader '{label}' (entry '{}', {} inputs, {} outputs)",
        entry.name,
        inputs.len(),
        outputs.len()
    );

    let entry_point = entry.name.clone();
    Ok(CompiledShader {
        stage,
        label: label.to_owned(),
        source: source.to_owned(),
        entry_point,
        module,
        inputs,
        outputs,
    })
}

/// Records the `@location` slots of an argument or result, descending into
/// structs whose members carry the bindings.
fn collect_locations(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
    out: &mut BTreeMap<u32, SlotType>,
) {
    let inner = &module.types[ty].inner;
    match binding {
        Some(naga::Binding::Location { location, .. }) => {
            if let Some(slot) = SlotType::from_inner(inner) {
                out.insert(*location, slot);
            }
        }
        Some(naga::Binding::BuiltIn(_)) => {}
        None => {
            if let naga::TypeInner::Struct { members, .. } = inner {
                for member in members {
                    collect_locations(module, member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}

/// Checks that `vertex` writes every location `fragment` reads, with the same type.
pub fn check_interface(vertex: &CompiledShader, fragment: &CompiledShader) -> Result<(), ShaderError> {
    for (shader, expected) in [(vertex, ShaderStage::Vertex), (fragment, ShaderStage::Fragment)] {
        if shader.stage != expected {
            return Err(ShaderError::Link {
                log: format!(
                    "'{}' is a {} shader, expected a {expected} shader",
                    shader.label, shader.stage
                ),
            });
        }
    }

    for (location, read) in &fragment.inputs {
        match vertex.outputs.get(location) {
            None => {
                return Err(ShaderError::Link {
                    log: format!(
                        "fragment input @location({location}) {read} is not written by vertex shader '{}'",
                        vertex.label
                    ),
                });
            }
            Some(written) if written != read => {
                return Err(ShaderError::Link {
                    log: format!(
                        "@location({location}) type mismatch: vertex writes {written}, fragment reads {read}"
                    ),
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// A linked vertex/fragment pair, ready to build pipelines from.
pub struct ShaderProgram {
    label: String,
    vertex: wgpu::ShaderModule,
    fragment: wgpu::ShaderModule,
    vertex_entry: String,
    fragment_entry: String,
    vertex_inputs: BTreeMap<u32, SlotType>,
}

impl ShaderProgram {
    /// Links two compiled shaders into a program.
    ///
    /// The compiled shaders are consumed; only the device modules remain.
    pub fn link(
        device: &wgpu::Device,
        label: &str,
        vertex: CompiledShader,
        fragment: CompiledShader,
    ) -> Result<Self, ShaderError> {
        check_interface(&vertex, &fragment)?;
        vertex.check_features(device.features())?;
        fragment.check_features(device.features())?;

        let (vertex_module, fragment_module) = capture_validation(device, label, || {
            let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(vertex.label.as_str()),
                source: wgpu::ShaderSource::Wgsl(vertex.source.as_str().into()),
            });
            let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(fragment.label.as_str()),
                source: wgpu::ShaderSource::Wgsl(fragment.source.as_str().into()),
            });
            (vertex_module, fragment_module)
        })?;

        log::debug!(
            "linked program '{label}' ({} + {})",
            vertex.label,
            fragment.label
        );

        Ok(Self {
            label: label.to_owned(),
            vertex: vertex_module,
            fragment: fragment_module,
            vertex_entry: vertex.entry_point,
            fragment_entry: fragment.entry_point,
            vertex_inputs: vertex.inputs,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn vertex_module(&self) -> &wgpu::ShaderModule {
        &self.vertex
    }

    pub fn fragment_module(&self) -> &wgpu::ShaderModule {
        &self.fragment
    }

    pub fn vertex_entry(&self) -> &str {
        &self.vertex_entry
    }

    pub fn fragment_entry(&self) -> &str {
        &self.fragment_entry
    }

    /// Checks the vertex inputs against the attributes of `buffers`.
    pub fn check_vertex_layout(
        &self,
        buffers: &[wgpu::VertexBufferLayout<'_>],
    ) -> Result<(), ShaderError> {
        check_vertex_inputs(&self.vertex_inputs, buffers)
    }
}

/// Checks that every shader input is fed by an attribute of the same scalar kind.
///
/// A component-count difference is allowed (missing components read as
/// `0, 0, 0, 1`) but logged, since it is usually a layout mistake.
pub fn check_vertex_inputs(
    inputs: &BTreeMap<u32, SlotType>,
    buffers: &[wgpu::VertexBufferLayout<'_>],
) -> Result<(), ShaderError> {
    let provided: BTreeMap<u32, wgpu::VertexFormat> = buffers
        .iter()
        .flat_map(|b| b.attributes.iter())
        .map(|a| (a.shader_location, a.format))
        .collect();

    for (&location, wanted) in inputs {
        let Some(&format) = provided.get(&location) else {
            return Err(ShaderError::VertexInput {
                location,
                log: format!("{wanted} is not provided by any vertex buffer"),
            });
        };

        let Some(fed) = SlotType::from_vertex_format(format) else {
            log::debug!("vertex input @location({location}): unchecked format {format:?}");
            continue;
        };

        if fed.kind != wanted.kind {
            return Err(ShaderError::VertexInput {
                location,
                log: format!("shader reads {wanted} but the buffer provides {format:?}"),
            });
        }
        if fed.components != wanted.components {
            log::warn!(
                "vertex input @location({location}): shader reads {wanted} from {format:?}"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT_VS: &str = r#"
        @vertex
        fn vs_main(@location(0) pos: vec3<f32>) -> @builtin(position) vec4<f32> {
            return vec4<f32>(pos, 1.0);
        }
    "#;

    const FLAT_FS: &str = r#"
        @fragment
        fn fs_main() -> @location(0) vec4<f32> {
            return vec4<f32>(1.0, 0.5, 0.2, 1.0);
        }
    "#;

    const COLOR_VS: &str = r#"
        struct VsOut {
            @builtin(position) clip: vec4<f32>,
            @location(0) color: vec3<f32>,
        };

        @vertex
        fn vs_main(@location(0) pos: vec3<f32>, @location(1) color: vec3<f32>) -> VsOut {
            var out: VsOut;
            out.clip = vec4<f32>(pos, 1.0);
            out.color = color;
            return out;
        }
    "#;

    const COLOR_FS: &str = r#"
        @fragment
        fn fs_main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
            return vec4<f32>(color, 1.0);
        }
    "#;

    const VEC4_FS: &str = r#"
        @fragment
        fn fs_main(@location(0) color: vec4<f32>) -> @location(0) vec4<f32> {
            return color;
        }
    "#;

    const F64_FS: &str = r#"
        @fragment
        fn fs_main() -> @location(0) vec4<f32> {
            var x: f64 = 1.0lf;
            return vec4<f32>(f32(x), 0.0, 0.0, 1.0);
        }
    "#;

    fn f32x(components: u8) -> SlotType {
        SlotType {
            kind: naga::ScalarKind::Float,
            width: 4,
            components,
        }
    }

    fn attrs(list: &[(u32, wgpu::VertexFormat)]) -> Vec<wgpu::VertexAttribute> {
        list.iter()
            .map(|&(shader_location, format)| wgpu::VertexAttribute {
                format,
                offset: 0,
                shader_location,
            })
            .collect()
    }

    fn layout(attributes: &[wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }

    // ── compile ───────────────────────────────────────────────────────────

    #[test]
    fn compiles_vertex_shader_and_records_inputs() {
        let vs = compile(ShaderStage::Vertex, "flat vs", FLAT_VS).unwrap();
        assert_eq!(vs.stage(), ShaderStage::Vertex);
        assert_eq!(vs.entry_point(), "vs_main");
        assert_eq!(vs.inputs().get(&0), Some(&f32x(3)));
        assert!(vs.outputs().is_empty(), "builtin position is not a location");
    }

    #[test]
    fn struct_outputs_are_flattened() {
        let vs = compile(ShaderStage::Vertex, "color vs", COLOR_VS).unwrap();
        assert_eq!(vs.inputs().len(), 2);
        assert_eq!(vs.outputs().get(&0), Some(&f32x(3)));
    }

    #[test]
    fn syntax_error_reports_compile_log() {
        let err = compile(ShaderStage::Fragment, "broken", "@fragment fn fs_main( {").unwrap_err();
        match err {
            ShaderError::Compile { stage, label, log } => {
                assert_eq!(stage, ShaderStage::Fragment);
                assert_eq!(label, "broken");
                assert!(!log.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn type_error_is_caught_by_validation() {
        let src = r#"
            @fragment
            fn fs_main() -> @location(0) vec4<f32> {
                return vec3<f32>(1.0, 0.5, 0.2);
            }
        "#;
        let err = compile(ShaderStage::Fragment, "wrong return", src).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { .. }), "{err:?}");
    }

    #[test]
    fn wrong_stage_has_no_entry_point() {
        let err = compile(ShaderStage::Vertex, "flat fs", FLAT_FS).unwrap_err();
        assert_eq!(
            err,
            ShaderError::MissingEntryPoint {
                stage: ShaderStage::Vertex,
                label: "flat fs".to_owned(),
            }
        );
    }

    #[test]
    fn compile_error_display_names_stage_and_label() {
        let err = compile(ShaderStage::Vertex, "oops", "not wgsl").unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("vertex shader 'oops' failed to compile"), "{text}");
    }

    // ── device features ───────────────────────────────────────────────────

    #[test]
    fn f64_shader_needs_shader_f64() {
        let fs = compile(ShaderStage::Fragment, "f64", F64_FS).unwrap();
        let err = fs.check_features(wgpu::Features::empty()).unwrap_err();
        match err {
            ShaderError::Compile { stage, label, log } => {
                assert_eq!(stage, ShaderStage::Fragment);
                assert_eq!(label, "f64");
                assert!(!log.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs.check_features(wgpu::Features::SHADER_F64), Ok(()));
    }

    #[test]
    fn plain_shaders_need_no_features() {
        let vs = compile(ShaderStage::Vertex, "vs", COLOR_VS).unwrap();
        let fs = compile(ShaderStage::Fragment, "fs", COLOR_FS).unwrap();
        assert_eq!(vs.check_features(wgpu::Features::empty()), Ok(()));
        assert_eq!(fs.check_features(wgpu::Features::empty()), Ok(()));
    }

    #[test]
    fn capabilities_follow_features() {
        assert!(capabilities_for(wgpu::Features::empty()).is_empty());
        let caps = capabilities_for(wgpu::Features::SHADER_F64 | wgpu::Features::SHADER_F16);
        assert!(caps.contains(Capabilities::FLOAT64));
        assert!(caps.contains(Capabilities::SHADER_FLOAT16));
        assert!(!caps.contains(Capabilities::SHADER_INT64));
    }

    // ── interface ─────────────────────────────────────────────────────────

    #[test]
    fn flat_pair_links() {
        let vs = compile(ShaderStage::Vertex, "vs", FLAT_VS).unwrap();
        let fs = compile(ShaderStage::Fragment, "fs", FLAT_FS).unwrap();
        assert_eq!(check_interface(&vs, &fs), Ok(()));
    }

    #[test]
    fn color_pair_links() {
        let vs = compile(ShaderStage::Vertex, "vs", COLOR_VS).unwrap();
        let fs = compile(ShaderStage::Fragment, "fs", COLOR_FS).unwrap();
        assert_eq!(check_interface(&vs, &fs), Ok(()));
    }

    #[test]
    fn unwritten_fragment_input_fails_to_link() {
        let vs = compile(ShaderStage::Vertex, "vs", FLAT_VS).unwrap();
        let fs = compile(ShaderStage::Fragment, "fs", COLOR_FS).unwrap();
        let err = check_interface(&vs, &fs).unwrap_err();
        match err {
            ShaderError::Link { log } => assert!(log.contains("@location(0)"), "{log}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mismatched_location_type_fails_to_link() {
        let vs = compile(ShaderStage::Vertex, "vs", COLOR_VS).unwrap();
        let fs = compile(ShaderStage::Fragment, "fs", VEC4_FS).unwrap();
        let err = check_interface(&vs, &fs).unwrap_err();
        match err {
            ShaderError::Link { log } => {
                assert!(log.contains("vec3<f32>"), "{log}");
                assert!(log.contains("vec4<f32>"), "{log}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn swapped_stages_fail_to_link() {
        let vs = compile(ShaderStage::Vertex, "vs", FLAT_VS).unwrap();
        let fs = compile(ShaderStage::Fragment, "fs", FLAT_FS).unwrap();
        assert!(matches!(check_interface(&fs, &vs), Err(ShaderError::Link { .. })));
    }

    // ── vertex inputs ─────────────────────────────────────────────────────

    #[test]
    fn matching_layout_is_accepted() {
        let vs = compile(ShaderStage::Vertex, "vs", COLOR_VS).unwrap();
        let a = attrs(&[
            (0, wgpu::VertexFormat::Float32x3),
            (1, wgpu::VertexFormat::Float32x3),
        ]);
        assert_eq!(check_vertex_inputs(vs.inputs(), &[layout(&a)]), Ok(()));
    }

    #[test]
    fn inputs_may_come_from_several_buffers() {
        let vs = compile(ShaderStage::Vertex, "vs", COLOR_VS).unwrap();
        let a = attrs(&[(0, wgpu::VertexFormat::Float32x3)]);
        let b = attrs(&[(1, wgpu::VertexFormat::Unorm8x4)]);
        assert_eq!(check_vertex_inputs(vs.inputs(), &[layout(&a), layout(&b)]), Ok(()));
    }

    #[test]
    fn missing_attribute_is_rejected() {
        let vs = compile(ShaderStage::Vertex, "vs", COLOR_VS).unwrap();
        let a = attrs(&[(0, wgpu::VertexFormat::Float32x3)]);
        let err = check_vertex_inputs(vs.inputs(), &[layout(&a)]).unwrap_err();
        assert!(matches!(err, ShaderError::VertexInput { location: 1, .. }), "{err:?}");
    }

    #[test]
    fn integer_attribute_for_float_input_is_rejected() {
        let vs = compile(ShaderStage::Vertex, "vs", FLAT_VS).unwrap();
        let a = attrs(&[(0, wgpu::VertexFormat::Uint32x3)]);
        let err = check_vertex_inputs(vs.inputs(), &[layout(&a)]).unwrap_err();
        assert!(matches!(err, ShaderError::VertexInput { location: 0, .. }), "{err:?}");
    }

    #[test]
    fn component_count_difference_is_allowed() {
        let vs = compile(ShaderStage::Vertex, "vs", FLAT_VS).unwrap();
        let a = attrs(&[(0, wgpu::VertexFormat::Float32x2)]);
        assert_eq!(check_vertex_inputs(vs.inputs(), &[layout(&a)]), Ok(()));
    }

    #[test]
    fn slot_types_display_like_wgsl() {
        assert_eq!(f32x(3).to_string(), "vec3<f32>");
        assert_eq!(f32x(1).to_string(), "f32");
        let u = SlotType {
            kind: naga::ScalarKind::Uint,
            width: 4,
            components: 2,
        };
        assert_eq!(u.to_string(), "vec2<u32>");
    }
}
