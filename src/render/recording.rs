use glam::{IVec2, Mat4, Vec2};
use std::collections::{HashMap, HashSet};

use crate::error::RendererError;
use crate::traits::{
    AttributeBinding, BufferHandle, Capability, ProgramHandle, Renderer, ShaderProgram, TargetHandle,
    TextureDescriptor, TextureFormat, TextureHandle, Viewport,
};
use crate::types::Vertex;

/// Value passed to a uniform setter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Matrix(Mat4),
    Scalar(f32),
    Texture(u32),
    Vec2(Vec2),
    IVec2(IVec2),
}

impl UniformValue {
    pub fn as_matrix(&self) -> Option<Mat4> {
        match self {
            UniformValue::Matrix(m) => Some(*m),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            UniformValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }
}

/// One call made against the recording renderer
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    AcquireProgram { program: ProgramHandle, fragment: &'static str },
    ReleaseProgram(ProgramHandle),
    UploadMesh { buffer: BufferHandle, vertices: usize },
    UploadAttribute { buffer: BufferHandle, floats: usize },
    BindAttributes { buffer: BufferHandle, names: Vec<&'static str> },
    ReleaseBuffer(BufferHandle),
    CreateTexture { texture: TextureHandle, width: u32, height: u32, format: TextureFormat },
    ReleaseTexture(TextureHandle),
    BindTexture { unit: u32, texture: Option<TextureHandle> },
    CreateTarget(TargetHandle),
    ReleaseTarget(TargetHandle),
    BeginOffscreenPass { target: TargetHandle, width: u32, height: u32 },
    EndOffscreenPass(Viewport),
    Clear { color: bool, depth: bool },
    SetUniform { name: String, value: UniformValue },
    SetCapability { capability: Capability, enabled: bool },
    DrawTriangles { buffer: BufferHandle, first: u32, count: u32 },
    DrawUnbuffered { vertices: usize },
}

/// Renderer resource kinds tracked for leak checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Program(ProgramHandle),
    Buffer(BufferHandle),
    Texture(TextureHandle),
    Target(TargetHandle),
}

/// Headless `Renderer` that records every call.
///
/// Handles are allocated from a single counter, so they are unique across kinds.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
    viewport: Viewport,
    next_handle: u32,
    live: HashSet<Resource>,
    capabilities: HashMap<Capability, bool>,
    known_uniforms: Option<HashSet<String>>,
    failing_programs: Vec<&'static str>,
    incomplete_targets: bool,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new(Viewport::new(0, 0, 1920, 1080))
    }
}

impl RecordingRenderer {
    pub fn new(viewport: Viewport) -> Self {
        let capabilities = HashMap::from([(Capability::FaceCulling, true), (Capability::Blending, false)]);
        Self {
            calls: Vec::new(),
            viewport,
            next_handle: 1,
            live: HashSet::new(),
            capabilities,
            known_uniforms: None,
            failing_programs: Vec::new(),
            incomplete_targets: false,
        }
    }

    /// Only accept uniforms in `names`; every other setter reports `UnknownUniform`
    pub fn with_known_uniforms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_uniforms = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Fail to link any program using `fragment`
    pub fn with_failing_program(mut self, fragment: &'static str) -> Self {
        self.failing_programs.push(fragment);
        self
    }

    /// Report every off-screen target as incomplete
    pub fn with_incomplete_targets(mut self) -> Self {
        self.incomplete_targets = true;
        self
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn draw_calls(&self) -> Vec<&RenderCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::DrawTriangles { .. } | RenderCall::DrawUnbuffered { .. }))
            .collect()
    }

    /// Every value set for `name`, oldest first
    pub fn uniform_history(&self, name: &str) -> Vec<UniformValue> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::SetUniform { name: n, value } if n == name => Some(*value),
                _ => None,
            })
            .collect()
    }

    /// Most recent value set for `name`
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniform_history(name).last().copied()
    }

    pub fn live_resources(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, resource: Resource) -> bool {
        self.live.contains(&resource)
    }

    pub fn capability(&self, capability: Capability) -> bool {
        self.capabilities.get(&capability).copied().unwrap_or(false)
    }

    fn allocate(&mut self) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn release(&mut self, resource: Resource) {
        if !self.live.remove(&resource) {
            log::warn!("Releasing {resource:?} which is not live");
        }
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<(), RendererError> {
        if !self.has_uniform(name) {
            return Err(RendererError::UnknownUniform(name.to_string()));
        }
        self.calls.push(RenderCall::SetUniform {
            name: name.to_string(),
            value,
        });
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    fn acquire_program(&mut self, program: &ShaderProgram) -> Result<ProgramHandle, RendererError> {
        if self.failing_programs.contains(&program.fragment) {
            return Err(RendererError::ProgramUnavailable(program.fragment.to_string()));
        }
        let handle = ProgramHandle(self.allocate());
        self.live.insert(Resource::Program(handle));
        self.calls.push(RenderCall::AcquireProgram {
            program: handle,
            fragment: program.fragment,
        });
        Ok(handle)
    }

    fn release_program(&mut self, program: ProgramHandle) {
        self.release(Resource::Program(program));
        self.calls.push(RenderCall::ReleaseProgram(program));
    }

    fn upload_mesh(&mut self, vertices: &[Vertex]) -> Result<BufferHandle, RendererError> {
        let buffer = BufferHandle(self.allocate());
        self.live.insert(Resource::Buffer(buffer));
        self.calls.push(RenderCall::UploadMesh {
            buffer,
            vertices: vertices.len(),
        });
        Ok(buffer)
    }

    fn upload_attribute(&mut self, data: &[f32]) -> Result<BufferHandle, RendererError> {
        let buffer = BufferHandle(self.allocate());
        self.live.insert(Resource::Buffer(buffer));
        self.calls.push(RenderCall::UploadAttribute {
            buffer,
            floats: data.len(),
        });
        Ok(buffer)
    }

    fn bind_attributes(&mut self, buffer: BufferHandle, layout: &[AttributeBinding]) {
        self.calls.push(RenderCall::BindAttributes {
            buffer,
            names: layout.iter().map(|binding| binding.name).collect(),
        });
    }

    fn release_buffer(&mut self, buffer: BufferHandle) {
        self.release(Resource::Buffer(buffer));
        self.calls.push(RenderCall::ReleaseBuffer(buffer));
    }

    fn create_texture(&mut self, descriptor: &TextureDescriptor<'_>) -> Result<TextureHandle, RendererError> {
        let texture = TextureHandle(self.allocate());
        self.live.insert(Resource::Texture(texture));
        self.calls.push(RenderCall::CreateTexture {
            texture,
            width: descriptor.width,
            height: descriptor.height,
            format: descriptor.format,
        });
        Ok(texture)
    }

    fn release_texture(&mut self, texture: TextureHandle) {
        self.release(Resource::Texture(texture));
        self.calls.push(RenderCall::ReleaseTexture(texture));
    }

    fn bind_texture(&mut self, unit: u32, texture: Option<TextureHandle>) {
        self.calls.push(RenderCall::BindTexture { unit, texture });
    }

    fn create_offscreen_target(
        &mut self,
        _color: Option<TextureHandle>,
        _depth: Option<TextureHandle>,
    ) -> Result<TargetHandle, RendererError> {
        if self.incomplete_targets {
            return Err(RendererError::IncompleteTarget);
        }
        let target = TargetHandle(self.allocate());
        self.live.insert(Resource::Target(target));
        self.calls.push(RenderCall::CreateTarget(target));
        Ok(target)
    }

    fn release_offscreen_target(&mut self, target: TargetHandle) {
        self.release(Resource::Target(target));
        self.calls.push(RenderCall::ReleaseTarget(target));
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn begin_offscreen_pass(&mut self, target: TargetHandle, width: u32, height: u32) {
        self.viewport = Viewport::new(0, 0, width, height);
        self.calls.push(RenderCall::BeginOffscreenPass { target, width, height });
    }

    fn end_offscreen_pass(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.calls.push(RenderCall::EndOffscreenPass(viewport));
    }

    fn clear(&mut self, color: bool, depth: bool) {
        self.calls.push(RenderCall::Clear { color, depth });
    }

    fn has_uniform(&self, name: &str) -> bool {
        self.known_uniforms.as_ref().map_or(true, |known| known.contains(name))
    }

    fn set_uniform_matrix(&mut self, name: &str, value: &Mat4) -> Result<(), RendererError> {
        self.set_uniform(name, UniformValue::Matrix(*value))
    }

    fn set_uniform_scalar(&mut self, name: &str, value: f32) -> Result<(), RendererError> {
        self.set_uniform(name, UniformValue::Scalar(value))
    }

    fn set_uniform_texture(&mut self, name: &str, unit: u32) -> Result<(), RendererError> {
        self.set_uniform(name, UniformValue::Texture(unit))
    }

    fn set_uniform_vec2(&mut self, name: &str, value: Vec2) -> Result<(), RendererError> {
        self.set_uniform(name, UniformValue::Vec2(value))
    }

    fn set_uniform_ivec2(&mut self, name: &str, value: IVec2) -> Result<(), RendererError> {
        self.set_uniform(name, UniformValue::IVec2(value))
    }

    fn set_capability(&mut self, capability: Capability, enabled: bool) {
        self.capabilities.insert(capability, enabled);
        self.calls.push(RenderCall::SetCapability { capability, enabled });
    }

    fn draw_triangles(&mut self, buffer: BufferHandle, first: u32, count: u32) {
        self.calls.push(RenderCall::DrawTriangles { buffer, first, count });
    }

    fn draw_unbuffered(&mut self, vertices: &[Vertex]) {
        self.calls.push(RenderCall::DrawUnbuffered {
            vertices: vertices.len(),
        });
    }
}
