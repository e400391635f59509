use glam::{IVec2, Mat4, Vec2};
use std::mem::{offset_of, size_of};

use crate::error::RendererError;
use crate::types::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetHandle(pub u32);

/// Shader resources making up one program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderProgram {
    pub vertex: &'static str,
    pub fragment: &'static str,
    pub geometry: Option<&'static str>,
    /// Preprocessor lines prepended to the fragment shader
    pub defines: &'static str,
}

impl ShaderProgram {
    pub const fn new(vertex: &'static str, fragment: &'static str) -> Self {
        Self {
            vertex,
            fragment,
            geometry: None,
            defines: "",
        }
    }

    pub const fn with_geometry(mut self, geometry: &'static str) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub const fn with_defines(mut self, defines: &'static str) -> Self {
        self.defines = defines;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// One float attribute stream within a bound buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBinding {
    pub name: &'static str,
    pub components: u32,
    /// Byte distance between consecutive elements, 0 for tightly packed
    pub stride: u32,
    pub offset: u32,
}

const VERTEX_STRIDE: u32 = size_of::<Vertex>() as u32;

/// Layout of `Vertex` as seen by the shaders
pub const VERTEX_ATTRIBUTES: [AttributeBinding; 3] = [
    AttributeBinding {
        name: "a_position",
        components: 3,
        stride: VERTEX_STRIDE,
        offset: offset_of!(Vertex, position) as u32,
    },
    AttributeBinding {
        name: "a_normal",
        components: 3,
        stride: VERTEX_STRIDE,
        offset: offset_of!(Vertex, normal) as u32,
    },
    AttributeBinding {
        name: "a_texCoord",
        components: 2,
        stride: VERTEX_STRIDE,
        offset: offset_of!(Vertex, tex_coord) as u32,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    Rgb8,
    /// Single channel bytes expanded to RGBA by the backend
    Red8,
    Rgba32Float,
    Depth16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureDescriptor<'a> {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub filter: TextureFilter,
    /// Repeat outside [0,1], otherwise clamp to edge
    pub repeat: bool,
    pub data: Option<&'a [u8]>,
}

/// Fixed-function state a variant may toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    FaceCulling,
    Blending,
}

/// Graphics backend consumed by transitions.
///
/// Uniform setters target the program most recently acquired and report
/// `RendererError::UnknownUniform` when it has no uniform of that name.
pub trait Renderer {
    /// Compile and link a program and make it current
    fn acquire_program(&mut self, program: &ShaderProgram) -> Result<ProgramHandle, RendererError>;
    fn release_program(&mut self, program: ProgramHandle);

    fn upload_mesh(&mut self, vertices: &[Vertex]) -> Result<BufferHandle, RendererError>;
    /// Upload a plain float stream for extra per-vertex attributes
    fn upload_attribute(&mut self, data: &[f32]) -> Result<BufferHandle, RendererError>;
    fn bind_attributes(&mut self, buffer: BufferHandle, layout: &[AttributeBinding]);
    fn release_buffer(&mut self, buffer: BufferHandle);

    fn create_texture(&mut self, descriptor: &TextureDescriptor<'_>) -> Result<TextureHandle, RendererError>;
    fn release_texture(&mut self, texture: TextureHandle);
    fn bind_texture(&mut self, unit: u32, texture: Option<TextureHandle>);

    fn create_offscreen_target(
        &mut self,
        color: Option<TextureHandle>,
        depth: Option<TextureHandle>,
    ) -> Result<TargetHandle, RendererError>;
    fn release_offscreen_target(&mut self, target: TargetHandle);

    fn viewport(&self) -> Viewport;
    /// Redirect drawing into `target` with a viewport of the given size
    fn begin_offscreen_pass(&mut self, target: TargetHandle, width: u32, height: u32);
    /// Return to the default target and restore `viewport`
    fn end_offscreen_pass(&mut self, viewport: Viewport);
    fn clear(&mut self, color: bool, depth: bool);

    fn has_uniform(&self, name: &str) -> bool;
    fn set_uniform_matrix(&mut self, name: &str, value: &Mat4) -> Result<(), RendererError>;
    fn set_uniform_scalar(&mut self, name: &str, value: f32) -> Result<(), RendererError>;
    fn set_uniform_texture(&mut self, name: &str, unit: u32) -> Result<(), RendererError>;
    fn set_uniform_vec2(&mut self, name: &str, value: Vec2) -> Result<(), RendererError>;
    fn set_uniform_ivec2(&mut self, name: &str, value: IVec2) -> Result<(), RendererError>;

    fn set_capability(&mut self, capability: Capability, enabled: bool);

    fn draw_triangles(&mut self, buffer: BufferHandle, first: u32, count: u32);
    /// Draw vertices that live only for this call
    fn draw_unbuffered(&mut self, vertices: &[Vertex]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_attribute_offsets() {
        let offsets: Vec<u32> = VERTEX_ATTRIBUTES.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
        assert!(VERTEX_ATTRIBUTES.iter().all(|a| a.stride == 32));
    }

    #[test]
    fn test_shader_program_builders() {
        let program = ShaderProgram::new("v", "f").with_geometry("g").with_defines("#define x");
        assert_eq!(program.geometry, Some("g"));
        assert_eq!(program.defines, "#define x");
        assert_eq!(ShaderProgram::new("v", "f").geometry, None);
    }
}
