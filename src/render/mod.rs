pub mod context;
pub mod mesh;
pub mod recording;
pub mod uniforms;

pub use context::{OffscreenPass, RenderContext, RenderTarget, SlideTextures, SHADOW_MAP_SIZE, TEXTURE_UNITS};
pub use mesh::MeshBuffer;
pub use recording::{RecordingRenderer, RenderCall, Resource, UniformValue};
