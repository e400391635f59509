use super::frame::Frame;
use super::primitive::Primitive;
use crate::error::RendererError;
use crate::render::context::RenderContext;
use crate::render::mesh::MeshBuffer;
use crate::render::uniforms::{self, optional};
use crate::traits::{Renderer, TextureDescriptor, TextureFilter, TextureFormat, TextureHandle};

/// Flat grey of the iris blades
const IRIS_COLOR: [u8; 3] = [80, 80, 80];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneObjectKind {
    Plain,
    /// Drawn with its own flat colour texture instead of a slide
    Iris,
}

#[derive(Debug)]
struct SceneObjectResources {
    mesh: MeshBuffer,
    texture: Option<TextureHandle>,
}

/// Auxiliary geometry drawn after the slides, in display space
#[derive(Debug)]
pub struct SceneObject {
    kind: SceneObjectKind,
    primitives: Vec<Primitive>,
    resources: Option<SceneObjectResources>,
}

impl Clone for SceneObject {
    /// Clones share no renderer resources and must be prepared again
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            primitives: self.primitives.clone(),
            resources: None,
        }
    }
}

impl SceneObject {
    pub fn new(kind: SceneObjectKind) -> Self {
        Self {
            kind,
            primitives: Vec::new(),
            resources: None,
        }
    }

    pub fn plain() -> Self {
        Self::new(SceneObjectKind::Plain)
    }

    pub fn iris() -> Self {
        Self::new(SceneObjectKind::Iris)
    }

    pub fn kind(&self) -> SceneObjectKind {
        self.kind
    }

    pub fn push_primitive(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn vertex_count(&self) -> usize {
        self.primitives.iter().map(Primitive::vertex_count).sum()
    }

    pub fn is_prepared(&self) -> bool {
        self.resources.is_some()
    }

    /// Acquire the texture and vertex buffer; nothing stays allocated on failure
    pub fn prepare<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<(), RendererError> {
        if self.resources.is_some() {
            log::warn!("Scene object prepared twice, keeping existing resources");
            return Ok(());
        }

        let texture = match self.kind {
            SceneObjectKind::Iris => Some(renderer.create_texture(&TextureDescriptor {
                width: 1,
                height: 1,
                format: TextureFormat::Rgb8,
                filter: TextureFilter::Nearest,
                repeat: true,
                data: Some(&IRIS_COLOR),
            })?),
            SceneObjectKind::Plain => None,
        };

        let mesh = match MeshBuffer::upload(renderer, &[self.primitives.as_slice()]) {
            Ok(mesh) => mesh,
            Err(err) => {
                if let Some(texture) = texture {
                    renderer.release_texture(texture);
                }
                return Err(err);
            }
        };

        self.resources = Some(SceneObjectResources { mesh, texture });
        Ok(())
    }

    pub fn display<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        context: &mut RenderContext,
        frame: &Frame,
    ) -> Result<(), RendererError> {
        let Some(resources) = &self.resources else {
            log::warn!("Skipping scene object that was never prepared");
            return Ok(());
        };

        if let Some(texture) = resources.texture {
            context.bind_texture(renderer, uniforms::LEAVING_SLIDE_UNIT, Some(texture));
        }

        let letterbox = frame.display.letterbox_matrix();
        optional(renderer.set_uniform_matrix(uniforms::SCENE_TRANSFORM_MATRIX, &letterbox))?;
        resources.mesh.draw(renderer, 0, &self.primitives, frame.time, 1.0, 1.0)
    }

    /// Release renderer resources; later calls do nothing
    pub fn finish<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        if let Some(resources) = self.resources.take() {
            resources.mesh.release(renderer);
            if let Some(texture) = resources.texture {
                renderer.release_texture(texture);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display_context::DisplayContext;
    use crate::core::primitive::slide_quad;
    use crate::render::recording::{RecordingRenderer, RenderCall, UniformValue};
    use glam::{Mat4, Vec3};

    fn iris_with_quad() -> SceneObject {
        let mut iris = SceneObject::iris();
        iris.push_primitive(slide_quad());
        iris
    }

    #[test]
    fn test_iris_prepare_creates_flat_texture() {
        let mut renderer = RecordingRenderer::default();
        let mut iris = iris_with_quad();
        iris.prepare(&mut renderer).unwrap();

        assert!(iris.is_prepared());
        assert!(matches!(
            renderer.calls()[0],
            RenderCall::CreateTexture { width: 1, height: 1, format: TextureFormat::Rgb8, .. }
        ));
        assert_eq!(renderer.live_resources(), 2);
    }

    #[test]
    fn test_plain_prepare_has_no_texture() {
        let mut renderer = RecordingRenderer::default();
        let mut object = SceneObject::plain();
        object.push_primitive(slide_quad());
        object.prepare(&mut renderer).unwrap();
        assert_eq!(renderer.live_resources(), 1);
    }

    #[test]
    fn test_display_uses_letterbox_and_unit_scales() {
        let mut renderer = RecordingRenderer::default();
        let mut context = RenderContext::new();
        let mut iris = iris_with_quad();
        iris.prepare(&mut renderer).unwrap();
        renderer.clear_calls();

        let frame = Frame::new(0.0, DisplayContext::new(400, 400), DisplayContext::new(1600, 800));
        iris.display(&mut renderer, &mut context, &frame).unwrap();

        assert!(context.bound_texture(0).is_some());
        assert_eq!(
            renderer.uniform(uniforms::SCENE_TRANSFORM_MATRIX),
            Some(UniformValue::Matrix(Mat4::from_scale(Vec3::new(1.0, 2.0, 1.0))))
        );
        // slide scales are ignored for scene objects
        assert_eq!(
            renderer.uniform(uniforms::PRIMITIVE_TRANSFORM_MATRIX),
            Some(UniformValue::Matrix(Mat4::IDENTITY))
        );
    }

    #[test]
    fn test_finish_releases_once() {
        let mut renderer = RecordingRenderer::default();
        let mut iris = iris_with_quad();
        iris.prepare(&mut renderer).unwrap();

        iris.finish(&mut renderer);
        iris.finish(&mut renderer);
        assert_eq!(renderer.live_resources(), 0);
        assert!(!iris.is_prepared());
    }

    #[test]
    fn test_clone_drops_resources() {
        let mut renderer = RecordingRenderer::default();
        let mut iris = iris_with_quad();
        iris.prepare(&mut renderer).unwrap();
        let copy = iris.clone();
        assert!(!copy.is_prepared());
        assert_eq!(copy.vertex_count(), 6);
    }
}
