mod display;
mod resources;
mod variant;

pub use display::{SlideDraw, ENTERING_SET, LEAVING_SET};
pub use resources::{permutation_texture_data, VariantResources, PERM_TEXTURE_SIZE};
pub use variant::Variant;

use crate::core::frame::Frame;
use crate::core::scene::TransitionScene;
use crate::error::{LifecycleState, RendererError, TransitionError};
use crate::math::projection::{model_view, perspective_projection};
use crate::render::context::{RenderContext, SlideTextures};
use crate::render::mesh::MeshBuffer;
use crate::render::uniforms::{self, optional};
use crate::traits::{ProgramHandle, Renderer};
use crate::types::TransitionSettings;

#[derive(Debug)]
struct PreparedResources {
    program: ProgramHandle,
    mesh: Option<MeshBuffer>,
    extras: VariantResources,
}

/// One slide change: scene, settings and the variant that draws them.
///
/// Call `prepare` once, `display` for every frame, then `finish` once.
#[derive(Debug)]
pub struct Transition {
    name: &'static str,
    scene: TransitionScene,
    settings: TransitionSettings,
    variant: Variant,
    state: LifecycleState,
    resources: Option<PreparedResources>,
}

impl Transition {
    pub fn new(name: &'static str, scene: TransitionScene, settings: TransitionSettings, variant: Variant) -> Self {
        log::debug!(
            "Created {name} transition ({} vertices, {} variant)",
            scene.vertex_count(),
            variant.name()
        );
        Self {
            name,
            scene,
            settings,
            variant,
            state: LifecycleState::Uninitialized,
            resources: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn scene(&self) -> &TransitionScene {
        &self.scene
    }

    pub fn settings(&self) -> &TransitionSettings {
        &self.settings
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Acquire the program, buffers and variant resources.
    ///
    /// On failure everything acquired so far is released and the transition
    /// refuses further use.
    pub fn prepare<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        context: &mut RenderContext,
    ) -> Result<(), TransitionError> {
        self.require(LifecycleState::Uninitialized, "prepare")?;

        match self.acquire(renderer, context) {
            Ok(resources) => {
                self.resources = Some(resources);
                self.state = LifecycleState::Prepared;
                log::info!("Prepared {} transition", self.name);
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to prepare {} transition: {err}", self.name);
                self.state = LifecycleState::Failed;
                Err(err.into())
            }
        }
    }

    /// Draw the frame at `frame.time`
    pub fn display<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        context: &mut RenderContext,
        textures: SlideTextures,
        frame: &Frame,
    ) -> Result<(), TransitionError> {
        self.require(LifecycleState::Prepared, "display")?;
        let Some(PreparedResources { mesh: Some(mesh), extras, .. }) = &self.resources else {
            return Err(TransitionError::InvalidState {
                operation: "display",
                state: self.state,
            });
        };

        log::trace!("{} frame at t={:.3}", self.name, frame.time);
        self.variant.begin_frame(renderer, frame)?;

        let overall = self
            .scene
            .overall_transform(frame.time, frame.width_scale(), frame.height_scale());
        optional(renderer.set_uniform_matrix(uniforms::OPERATIONS_TRANSFORM_MATRIX, &overall))?;

        let draw = SlideDraw {
            scene: &self.scene,
            mesh,
            textures,
            frame: *frame,
        };
        self.variant.display_slides(renderer, context, &draw, extras)?;

        for object in self.scene.scene_objects() {
            object.display(renderer, context, frame)?;
        }
        Ok(())
    }

    /// Release every renderer resource and restore state changed in `prepare`
    pub fn finish<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        context: &mut RenderContext,
    ) -> Result<(), TransitionError> {
        self.require(LifecycleState::Prepared, "finish")?;

        if let Some(resources) = self.resources.take() {
            self.release(renderer, context, resources);
        }
        self.state = LifecycleState::Finished;
        log::info!("Finished {} transition", self.name);
        Ok(())
    }

    fn require(&self, expected: LifecycleState, operation: &'static str) -> Result<(), TransitionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(TransitionError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn acquire<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        context: &mut RenderContext,
    ) -> Result<PreparedResources, RendererError> {
        let program = renderer.acquire_program(&self.variant.program())?;
        let mut resources = PreparedResources {
            program,
            mesh: None,
            extras: VariantResources::default(),
        };

        match self.acquire_into(renderer, context, &mut resources) {
            Ok(()) => Ok(resources),
            Err(err) => {
                self.release(renderer, context, resources);
                Err(err)
            }
        }
    }

    fn acquire_into<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        context: &mut RenderContext,
        resources: &mut PreparedResources,
    ) -> Result<(), RendererError> {
        for object in self.scene.scene_objects_mut() {
            object.prepare(renderer)?;
        }

        optional(renderer.set_uniform_texture(uniforms::LEAVING_SLIDE_TEXTURE, uniforms::LEAVING_SLIDE_UNIT))?;
        optional(renderer.set_uniform_texture(uniforms::ENTERING_SLIDE_TEXTURE, uniforms::ENTERING_SLIDE_UNIT))?;
        optional(renderer.set_uniform_matrix(uniforms::PROJECTION_MATRIX, &perspective_projection()))?;
        optional(renderer.set_uniform_matrix(uniforms::MODEL_VIEW_MATRIX, &model_view()))?;

        let sets = [self.scene.leaving(), self.scene.entering()];
        resources.mesh = Some(MeshBuffer::upload(renderer, &sets)?);

        self.variant.prepare(renderer, context, &self.scene, &mut resources.extras)
    }

    fn release<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        context: &mut RenderContext,
        mut resources: PreparedResources,
    ) {
        for object in self.scene.scene_objects_mut() {
            object.finish(renderer);
        }
        self.variant.finish(renderer, context, &mut resources.extras);
        if let Some(mesh) = resources.mesh {
            mesh.release(renderer);
        }
        renderer.release_program(resources.program);
    }
}
