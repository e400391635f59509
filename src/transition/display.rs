use glam::Mat4;

use super::resources::VariantResources;
use crate::core::frame::Frame;
use crate::core::primitive::Primitive;
use crate::core::scene::TransitionScene;
use crate::error::RendererError;
use crate::render::context::{RenderContext, SlideTextures, SHADOW_MAP_SIZE};
use crate::render::mesh::{self, MeshBuffer};
use crate::render::uniforms::{self, optional};
use crate::traits::Renderer;

/// Mesh set holding the leaving slide
pub const LEAVING_SET: usize = 0;
/// Mesh set holding the entering slide
pub const ENTERING_SET: usize = 1;

/// Hexagon border as a fraction of the cell
const HONEYCOMB_BORDER: f32 = 0.15;

/// Everything one frame draws from
pub struct SlideDraw<'a> {
    pub scene: &'a TransitionScene,
    pub mesh: &'a MeshBuffer,
    pub textures: SlideTextures,
    pub frame: Frame,
}

impl<'a> SlideDraw<'a> {
    pub fn leaving<R: Renderer + ?Sized>(&self, renderer: &mut R, context: &mut RenderContext) -> Result<(), RendererError> {
        self.slide(renderer, context, LEAVING_SET)
    }

    pub fn entering<R: Renderer + ?Sized>(&self, renderer: &mut R, context: &mut RenderContext) -> Result<(), RendererError> {
        self.slide(renderer, context, ENTERING_SET)
    }

    fn slide<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        context: &mut RenderContext,
        set: usize,
    ) -> Result<(), RendererError> {
        let (texture, primitives) = if set == LEAVING_SET {
            (self.textures.leaving, self.scene.leaving())
        } else {
            (self.textures.entering, self.scene.entering())
        };

        context.bind_texture(renderer, uniforms::LEAVING_SLIDE_UNIT, Some(texture));
        optional(renderer.set_uniform_matrix(uniforms::SCENE_TRANSFORM_MATRIX, &Mat4::IDENTITY))?;
        self.mesh.draw(
            renderer,
            set,
            primitives,
            self.frame.time,
            self.frame.width_scale(),
            self.frame.height_scale(),
        )
    }

    /// Draw the leaving slide from geometry built for this frame only
    pub fn unbuffered_leaving<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        context: &mut RenderContext,
        primitives: &[Primitive],
    ) -> Result<(), RendererError> {
        context.bind_texture(renderer, uniforms::LEAVING_SLIDE_UNIT, Some(self.textures.leaving));
        optional(renderer.set_uniform_matrix(uniforms::SCENE_TRANSFORM_MATRIX, &Mat4::IDENTITY))?;
        mesh::draw_unbuffered(
            renderer,
            primitives,
            self.frame.time,
            self.frame.width_scale(),
            self.frame.height_scale(),
        )
    }

    fn set_time<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), RendererError> {
        optional(renderer.set_uniform_scalar(uniforms::TIME, self.frame.time))
    }
}

/// Leaving slide, then entering slide
pub fn simple<R: Renderer + ?Sized>(
    renderer: &mut R,
    context: &mut RenderContext,
    draw: &SlideDraw<'_>,
) -> Result<(), RendererError> {
    draw.leaving(renderer, context)?;
    draw.entering(renderer, context)
}

/// Only the slide currently facing the viewer
pub fn reflection<R: Renderer + ?Sized>(
    renderer: &mut R,
    context: &mut RenderContext,
    draw: &SlideDraw<'_>,
) -> Result<(), RendererError> {
    if draw.frame.time < 0.5 {
        draw.leaving(renderer, context)
    } else {
        draw.entering(renderer, context)
    }
}

/// Both slides, the one in front drawn last
pub fn rochade<R: Renderer + ?Sized>(
    renderer: &mut R,
    context: &mut RenderContext,
    draw: &SlideDraw<'_>,
) -> Result<(), RendererError> {
    if draw.frame.time > 0.5 {
        draw.leaving(renderer, context)?;
        draw.entering(renderer, context)
    } else {
        draw.entering(renderer, context)?;
        draw.leaving(renderer, context)
    }
}

pub fn diamond<R: Renderer + ?Sized>(
    renderer: &mut R,
    context: &mut RenderContext,
    draw: &SlideDraw<'_>,
) -> Result<(), RendererError> {
    let leaving = crate::scenes::diamond_leaving_slide(draw.frame.time);
    draw.unbuffered_leaving(renderer, context, std::slice::from_ref(&leaving))?;
    draw.entering(renderer, context)
}

/// Leaving slide only; the shader mixes in the entering texture
pub fn blended<R: Renderer + ?Sized>(
    renderer: &mut R,
    context: &mut RenderContext,
    draw: &SlideDraw<'_>,
) -> Result<(), RendererError> {
    draw.set_time(renderer)?;
    context.bind_texture(renderer, uniforms::ENTERING_SLIDE_UNIT, Some(draw.textures.entering));
    draw.leaving(renderer, context)
}

/// Depth of each slide into its own shadow map, then both slides on screen
pub fn vortex<R: Renderer + ?Sized>(
    renderer: &mut R,
    context: &mut RenderContext,
    draw: &SlideDraw<'_>,
    extras: &VariantResources,
) -> Result<(), RendererError> {
    let [leaving_target, entering_target] = extras.shadow_targets[..] else {
        log::warn!("Vortex shadow targets missing, skipping frame");
        return Ok(());
    };

    draw.set_time(renderer)?;
    optional(renderer.set_uniform_scalar(uniforms::SHADOW, 1.0))?;
    {
        let mut pass = context.begin_offscreen(renderer, leaving_target, SHADOW_MAP_SIZE, SHADOW_MAP_SIZE);
        let (renderer, context) = pass.parts();
        renderer.clear(false, true);
        optional(renderer.set_uniform_scalar(uniforms::SLIDE, 0.0))?;
        draw.leaving(renderer, context)?;

        pass.switch_target(entering_target);
        let (renderer, context) = pass.parts();
        renderer.clear(false, true);
        optional(renderer.set_uniform_scalar(uniforms::SLIDE, 1.0))?;
        draw.entering(renderer, context)?;
    }

    optional(renderer.set_uniform_scalar(uniforms::SHADOW, 0.0))?;
    optional(renderer.set_uniform_scalar(uniforms::SLIDE, 0.0))?;
    draw.leaving(renderer, context)?;
    optional(renderer.set_uniform_scalar(uniforms::SLIDE, 1.0))?;
    draw.entering(renderer, context)
}

/// Leaving hexagons into the shadow map, then entering behind leaving with blending
pub fn honeycomb<R: Renderer + ?Sized>(
    renderer: &mut R,
    context: &mut RenderContext,
    draw: &SlideDraw<'_>,
    extras: &VariantResources,
) -> Result<(), RendererError> {
    let Some(&target) = extras.shadow_targets.first() else {
        log::warn!("Honeycomb shadow target missing, skipping frame");
        return Ok(());
    };
    let (inner, outer) = (1.0 - HONEYCOMB_BORDER, 1.0 + HONEYCOMB_BORDER);

    draw.set_time(renderer)?;
    optional(renderer.set_uniform_scalar(uniforms::SHADOW, 1.0))?;
    {
        let mut pass = context.begin_offscreen(renderer, target, SHADOW_MAP_SIZE, SHADOW_MAP_SIZE);
        let (renderer, context) = pass.parts();
        renderer.clear(true, true);
        optional(renderer.set_uniform_scalar(uniforms::SHADOW, 1.0))?;
        optional(renderer.set_uniform_scalar(uniforms::SELECTED_TEXTURE, 1.0))?;
        hexagons(renderer, context, draw, LEAVING_SET, inner, outer)?;
    }

    optional(renderer.set_uniform_scalar(uniforms::SHADOW, 0.0))?;
    optional(renderer.set_uniform_scalar(uniforms::SELECTED_TEXTURE, 0.0))?;
    hexagons(renderer, context, draw, ENTERING_SET, inner, outer)?;
    optional(renderer.set_uniform_scalar(uniforms::SELECTED_TEXTURE, 1.0))?;
    hexagons(renderer, context, draw, LEAVING_SET, inner, outer)
}

fn hexagons<R: Renderer + ?Sized>(
    renderer: &mut R,
    context: &mut RenderContext,
    draw: &SlideDraw<'_>,
    set: usize,
    inner: f32,
    outer: f32,
) -> Result<(), RendererError> {
    for size in [inner, outer] {
        optional(renderer.set_uniform_scalar(uniforms::HEXAGON_SIZE, size))?;
        draw.slide(renderer, context, set)?;
    }
    Ok(())
}
