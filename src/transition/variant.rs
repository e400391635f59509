use glam::{IVec2, Vec2};

use super::display::{self, SlideDraw};
use super::resources::{permutation_texture_data, VariantResources, PERM_TEXTURE_SIZE};
use crate::core::frame::Frame;
use crate::core::scene::TransitionScene;
use crate::error::RendererError;
use crate::math::projection::{honeycomb_light_view, ortho_projection, vortex_light_view};
use crate::render::context::{RenderContext, SHADOW_MAP_SIZE};
use crate::render::uniforms::{self, optional};
use crate::scenes::{hexagon_centers, tile_info};
use crate::traits::{
    AttributeBinding, Capability, Renderer, ShaderProgram, TextureDescriptor, TextureFilter, TextureFormat,
    TextureHandle,
};

const BASIC: ShaderProgram = ShaderProgram::new("basicVertexShader", "basicFragmentShader");
const REFLECTION: ShaderProgram = ShaderProgram::new("reflectionVertexShader", "reflectionFragmentShader");
const FADE: ShaderProgram = ShaderProgram::new("basicVertexShader", "fadeFragmentShader");
const FADE_BLACK: ShaderProgram = ShaderProgram::new("basicVertexShader", "fadeBlackFragmentShader");
const STATIC: ShaderProgram = ShaderProgram::new("basicVertexShader", "staticFragmentShader");
const DISSOLVE: ShaderProgram = ShaderProgram::new("basicVertexShader", "dissolveFragmentShader");
const RIPPLE: ShaderProgram = ShaderProgram::new("basicVertexShader", "rippleFragmentShader");
const GLITTER: ShaderProgram = ShaderProgram::new("glitterVertexShader", "glitterFragmentShader");
const VORTEX: ShaderProgram =
    ShaderProgram::new("vortexVertexShader", "vortexFragmentShader").with_geometry("vortexGeometryShader");
const HONEYCOMB: ShaderProgram =
    ShaderProgram::new("honeycombVertexShader", "honeycombFragmentShader").with_geometry("honeycombGeometryShader");

/// Real half-extent covered by the vortex light
const VORTEX_LIGHT_EXTENT: f32 = 2.0;
/// Real half-extent covered by the honeycomb light
const HONEYCOMB_LIGHT_EXTENT: f32 = 4.0;

/// Draw-order and pass-structure policy of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant {
    Simple,
    /// Slides with floor reflections, culling off
    Reflection,
    /// Reflection whose slides swap depth order half way
    Rochade,
    /// Leaving slide rebuilt every frame
    Diamond,
    FadeSmoothly,
    FadeThroughColor { white: bool },
    StaticNoise,
    Dissolve,
    Ripple { center: Vec2 },
    Glitter { tiles: IVec2 },
    Vortex { tiles: IVec2 },
    Honeycomb,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Simple => "simple",
            Variant::Reflection => "reflection",
            Variant::Rochade => "rochade",
            Variant::Diamond => "diamond",
            Variant::FadeSmoothly => "fade_smoothly",
            Variant::FadeThroughColor { .. } => "fade_through_color",
            Variant::StaticNoise => "static_noise",
            Variant::Dissolve => "dissolve",
            Variant::Ripple { .. } => "ripple",
            Variant::Glitter { .. } => "glitter",
            Variant::Vortex { .. } => "vortex",
            Variant::Honeycomb => "honeycomb",
        }
    }

    pub fn program(&self) -> ShaderProgram {
        match self {
            Variant::Simple | Variant::Diamond => BASIC,
            Variant::Reflection | Variant::Rochade => REFLECTION,
            Variant::FadeSmoothly => FADE,
            Variant::FadeThroughColor { white: true } => FADE_BLACK.with_defines("#define use_white"),
            Variant::FadeThroughColor { white: false } => FADE_BLACK,
            Variant::StaticNoise => STATIC,
            Variant::Dissolve => DISSOLVE,
            Variant::Ripple { .. } => RIPPLE,
            Variant::Glitter { .. } => GLITTER,
            Variant::Vortex { .. } => VORTEX,
            Variant::Honeycomb => HONEYCOMB,
        }
    }

    /// Whether the shaders sample the noise permutation texture
    pub fn uses_perm_texture(&self) -> bool {
        matches!(
            self,
            Variant::StaticNoise
                | Variant::Dissolve
                | Variant::Glitter { .. }
                | Variant::Vortex { .. }
                | Variant::Honeycomb
        )
    }

    /// Whether frames render into off-screen shadow maps first
    pub fn uses_shadow_pass(&self) -> bool {
        matches!(self, Variant::Vortex { .. } | Variant::Honeycomb)
    }

    /// Acquire variant-specific state; whatever lands in `extras` is released by the caller on error
    pub fn prepare<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        context: &mut RenderContext,
        scene: &TransitionScene,
        extras: &mut VariantResources,
    ) -> Result<(), RendererError> {
        if self.uses_perm_texture() && renderer.has_uniform(uniforms::PERM_TEXTURE) {
            let data = permutation_texture_data();
            let texture = renderer.create_texture(&TextureDescriptor {
                width: PERM_TEXTURE_SIZE,
                height: PERM_TEXTURE_SIZE,
                format: TextureFormat::Red8,
                filter: TextureFilter::Nearest,
                repeat: true,
                data: Some(&data),
            })?;
            extras.perm_texture = Some(texture);
            context.bind_texture(renderer, uniforms::PERM_UNIT, Some(texture));
            optional(renderer.set_uniform_texture(uniforms::PERM_TEXTURE, uniforms::PERM_UNIT))?;
        }

        match *self {
            Variant::Reflection | Variant::Rochade => {
                renderer.set_capability(Capability::FaceCulling, false);
            }
            Variant::Ripple { center } => {
                optional(renderer.set_uniform_vec2(uniforms::CENTER, center))?;
            }
            Variant::Glitter { tiles } => {
                optional(renderer.set_uniform_ivec2(uniforms::NUM_TILES, tiles))?;
                let centers = hexagon_centers(scene.leaving().iter().chain(scene.entering()));
                let buffer = renderer.upload_attribute(&centers)?;
                extras.attribute_buffer = Some(buffer);
                renderer.bind_attributes(buffer, &[float_attribute(uniforms::CENTER_ATTRIBUTE, 3)]);
            }
            Variant::Vortex { tiles } => prepare_vortex(renderer, context, scene, tiles, extras)?,
            Variant::Honeycomb => prepare_honeycomb(renderer, context, extras)?,
            _ => {}
        }
        Ok(())
    }

    /// Per-frame uniforms set before any slide is drawn
    pub fn begin_frame<R: Renderer + ?Sized>(&self, renderer: &mut R, frame: &Frame) -> Result<(), RendererError> {
        if let Variant::Ripple { .. } = self {
            optional(renderer.set_uniform_scalar(uniforms::SLIDE_RATIO, frame.slide_ratio()))?;
        }
        Ok(())
    }

    pub fn display_slides<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        context: &mut RenderContext,
        draw: &SlideDraw<'_>,
        extras: &VariantResources,
    ) -> Result<(), RendererError> {
        match self {
            Variant::Simple => display::simple(renderer, context, draw),
            Variant::Reflection => display::reflection(renderer, context, draw),
            Variant::Rochade => display::rochade(renderer, context, draw),
            Variant::Diamond => display::diamond(renderer, context, draw),
            Variant::FadeSmoothly
            | Variant::FadeThroughColor { .. }
            | Variant::StaticNoise
            | Variant::Dissolve
            | Variant::Ripple { .. }
            | Variant::Glitter { .. } => display::blended(renderer, context, draw),
            Variant::Vortex { .. } => display::vortex(renderer, context, draw, extras),
            Variant::Honeycomb => display::honeycomb(renderer, context, draw, extras),
        }
    }

    /// Undo state changes made in `prepare` and release `extras`
    pub fn finish<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        context: &mut RenderContext,
        extras: &mut VariantResources,
    ) {
        match self {
            Variant::Reflection | Variant::Rochade => renderer.set_capability(Capability::FaceCulling, true),
            Variant::Honeycomb => renderer.set_capability(Capability::Blending, false),
            _ => {}
        }

        if !extras.shadow_textures.is_empty() {
            for unit in uniforms::SHADOW_UNITS {
                context.bind_texture(renderer, unit, None);
            }
        }
        if extras.perm_texture.is_some() {
            context.bind_texture(renderer, uniforms::PERM_UNIT, None);
        }
        extras.release(renderer);
    }
}

fn float_attribute(name: &'static str, components: u32) -> AttributeBinding {
    AttributeBinding {
        name,
        components,
        stride: 0,
        offset: 0,
    }
}

fn shadow_texture<R: Renderer + ?Sized>(renderer: &mut R, format: TextureFormat) -> Result<TextureHandle, RendererError> {
    renderer.create_texture(&TextureDescriptor {
        width: SHADOW_MAP_SIZE,
        height: SHADOW_MAP_SIZE,
        format,
        filter: TextureFilter::Linear,
        repeat: false,
        data: None,
    })
}

fn prepare_vortex<R: Renderer + ?Sized>(
    renderer: &mut R,
    context: &mut RenderContext,
    scene: &TransitionScene,
    tiles: IVec2,
    extras: &mut VariantResources,
) -> Result<(), RendererError> {
    optional(renderer.set_uniform_texture(uniforms::LEAVING_SHADOW_TEXTURE, uniforms::SHADOW_UNITS[0]))?;
    optional(renderer.set_uniform_texture(uniforms::ENTERING_SHADOW_TEXTURE, uniforms::SHADOW_UNITS[1]))?;
    optional(renderer.set_uniform_ivec2(uniforms::NUM_TILES, tiles))?;

    // one tile grid per uploaded primitive, in buffer order
    let grid = tile_info(tiles);
    let primitive_count = scene.leaving().len() + scene.entering().len();
    let info: Vec<f32> = grid.iter().copied().cycle().take(grid.len() * primitive_count).collect();
    let buffer = renderer.upload_attribute(&info)?;
    extras.attribute_buffer = Some(buffer);
    renderer.bind_attributes(buffer, &[float_attribute(uniforms::TILE_INFO_ATTRIBUTE, 1)]);

    optional(renderer.set_uniform_matrix(uniforms::ORTHO_PROJECTION_MATRIX, &ortho_projection(VORTEX_LIGHT_EXTENT)))?;
    optional(renderer.set_uniform_matrix(uniforms::ORTHO_VIEW_MATRIX, &vortex_light_view()))?;

    for _ in 0..2 {
        let depth = shadow_texture(renderer, TextureFormat::Depth16)?;
        extras.shadow_textures.push(depth);
        let target = renderer.create_offscreen_target(None, Some(depth))?;
        extras.shadow_targets.push(target);
    }

    for (unit, texture) in uniforms::SHADOW_UNITS.into_iter().zip(extras.shadow_textures.clone()) {
        context.bind_texture(renderer, unit, Some(texture));
    }
    Ok(())
}

fn prepare_honeycomb<R: Renderer + ?Sized>(
    renderer: &mut R,
    context: &mut RenderContext,
    extras: &mut VariantResources,
) -> Result<(), RendererError> {
    optional(renderer.set_uniform_texture(uniforms::COLOR_SHADOW_TEXTURE, uniforms::SHADOW_UNITS[0]))?;
    optional(renderer.set_uniform_texture(uniforms::DEPTH_SHADOW_TEXTURE, uniforms::SHADOW_UNITS[1]))?;

    // entering slide shows through the gaps of the leaving one
    renderer.set_capability(Capability::Blending, true);

    optional(renderer.set_uniform_matrix(
        uniforms::ORTHO_PROJECTION_MATRIX,
        &ortho_projection(HONEYCOMB_LIGHT_EXTENT),
    ))?;
    optional(renderer.set_uniform_matrix(uniforms::ORTHO_VIEW_MATRIX, &honeycomb_light_view()))?;

    let color = shadow_texture(renderer, TextureFormat::Rgba32Float)?;
    extras.shadow_textures.push(color);
    context.bind_texture(renderer, uniforms::SHADOW_UNITS[0], Some(color));

    let depth = shadow_texture(renderer, TextureFormat::Depth16)?;
    extras.shadow_textures.push(depth);
    context.bind_texture(renderer, uniforms::SHADOW_UNITS[1], Some(depth));

    let target = renderer.create_offscreen_target(Some(color), Some(depth))?;
    extras.shadow_targets.push(target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_through_white_defines() {
        let white = Variant::FadeThroughColor { white: true }.program();
        let black = Variant::FadeThroughColor { white: false }.program();
        assert_eq!(white.defines, "#define use_white");
        assert_eq!(black.defines, "");
        assert_eq!(white.fragment, "fadeBlackFragmentShader");
    }

    #[test]
    fn test_shadow_variants_have_geometry_shaders() {
        let vortex = Variant::Vortex { tiles: IVec2::splat(96) };
        assert_eq!(vortex.program().geometry, Some("vortexGeometryShader"));
        assert_eq!(Variant::Honeycomb.program().geometry, Some("honeycombGeometryShader"));
        assert!(vortex.uses_shadow_pass());
        assert!(!Variant::Simple.uses_shadow_pass());
        assert_eq!(Variant::Simple.program().geometry, None);
    }

    #[test]
    fn test_perm_texture_users() {
        assert!(Variant::StaticNoise.uses_perm_texture());
        assert!(Variant::Dissolve.uses_perm_texture());
        assert!(Variant::Honeycomb.uses_perm_texture());
        assert!(!Variant::FadeSmoothly.uses_perm_texture());
        assert!(!Variant::Ripple { center: Vec2::splat(0.5) }.uses_perm_texture());
    }

    #[test]
    fn test_reflection_programs_shared() {
        assert_eq!(Variant::Reflection.program(), Variant::Rochade.program());
        assert_eq!(Variant::Diamond.program(), Variant::Simple.program());
    }
}
