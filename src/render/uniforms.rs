use crate::error::RendererError;

pub const PROJECTION_MATRIX: &str = "u_projectionMatrix";
pub const MODEL_VIEW_MATRIX: &str = "u_modelViewMatrix";
pub const PRIMITIVE_TRANSFORM_MATRIX: &str = "u_primitiveTransformMatrix";
pub const SCENE_TRANSFORM_MATRIX: &str = "u_sceneTransformMatrix";
pub const OPERATIONS_TRANSFORM_MATRIX: &str = "u_operationsTransformMatrix";
pub const TIME: &str = "time";

pub const LEAVING_SLIDE_TEXTURE: &str = "leavingSlideTexture";
pub const ENTERING_SLIDE_TEXTURE: &str = "enteringSlideTexture";
pub const PERM_TEXTURE: &str = "permTexture";

pub const ORTHO_PROJECTION_MATRIX: &str = "orthoProjectionMatrix";
pub const ORTHO_VIEW_MATRIX: &str = "orthoViewMatrix";
pub const SLIDE: &str = "slide";
pub const SHADOW: &str = "shadow";
pub const NUM_TILES: &str = "numTiles";
pub const LEAVING_SHADOW_TEXTURE: &str = "leavingShadowTexture";
pub const ENTERING_SHADOW_TEXTURE: &str = "enteringShadowTexture";

pub const HEXAGON_SIZE: &str = "hexagonSize";
pub const SELECTED_TEXTURE: &str = "selectedTexture";
pub const COLOR_SHADOW_TEXTURE: &str = "colorShadowTexture";
pub const DEPTH_SHADOW_TEXTURE: &str = "depthShadowTexture";

pub const CENTER: &str = "center";
pub const SLIDE_RATIO: &str = "slideRatio";

pub const TILE_INFO_ATTRIBUTE: &str = "tileInfo";
pub const CENTER_ATTRIBUTE: &str = "center";

/// Texture units shared with the shaders
pub const LEAVING_SLIDE_UNIT: u32 = 0;
pub const PERM_UNIT: u32 = 1;
pub const ENTERING_SLIDE_UNIT: u32 = 2;
pub const SHADOW_UNITS: [u32; 2] = [2, 3];

/// Treat a uniform the current program lacks as a no-op
pub fn optional(result: Result<(), RendererError>) -> Result<(), RendererError> {
    match result {
        Err(RendererError::UnknownUniform(name)) => {
            log::trace!("Program has no uniform {name}, skipping");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_swallows_unknown_uniform() {
        assert!(optional(Err(RendererError::UnknownUniform("slide".into()))).is_ok());
    }

    #[test]
    fn test_optional_keeps_other_errors() {
        let result = optional(Err(RendererError::OutOfMemory));
        assert_eq!(result, Err(RendererError::OutOfMemory));
    }
}
