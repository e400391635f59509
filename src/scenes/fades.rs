use glam::Vec2;

use crate::core::{slide_quad, TransitionScene};
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

/// Ripple origin in slide coordinates
const RIPPLE_CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// Quad on each side; the fragment shader does the mixing
fn blended(name: &'static str, variant: Variant) -> Transition {
    let scene = TransitionScene::new(vec![slide_quad()], vec![slide_quad()]);
    Transition::new(name, scene, TransitionSettings::without_mipmaps(), variant)
}

pub fn create_fade_smoothly_transition() -> Transition {
    blended("fade_smoothly", Variant::FadeSmoothly)
}

/// Fade out to white or black, then in to the entering slide
pub fn create_fade_through_color_transition(white: bool) -> Transition {
    blended("fade_through_color", Variant::FadeThroughColor { white })
}

pub fn create_static_transition() -> Transition {
    blended("static_noise", Variant::StaticNoise)
}

pub fn create_dissolve_transition() -> Transition {
    blended("dissolve", Variant::Dissolve)
}

pub fn create_ripple_transition() -> Transition {
    blended("ripple", Variant::Ripple { center: RIPPLE_CENTER })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blended_transitions_share_geometry() {
        for transition in [
            create_fade_smoothly_transition(),
            create_fade_through_color_transition(true),
            create_static_transition(),
            create_dissolve_transition(),
            create_ripple_transition(),
        ] {
            let scene = transition.scene();
            assert_eq!(scene.leaving().len(), 1);
            assert_eq!(scene.entering().len(), 1);
            assert!(scene.overall().is_empty());
            assert!(!transition.settings().use_mipmap_leaving);
            assert!(!transition.settings().use_mipmap_entering);
        }
    }

    #[test]
    fn test_ripple_centred() {
        assert_eq!(
            create_ripple_transition().variant(),
            Variant::Ripple { center: Vec2::splat(0.5) }
        );
    }

    #[test]
    fn test_fade_colour_flag() {
        assert_eq!(
            create_fade_through_color_transition(false).variant(),
            Variant::FadeThroughColor { white: false }
        );
    }
}
