use glam::Vec3;

use super::common::{flipped, quad_with, with_reflection};
use crate::core::{slide_quad, Operation, TransitionScene};
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

/// Quarter turn of a cube whose face is the slide, seen from outside
pub fn create_outside_cube_face_to_left_transition() -> Transition {
    cube_face_to_left("outside_cube_face_to_left", 1.0)
}

/// Quarter turn of a cube whose face is the slide, seen from inside
pub fn create_inside_cube_face_to_left_transition() -> Transition {
    cube_face_to_left("inside_cube_face_to_left", -1.0)
}

fn cube_face_to_left(name: &'static str, side: f32) -> Transition {
    let center = Vec3::new(0.0, 0.0, -side);
    let entering = quad_with(vec![Operation::rotate_and_scale_depth_by_width(
        Vec3::Y,
        center,
        90.0 * side,
        false,
        false,
        0.0,
        1.0,
    )]);
    let overall = vec![Operation::rotate_and_scale_depth_by_width(
        Vec3::Y,
        center,
        -90.0 * side,
        false,
        true,
        0.0,
        1.0,
    )];

    let scene = TransitionScene::new(vec![slide_quad()], vec![entering]).with_overall(overall);
    Transition::new(name, scene, TransitionSettings::default(), Variant::Simple)
}

/// Leaving slide tips over its bottom edge
pub fn create_fall_leaving_transition() -> Transition {
    let leaving = quad_with(vec![Operation::rotate_and_scale_depth_by_width(
        Vec3::X,
        Vec3::new(0.0, -1.0, 0.0),
        90.0,
        true,
        true,
        0.0,
        1.0,
    )]);
    let settings = TransitionSettings {
        use_mipmap_entering: false,
        ..TransitionSettings::default()
    };

    let scene = TransitionScene::new(vec![leaving], vec![slide_quad()]);
    Transition::new("fall_leaving", scene, settings, Variant::Simple)
}

/// Both slides spin half a turn above a reflecting floor
pub fn create_turn_around_transition() -> Transition {
    let leaving = with_reflection(&slide_quad());
    let entering = with_reflection(&quad_with(vec![Operation::rotate_and_scale_depth_by_width(
        Vec3::Y,
        Vec3::ZERO,
        -180.0,
        true,
        false,
        0.0,
        1.0,
    )]));
    let overall = vec![
        Operation::translate(Vec3::new(0.0, 0.0, -1.5), true, 0.0, 0.5),
        Operation::translate(Vec3::new(0.0, 0.0, 1.5), true, 0.5, 1.0),
        Operation::rotate_and_scale_depth_by_width(Vec3::Y, Vec3::ZERO, -180.0, true, true, 0.0, 1.0),
    ];

    let scene = TransitionScene::new(leaving.into(), entering.into()).with_overall(overall);
    Transition::new("turn_around", scene, TransitionSettings::default(), Variant::Reflection)
}

/// Entering slide swings down over the leaving one from the top left corner
pub fn create_turn_down_transition() -> Transition {
    let corner = Vec3::new(-1.0, 1.0, 0.0);
    let entering = flipped(
        &slide_quad(),
        [
            Operation::translate(Vec3::new(0.0, 0.0, 0.0001), false, -1.0, 0.0),
            Operation::rotate(Vec3::Z, corner, -90.0, true, 0.0, 1.0),
            Operation::rotate(Vec3::Z, corner, 90.0, false, -1.0, 0.0),
        ],
    );
    let settings = TransitionSettings {
        use_mipmap_leaving: false,
        ..TransitionSettings::default()
    };

    let scene = TransitionScene::new(vec![slide_quad()], vec![entering]);
    Transition::new("turn_down", scene, settings, Variant::Simple)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_outside_cube_leaving_is_aspect_scale_at_start() {
        let transition = create_outside_cube_face_to_left_transition();
        let scene = transition.scene();
        let m = scene.leaving()[0].transform_at(0.0, 0.75, 1.0);
        assert!(m.abs_diff_eq(Mat4::from_scale(Vec3::new(0.75, 1.0, 1.0)), EPS));
        assert!(scene.overall_transform(0.0, 0.75, 1.0).abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn test_cube_entering_faces_camera_at_end() {
        for transition in [
            create_outside_cube_face_to_left_transition(),
            create_inside_cube_face_to_left_transition(),
        ] {
            let scene = transition.scene();
            let overall = scene.overall_transform(1.0, 0.75, 1.0);
            let entering = scene.entering()[0].transform_at(1.0, 0.75, 1.0);
            let m = overall * entering;
            assert!(m.abs_diff_eq(Mat4::from_scale(Vec3::new(0.75, 1.0, 1.0)), EPS));
        }
    }

    #[test]
    fn test_cube_entering_starts_on_the_side_face() {
        let scene = create_outside_cube_face_to_left_transition().scene().clone();
        let normal = scene.entering()[0].transform_at(0.5, 1.0, 1.0).transform_vector3(Vec3::Z);
        // the step placement holds the entering face a quarter turn away
        assert!(normal.z.abs() < EPS);
        assert!(normal.x > 0.99);
    }

    #[test]
    fn test_turn_around_has_reflections() {
        let transition = create_turn_around_transition();
        assert_eq!(transition.variant(), Variant::Reflection);
        assert_eq!(transition.scene().leaving().len(), 2);
        assert_eq!(transition.scene().entering().len(), 2);
        assert_eq!(transition.scene().entering()[1].operations().len(), 2);
        assert_eq!(transition.scene().overall().len(), 3);
    }

    #[test]
    fn test_mipmap_settings() {
        assert!(!create_fall_leaving_transition().settings().use_mipmap_entering);
        assert!(create_fall_leaving_transition().settings().use_mipmap_leaving);
        assert!(!create_turn_down_transition().settings().use_mipmap_leaving);
    }

    #[test]
    fn test_turn_down_entering_lands_in_place() {
        let scene = create_turn_down_transition().scene().clone();
        let m = scene.entering()[0].transform_at(1.0, 1.0, 1.0);
        let p = m.transform_point3(Vec3::new(1.0, -1.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(1.0, -1.0, 0.0001), EPS));
    }
}
