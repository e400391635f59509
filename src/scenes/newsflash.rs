use glam::Vec3;

use super::common::quad_with;
use crate::core::{Operation, TransitionScene};
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

/// Spinning newspaper headline: leaving slide whirls away, entering whirls in
pub fn create_newsflash_transition() -> Transition {
    let leaving = quad_with(vec![
        Operation::rotate(Vec3::Z, Vec3::ZERO, 3000.0, true, 0.0, 0.5),
        Operation::scale(Vec3::splat(0.01), Vec3::ZERO, true, 0.0, 0.5),
        Operation::translate(Vec3::new(-10000.0, 0.0, 0.0), false, 0.5, 2.0),
    ]);
    let entering = quad_with(vec![
        Operation::rotate(Vec3::Z, Vec3::ZERO, -3000.0, true, 0.5, 1.0),
        Operation::translate(Vec3::new(-100.0, 0.0, 0.0), false, -1.0, 1.0),
        Operation::translate(Vec3::new(100.0, 0.0, 0.0), false, 0.5, 1.0),
        Operation::scale(Vec3::splat(0.01), Vec3::ZERO, false, -1.0, 1.0),
        Operation::scale(Vec3::splat(100.0), Vec3::ZERO, true, 0.5, 1.0),
    ]);
    let overall = vec![Operation::rotate(Vec3::Z, Vec3::new(0.2, 0.2, 0.0), 1080.0, true, 0.0, 1.0)];

    let scene = TransitionScene::new(vec![leaving], vec![entering]).with_overall(overall);
    Transition::new("newsflash", scene, TransitionSettings::default(), Variant::Simple)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_leaving_is_thrown_off_screen_after_half_way() {
        let transition = create_newsflash_transition();
        let leaving = &transition.scene().leaving()[0];
        let p = leaving.transform_at(0.75, 1.0, 1.0).transform_point3(Vec3::ZERO);
        assert!(p.length() > 50.0);
    }

    #[test]
    fn test_entering_parked_off_screen_until_half_way() {
        let transition = create_newsflash_transition();
        let entering = &transition.scene().entering()[0];
        let p = entering.transform_at(0.25, 1.0, 1.0).transform_point3(Vec3::ZERO);
        assert!(p.x.abs() > 50.0);
    }

    #[test]
    fn test_entering_full_size_and_centred_at_end() {
        let transition = create_newsflash_transition();
        let scene = transition.scene();
        let m = scene.entering()[0].transform_at(1.0, 1.0, 1.0);
        assert!(m.transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::ZERO, EPS));
        assert!((m.transform_vector3(Vec3::X).length() - 1.0).abs() < EPS);
        // three full turns bring the whole scene back upright
        assert!(scene.overall_transform(1.0, 1.0, 1.0).abs_diff_eq(Mat4::IDENTITY, EPS));
    }
}
