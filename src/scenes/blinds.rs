use glam::{Vec2, Vec3};

use crate::core::{Operation, Primitive, TransitionScene};
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

/// Strips rotating like the slats of a venetian blind, each a face of a triangular prism
pub fn create_venetian_blinds_transition(vertical: bool, parts: u16) -> Transition {
    let parts = parts.max(1);
    let t30 = 30f32.to_radians().tan();
    let p = 1.0 / f32::from(parts);

    let mut leaving = Vec::with_capacity(usize::from(parts));
    let mut entering = Vec::with_capacity(usize::from(parts));
    let mut ln = 0.0;

    for i in 0..parts {
        let n = f32::from(i + 1) / f32::from(parts);
        let mut slat = Primitive::new();

        if vertical {
            slat.push_triangle(Vec2::new(ln, 0.0), Vec2::new(n, 0.0), Vec2::new(ln, 1.0));
            slat.push_triangle(Vec2::new(n, 0.0), Vec2::new(ln, 1.0), Vec2::new(n, 1.0));
            slat.push_operation(Operation::rotate_and_scale_depth_by_width(
                Vec3::Y,
                Vec3::new(n + ln - 1.0, 0.0, -t30 * p),
                -120.0,
                true,
                true,
                0.0,
                1.0,
            ));
        } else {
            slat.push_triangle(Vec2::new(0.0, ln), Vec2::new(1.0, ln), Vec2::new(0.0, n));
            slat.push_triangle(Vec2::new(1.0, ln), Vec2::new(0.0, n), Vec2::new(1.0, n));
            slat.push_operation(Operation::rotate_and_scale_depth_by_height(
                Vec3::X,
                Vec3::new(0.0, 1.0 - n - ln, -t30 * p),
                -120.0,
                true,
                true,
                0.0,
                1.0,
            ));
        }
        leaving.push(slat.clone());

        let (axis, edge, center) = if vertical {
            (Vec3::Y, Vec3::new(2.0 * n - 1.0, 0.0, 0.0), Vec3::new(n + ln - 1.0, 0.0, 0.0))
        } else {
            (Vec3::X, Vec3::new(0.0, 1.0 - 2.0 * n, 0.0), Vec3::new(0.0, 1.0 - n - ln, 0.0))
        };
        slat.push_operation(Operation::rotate(axis, edge, -60.0, false, -1.0, 0.0));
        slat.push_operation(Operation::rotate(axis, center, 180.0, false, -1.0, 0.0));
        entering.push(slat);

        ln = n;
    }

    let scene = TransitionScene::new(leaving, entering);
    Transition::new("venetian_blinds", scene, TransitionSettings::default(), Variant::Simple)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_slat_count() {
        let transition = create_venetian_blinds_transition(true, 8);
        assert_eq!(transition.scene().leaving().len(), 8);
        assert_eq!(transition.scene().entering().len(), 8);
        assert!(transition.scene().entering().iter().all(|s| s.operations().len() == 3));
    }

    #[test]
    fn test_leaving_turn_completes_at_window_end() {
        let transition = create_venetian_blinds_transition(true, 8);
        for slat in transition.scene().leaving() {
            let end = slat.transform_at(1.0, 1.0, 1.0);
            let before = slat.transform_at(0.9, 1.0, 1.0);
            let normal = end.transform_vector3(Vec3::Z);
            assert!((normal.z + 0.5).abs() < EPS);
            assert!(!end.abs_diff_eq(before, EPS));
        }
    }

    #[test]
    fn test_entering_slats_face_away_then_align() {
        for vertical in [true, false] {
            let transition = create_venetian_blinds_transition(vertical, 8);
            for slat in transition.scene().entering() {
                let start = slat.transform_at(0.0, 1.0, 1.0);
                assert!(start.transform_vector3(Vec3::Z).z < 0.0);

                let end = slat.transform_at(1.0, 1.0, 1.0);
                for vertex in slat.vertices() {
                    let p = vertex.position();
                    assert!(end.transform_point3(p).abs_diff_eq(p, EPS));
                }
            }
        }
    }

    #[test]
    fn test_horizontal_slats_span_full_width() {
        let transition = create_venetian_blinds_transition(false, 4);
        let first = &transition.scene().leaving()[0];
        let xs: Vec<f32> = first.vertices().iter().map(|v| v.tex_coord().x).collect();
        assert!(xs.contains(&0.0) && xs.contains(&1.0));
        assert!(first.vertices().iter().all(|v| v.tex_coord().y <= 0.25));
    }
}
