use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

use super::common::quad_with;
use crate::core::{slide_quad, Operation, Primitive, SceneObject, TransitionScene};
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

const BLADES: usize = 7;
const BLADE_STEPS: usize = 24;
/// Swing of each blade about its hinge, in degrees
const BLADE_SWING: f32 = 87.0;
const INNER_RADIUS: f32 = 1.42;
const OUTER_RADIUS: f32 = 2.2;

/// Curved blade spanning three sevenths of a turn
fn iris_blade() -> Primitive {
    let point = |radius: f32, direction: Vec2| (radius * direction + Vec2::ONE) / 2.0;

    let mut blade = Primitive::new();
    let mut last = Vec2::X;
    for step in 1..=BLADE_STEPS {
        let t = step as f32 / BLADE_STEPS as f32;
        let angle = 3.0 * TAU * t / BLADES as f32;
        let direction = Vec2::new(angle.cos(), -angle.sin());

        blade.push_triangle(
            point(INNER_RADIUS, last),
            point(OUTER_RADIUS, last),
            point(INNER_RADIUS, direction),
        );
        blade.push_triangle(
            point(INNER_RADIUS, direction),
            point(OUTER_RADIUS, last),
            point(OUTER_RADIUS, direction),
        );
        last = direction;
    }
    blade
}

fn blade_operations(index: usize) -> Vec<Operation> {
    let angle = TAU * index as f32 / BLADES as f32;
    let hinge = Vec3::new(angle.cos(), angle.sin(), 0.0);

    let mut operations = vec![
        Operation::rotate(Vec3::Z, hinge, BLADE_SWING, true, 0.0, 0.5),
        Operation::rotate(Vec3::Z, hinge, -BLADE_SWING, true, 0.5, 1.0),
    ];
    if index > 0 {
        operations.extend([
            Operation::translate(hinge, false, -1.0, 0.0),
            Operation::rotate(Vec3::Z, Vec3::ZERO, index as f32 * 360.0 / BLADES as f32, false, -1.0, 0.0),
            Operation::translate(Vec3::new(-1.0, 0.0, 0.0), false, -1.0, 0.0),
        ]);
    }
    operations.push(Operation::translate(Vec3::Z, false, -2.0, 0.0));
    operations.push(Operation::rotate(Vec3::new(1.0, 0.5, 0.0), Vec3::X, -30.0, false, -1.0, 0.0));
    operations
}

/// Camera-style iris closes over the leaving slide and opens on the entering one
pub fn create_iris_transition() -> Transition {
    let leaving = quad_with(vec![
        Operation::translate(Vec3::new(0.0, 0.0, 0.000001), false, -1.0, 0.0),
        Operation::translate(Vec3::new(0.0, 0.0, -0.000002), false, 0.5, 1.0),
    ]);

    let blade = iris_blade();
    let mut iris = SceneObject::iris();
    for index in 0..BLADES {
        iris.push_primitive(blade.clone().with_operations(blade_operations(index)));
    }

    let scene = TransitionScene::new(vec![leaving], vec![slide_quad()]).with_scene_objects(vec![iris]);
    Transition::new("iris", scene, TransitionSettings::without_mipmaps(), Variant::Simple)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SceneObjectKind;

    #[test]
    fn test_iris_vertex_count() {
        let transition = create_iris_transition();
        let objects = transition.scene().scene_objects();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].kind(), SceneObjectKind::Iris);
        assert_eq!(objects[0].primitives().len(), 7);
        assert_eq!(objects[0].vertex_count(), 1008);
    }

    #[test]
    fn test_first_blade_skips_placement() {
        let transition = create_iris_transition();
        let blades = transition.scene().scene_objects()[0].primitives();
        assert_eq!(blades[0].operations().len(), 4);
        assert!(blades[1..].iter().all(|b| b.operations().len() == 7));
    }

    #[test]
    fn test_blade_starts_at_inner_radius_on_x_axis() {
        let blade = iris_blade();
        let first = blade.vertices()[0].tex_coord();
        assert!((first - Vec2::new(1.21, 0.5)).length() < 1e-5);
    }

    #[test]
    fn test_iris_disables_mipmaps() {
        let settings = *create_iris_transition().settings();
        assert!(!settings.use_mipmap_leaving);
        assert!(!settings.use_mipmap_entering);
    }

    #[test]
    fn test_leaving_slide_steps_behind_half_way() {
        let transition = create_iris_transition();
        let leaving = &transition.scene().leaving()[0];
        let early = leaving.transform_at(0.25, 1.0, 1.0).transform_point3(Vec3::ZERO);
        let late = leaving.transform_at(0.75, 1.0, 1.0).transform_point3(Vec3::ZERO);
        assert!(early.z > 0.0);
        assert!(late.z < 0.0);
    }
}
