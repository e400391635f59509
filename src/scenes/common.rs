use glam::Vec3;

use crate::core::operation::Operation;
use crate::core::primitive::{slide_quad, Primitive};

/// Offset of the mirrored floor image below the slide
const FLOOR_GAP: f32 = -1.02;

/// Static mirror of a slide onto the floor beneath it
pub fn floor_reflection() -> Operation {
    Operation::scale(Vec3::new(1.0, -1.0, 1.0), Vec3::new(0.0, FLOOR_GAP, 0.0), false, -1.0, 0.0)
}

/// Full-slide quad carrying `operations`
pub fn quad_with(operations: Vec<Operation>) -> Primitive {
    slide_quad().with_operations(operations)
}

/// The same primitive followed by its floor reflection
pub fn with_reflection(primitive: &Primitive) -> [Primitive; 2] {
    let mut reflected = primitive.clone();
    reflected.push_operation(floor_reflection());
    [primitive.clone(), reflected]
}

/// Leaving primitive as the entering one, plus the operations that turn it away beforehand
pub fn flipped(primitive: &Primitive, extra: impl IntoIterator<Item = Operation>) -> Primitive {
    let mut entering = primitive.clone();
    for operation in extra {
        entering.push_operation(operation);
    }
    entering
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_reflection_mirrors_bottom_edge() {
        let m = floor_reflection().matrix_at(0.0, 1.0, 1.0);
        let p = m.transform_point3(Vec3::new(0.5, -1.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(0.5, -1.04, 0.0), 1e-5));
    }

    #[test]
    fn test_with_reflection_appends_mirror_only_to_copy() {
        let [slide, mirror] = with_reflection(&quad_with(vec![]));
        assert!(slide.operations().is_empty());
        assert_eq!(mirror.operations().len(), 1);
        assert_eq!(slide.vertices(), mirror.vertices());
    }
}
