use glam::{Vec2, Vec3};

use crate::core::{slide_quad, Operation, Primitive, TransitionScene};
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

/// Leaving slide with a diamond-shaped hole that grows with `time`.
///
/// Up to half way the hole is a diamond inside the slide; after that only
/// the four corners remain.
pub fn diamond_leaving_slide(time: f32) -> Primitive {
    let v = Vec2::new;
    let mut slide = Primitive::new();

    if time > 0.5 {
        let m = 1.0 - time;
        slide.push_triangle(v(0.0, 0.0), v(m, 0.0), v(0.0, m));
        slide.push_triangle(v(time, 0.0), v(1.0, 0.0), v(1.0, m));
        slide.push_triangle(v(1.0, time), v(1.0, 1.0), v(time, 1.0));
        slide.push_triangle(v(0.0, time), v(m, 1.0), v(0.0, 1.0));
    } else {
        let l = 0.5 - time;
        let h = 0.5 + time;
        slide.push_triangle(v(0.0, 0.0), v(1.0, 0.0), v(0.5, l));
        slide.push_triangle(v(0.5, l), v(1.0, 0.0), v(h, 0.5));
        slide.push_triangle(v(1.0, 0.0), v(1.0, 1.0), v(h, 0.5));
        slide.push_triangle(v(h, 0.5), v(1.0, 1.0), v(0.5, h));
        slide.push_triangle(v(0.5, h), v(1.0, 1.0), v(0.0, 1.0));
        slide.push_triangle(v(l, 0.5), v(0.5, h), v(0.0, 1.0));
        slide.push_triangle(v(0.0, 0.0), v(l, 0.5), v(0.0, 1.0));
        slide.push_triangle(v(0.0, 0.0), v(0.5, l), v(l, 0.5));
    }

    slide.push_operation(Operation::translate(Vec3::new(0.0, 0.0, 0.00000001), false, -1.0, 0.0));
    slide
}

/// Entering slide shows through a widening diamond cut into the leaving one
pub fn create_diamond_transition() -> Transition {
    let scene = TransitionScene::new(vec![slide_quad()], vec![slide_quad()]);
    Transition::new("diamond", scene, TransitionSettings::without_mipmaps(), Variant::Diamond)
}
