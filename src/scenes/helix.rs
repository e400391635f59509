use glam::{Vec2, Vec3};

use super::tiles::tile_pivot;
use crate::core::{Operation, Primitive, TransitionScene};
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

/// Horizontal strips flipping one after another from the top
pub fn create_helix_transition(rows: u16) -> Transition {
    let rows = rows.max(1);
    let n = f32::from(rows);
    let mut leaving = Vec::with_capacity(usize::from(rows));
    let mut entering = Vec::with_capacity(usize::from(rows));

    for row in 0..rows {
        let i = f32::from(row);
        let (top, bottom) = (i / n, (i + 1.0) / n);

        let mut strip = Primitive::new();
        strip.push_triangle(Vec2::new(1.0, top), Vec2::new(0.0, top), Vec2::new(0.0, bottom));
        strip.push_triangle(Vec2::new(1.0, bottom), Vec2::new(1.0, top), Vec2::new(0.0, bottom));

        let pivot = tile_pivot(&strip);
        let t0 = ((i - n / 2.0) / n / 2.0).clamp(0.0, 1.0);
        let t1 = ((i + n / 2.0) / n / 2.0).clamp(0.0, 1.0);
        strip.push_operation(Operation::rotate(Vec3::Y, pivot, 180.0, true, t0, t1));
        leaving.push(strip.clone());

        strip.push_operation(Operation::rotate(Vec3::Y, pivot, -180.0, false, 0.0, 1.0));
        entering.push(strip);
    }

    let scene = TransitionScene::new(leaving, entering);
    Transition::new("helix", scene, TransitionSettings::default(), Variant::Simple)
}
