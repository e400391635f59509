use glam::Vec3;

use crate::core::{Operation, Primitive, TransitionScene};
use crate::math::grid_point;
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

/// Flip pivot of a two-triangle tile: midpoint of its shared diagonal
pub fn tile_pivot(tile: &Primitive) -> Vec3 {
    (tile.vertex(1) + tile.vertex(3)) / 2.0
}

/// Grid of `columns` × `rows` tiles, each flipping in turn from the top left
pub fn tile_flip_scene(columns: u16, rows: u16) -> TransitionScene {
    let (nx, ny) = (f32::from(columns.max(1)), f32::from(rows.max(1)));
    let mut leaving = Vec::with_capacity(usize::from(columns) * usize::from(rows));
    let mut entering = Vec::with_capacity(leaving.capacity());

    for x in 0..columns.max(1) {
        for y in 0..rows.max(1) {
            let (x, y) = (f32::from(x), f32::from(y));
            let x11 = grid_point(x, y, nx, ny);
            let x12 = grid_point(x, y + 1.0, nx, ny);
            let x21 = grid_point(x + 1.0, y, nx, ny);
            let x22 = grid_point(x + 1.0, y + 1.0, nx, ny);

            let mut tile = Primitive::new();
            tile.push_triangle(x21, x11, x12);
            tile.push_triangle(x22, x21, x12);

            let pivot = tile_pivot(&tile);
            let (t0, t1) = (x11.x * x11.y / 2.0, (x22.x * x22.y + 1.0) / 2.0);
            tile.push_operation(Operation::rotate(Vec3::Y, pivot, 180.0, true, t0, t1));
            leaving.push(tile.clone());

            tile.push_operation(Operation::rotate(Vec3::Y, pivot, -180.0, false, t0, t1));
            entering.push(tile);
        }
    }

    TransitionScene::new(leaving, entering)
}

/// `columns` × `rows` tiles turning over to reveal the entering slide
pub fn create_tile_flip_transition(columns: u16, rows: u16) -> Transition {
    Transition::new(
        "n_by_m_tile_flip",
        tile_flip_scene(columns, rows),
        TransitionSettings::default(),
        Variant::Simple,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_tile_counts() {
        let transition = create_tile_flip_transition(8, 6);
        let scene = transition.scene();
        assert_eq!(scene.leaving().len(), 48);
        assert_eq!(scene.entering().len(), 48);
        let vertices: usize = scene.leaving().iter().map(Primitive::vertex_count).sum();
        assert_eq!(vertices, 8 * 6 * 6);
    }

    #[test]
    fn test_rows_cover_the_slide() {
        let scene = tile_flip_scene(2, 3);
        let max_v = scene
            .leaving()
            .iter()
            .flat_map(|p| p.vertices().iter().map(|v| v.tex_coord().y))
            .fold(0.0f32, f32::max);
        assert_eq!(max_v, 1.0);
        let last = scene.leaving().last().unwrap();
        assert!(last.vertices().iter().any(|v| v.tex_coord() == Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_first_tile_window() {
        let scene = tile_flip_scene(4, 4);
        let window = scene.leaving()[0].operations()[0].window();
        assert_eq!(window.start, 0.0);
        assert!((window.end - (0.25 * 0.25 + 1.0) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_pivot_is_tile_center() {
        let scene = tile_flip_scene(1, 1);
        assert!(tile_pivot(&scene.leaving()[0]).abs_diff_eq(Vec3::ZERO, 1e-6));
    }

    #[test]
    fn test_entering_tile_faces_away_mid_window() {
        let scene = tile_flip_scene(1, 1);
        let normal = scene.entering()[0].transform_at(0.01, 1.0, 1.0).transform_vector3(Vec3::Z);
        assert!(normal.z < 0.0);
    }
}
