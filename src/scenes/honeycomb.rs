use glam::Vec2;

use crate::core::{Primitive, TransitionScene};
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

const CELLS_X: i32 = 21;
const CELLS_Y: i32 = 21;

/// One seed triangle per cell; the geometry shader grows each into a hexagon
fn honeycomb_cells() -> Primitive {
    let mut cells = Primitive::new();
    for y in (0..CELLS_Y + 2).step_by(2) {
        for x in (0..CELLS_X + 2).step_by(2) {
            let column = if y % 4 != 0 { x } else { x + 1 };
            let seed = Vec2::new(column as f32 / CELLS_X as f32, y as f32 / CELLS_Y as f32);
            cells.push_triangle(seed, Vec2::new(1.0, 0.0), Vec2::ZERO);
        }
    }
    cells
}

/// Leaving slide breaks into hexagons that fly off, revealing the entering slide
pub fn create_honeycomb_transition() -> Transition {
    let cells = honeycomb_cells();
    let scene = TransitionScene::new(vec![cells.clone()], vec![cells]);
    let settings = TransitionSettings::default().with_required_version(3.2);
    Transition::new("honeycomb", scene, settings, Variant::Honeycomb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_triangle_per_cell() {
        let transition = create_honeycomb_transition();
        let scene = transition.scene();
        assert_eq!(scene.leaving()[0].triangle_count(), 12 * 12);
        assert_eq!(scene.leaving(), scene.entering());
    }

    #[test]
    fn test_alternate_rows_are_offset() {
        let cells = honeycomb_cells();
        let first_row = cells.vertices()[0].tex_coord();
        let second_row = cells.vertices()[12 * 3].tex_coord();
        assert!((first_row.x - 1.0 / 21.0).abs() < 1e-6);
        assert_eq!(second_row.x, 0.0);
    }

    #[test]
    fn test_honeycomb_requires_geometry_shaders() {
        let transition = create_honeycomb_transition();
        assert_eq!(transition.settings().required_graphics_version, 3.2);
        assert!(transition.settings().use_mipmap_leaving);
    }
}
