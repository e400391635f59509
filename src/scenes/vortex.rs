use glam::{IVec2, Vec2};

use crate::core::{Primitive, TransitionScene};
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

/// Tiles per side of the vortex grid
const VORTEX_TILES: i32 = 96;
/// Largest tile index that still packs into one byte
const MAX_TILES: i32 = 255;

/// Per-vertex tile attribute: `x + (y << 8) + (v << 16)`, six vertices per tile, x outermost
pub fn tile_info(tiles: IVec2) -> Vec<f32> {
    let tiles = tiles.clamp(IVec2::ONE, IVec2::splat(MAX_TILES));
    let mut info = Vec::with_capacity((tiles.x * tiles.y * 6) as usize);
    for x in 0..tiles.x {
        for y in 0..tiles.y {
            for v in 0..6 {
                info.push((x + (y << 8) + (v << 16)) as f32);
            }
        }
    }
    info
}

fn tile_grid(tiles: IVec2) -> Primitive {
    let (nx, ny) = (tiles.x as f32, tiles.y as f32);
    let corner = |x: i32, y: i32| Vec2::new(x as f32 / nx, y as f32 / ny);

    let mut grid = Primitive::new();
    for x in 0..tiles.x {
        for y in 0..tiles.y {
            grid.push_triangle(corner(x, y), corner(x + 1, y), corner(x, y + 1));
            grid.push_triangle(corner(x + 1, y), corner(x, y + 1), corner(x + 1, y + 1));
        }
    }
    grid
}

/// Slide breaks into tiles that swirl away, casting shadows on each other
pub fn create_vortex_transition() -> Transition {
    let tiles = IVec2::splat(VORTEX_TILES);
    let grid = tile_grid(tiles);
    let scene = TransitionScene::new(vec![grid.clone()], vec![grid]);
    let settings = TransitionSettings::without_mipmaps().with_required_version(3.2);
    Transition::new("vortex", scene, settings, Variant::Vortex { tiles })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_info_matches_vertex_count() {
        let transition = create_vortex_transition();
        let grid = &transition.scene().leaving()[0];
        assert_eq!(grid.vertex_count(), 96 * 96 * 6);
        assert_eq!(tile_info(IVec2::splat(96)).len(), grid.vertex_count());
    }

    #[test]
    fn test_tile_info_packing() {
        let info = tile_info(IVec2::new(3, 2));
        assert_eq!(&info[..6], &[0.0, 65536.0, 131072.0, 196608.0, 262144.0, 327680.0]);
        // second tile is (x=0, y=1)
        assert_eq!(info[6], 256.0);
        // third tile moves to the next column
        assert_eq!(info[12], 1.0);
    }

    #[test]
    fn test_tile_info_clamps_tile_counts() {
        assert_eq!(tile_info(IVec2::new(300, 1)).len(), 255 * 6);
        assert_eq!(tile_info(IVec2::ZERO).len(), 6);
    }

    #[test]
    fn test_vortex_settings() {
        let transition = create_vortex_transition();
        assert_eq!(transition.settings().required_graphics_version, 3.2);
        assert!(!transition.settings().use_mipmap_entering);
        assert_eq!(transition.variant(), Variant::Vortex { tiles: IVec2::splat(96) });
    }
}
