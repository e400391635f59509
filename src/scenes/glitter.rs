use glam::IVec2;

use crate::core::{Primitive, TransitionScene};
use crate::math::grid_point;
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

const GRID_X: i32 = 80;
const GRID_Y: i32 = GRID_X * 4 / 3;
/// Hexagon columns and rows seen by the shader
const GLITTER_TILES: IVec2 = IVec2::new(41, 41 * 4 / 3);
/// Six triangles per hexagon
const HEXAGON_VERTICES: usize = 18;

fn push_hexagon(hexagon: &mut Primitive, x: i32, y: i32) {
    let at = |dx: f32, dy: f32| grid_point(x as f32 + dx, y as f32 + dy, GRID_X as f32, GRID_Y as f32);
    let center = at(0.0, 0.5);

    let rim = if y % 4 == 0 {
        [(-1.0, -1.0), (0.0, -2.0), (1.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]
    } else {
        [(-2.0, -1.0), (-1.0, -2.0), (0.0, -1.0), (0.0, 0.0), (-1.0, 1.0), (-2.0, 0.0)]
    };
    for (i, &(dx, dy)) in rim.iter().enumerate() {
        let (nx, ny) = rim[(i + 1) % rim.len()];
        hexagon.push_triangle(at(dx, dy), at(nx, ny), center);
    }
}

/// Centre attribute for every vertex: vertex 2 of each hexagon, repeated across its 18 vertices
pub fn hexagon_centers<'a>(primitives: impl IntoIterator<Item = &'a Primitive>) -> Vec<f32> {
    let mut centers = Vec::new();
    for primitive in primitives {
        for first in (0..primitive.vertex_count()).step_by(HEXAGON_VERTICES) {
            let Some(vertex) = primitive.vertices().get(first + 2) else {
                break;
            };
            let center = vertex.position;
            for _ in 0..HEXAGON_VERTICES {
                centers.extend_from_slice(&center);
            }
        }
    }
    centers
}

/// Slide shatters into hexagons that flip over one by one
pub fn create_glitter_transition() -> Transition {
    let mut hexagons = Primitive::new();
    for y in (0..GRID_Y + 2).step_by(2) {
        for x in (0..GRID_X + 2).step_by(2) {
            push_hexagon(&mut hexagons, x, y);
        }
    }

    let scene = TransitionScene::new(vec![hexagons], Vec::new());
    Transition::new(
        "glitter",
        scene,
        TransitionSettings::default(),
        Variant::Glitter { tiles: GLITTER_TILES },
    )
}
