use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, SQRT_2, TAU};

use super::tiles::tile_flip_scene;
use crate::core::{Operation, Primitive, TransitionScene};
use crate::math::random_xy_axis;
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

const NAME: &str = "revolving_circles";

/// Concentric rings each spinning about its own random axis
pub fn create_revolving_circles_transition(circles: u16, points: u16) -> Transition {
    create_revolving_circles_transition_with_rng(circles, points, &mut rand::thread_rng())
}

/// Same as `create_revolving_circles_transition` with the axis source supplied by the caller
pub fn create_revolving_circles_transition_with_rng<R: Rng + ?Sized>(
    circles: u16,
    points: u16,
    rng: &mut R,
) -> Transition {
    let scene = if circles < 2 || points < 4 {
        log::debug!("Revolving circles {circles}x{points} too coarse, using a single flipping tile");
        tile_flip_scene(1, 1)
    } else {
        rings_scene(circles, points, rng)
    };
    Transition::new(NAME, scene, TransitionSettings::default(), Variant::Simple)
}

struct Rings {
    directions: Vec<Vec2>,
    leaving: Vec<Primitive>,
    entering: Vec<Primitive>,
}

impl Rings {
    /// Slide coordinate at `radius` along direction `k`
    fn at(&self, radius: f32, k: usize) -> Vec2 {
        radius * self.directions[k % self.directions.len()] / 2.0 + Vec2::splat(0.5)
    }

    /// Same, with the outer shell pulled in to the slide edge
    fn clamped_at(&self, radius: f32, k: usize) -> Vec2 {
        let direction = self.directions[k % self.directions.len()];
        (radius * direction).clamp(Vec2::NEG_ONE, Vec2::ONE) / 2.0 + Vec2::splat(0.5)
    }

    fn push<R: Rng + ?Sized>(&mut self, ring: Primitive, t0: f32, t1: f32, rng: &mut R) {
        let axis = random_xy_axis(rng);
        let leaving = ring.with_operations(vec![Operation::rotate(axis, Vec3::ZERO, 180.0, true, t0, t1)]);
        let mut entering = leaving.clone();
        entering.push_operation(Operation::rotate(axis, Vec3::ZERO, -180.0, false, 0.0, 1.0));
        self.leaving.push(leaving);
        self.entering.push(entering);
    }
}

fn rings_scene<R: Rng + ?Sized>(circles: u16, points: u16, rng: &mut R) -> TransitionScene {
    let step = TAU / f32::from(points);
    let mut rings = Rings {
        directions: (0..points)
            .map(|k| {
                let angle = f32::from(k) * step - FRAC_PI_2;
                Vec2::new(angle.cos(), angle.sin())
            })
            .collect(),
        leaving: Vec::with_capacity(usize::from(circles)),
        entering: Vec::with_capacity(usize::from(circles)),
    };
    let points = usize::from(points);

    let ring_width = 1.0 / f32::from(circles);
    let mut radius = ring_width;
    let mut next = 2.0 * ring_width;

    let mut disc = Primitive::new();
    for k in 0..points {
        disc.push_triangle(Vec2::splat(0.5), rings.at(radius, k + 1), rings.at(radius, k));
    }
    rings.push(disc, radius / 2.0, (next + 1.0) / 2.0, rng);
    let mut last = radius;
    radius = next;
    next += ring_width;

    for _ in 1..circles - 1 {
        let mut ring = Primitive::new();
        for side in 0..points {
            ring.push_triangle(rings.at(radius, side), rings.at(last, side), rings.at(last, side + 1));
            ring.push_triangle(rings.at(radius, side), rings.at(last, side + 1), rings.at(radius, side + 1));
        }
        rings.push(ring, radius / 2.0, (next + 1.0) / 2.0, rng);
        last = radius;
        radius = next;
        next += ring_width;
    }

    let mut shell = Primitive::new();
    for side in 0..points {
        shell.push_triangle(rings.clamped_at(SQRT_2, side), rings.at(last, side), rings.at(last, side + 1));
        shell.push_triangle(
            rings.clamped_at(SQRT_2, side),
            rings.at(last, side + 1),
            rings.clamped_at(SQRT_2, side + 1),
        );
    }
    rings.push(shell, (last + ring_width) / 2.0, 1.0, rng);

    TransitionScene::new(rings.leaving, rings.entering)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(circles: u16, points: u16) -> Transition {
        create_revolving_circles_transition_with_rng(circles, points, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_ring_vertex_counts() {
        let transition = seeded(8, 128);
        let scene = transition.scene();
        assert_eq!(scene.leaving().len(), 8);
        assert_eq!(scene.entering().len(), 8);
        assert_eq!(scene.leaving()[0].vertex_count(), 128 * 3);
        assert!(scene.leaving()[1..].iter().all(|ring| ring.vertex_count() == 128 * 6));
    }

    #[test]
    fn test_coarse_parameters_fall_back_to_single_tile() {
        for (circles, points) in [(1, 128), (8, 3)] {
            let transition = seeded(circles, points);
            let scene = transition.scene();
            assert_eq!(transition.name(), "revolving_circles");
            assert_eq!(scene.leaving().len(), 1);
            assert_eq!(scene.entering().len(), 1);
            assert_eq!(scene.leaving()[0].triangle_count(), 2);
            let m = scene.leaving()[0].transform_at(0.0, 1.0, 1.0);
            assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
        }
    }

    #[test]
    fn test_ring_windows() {
        let transition = seeded(4, 16);
        let scene = transition.scene();
        let windows: Vec<_> = scene.leaving().iter().map(|r| r.operations()[0].window()).collect();
        assert!((windows[0].start - 0.125).abs() < 1e-6);
        assert!((windows[0].end - 0.75).abs() < 1e-6);
        assert!((windows[1].start - 0.25).abs() < 1e-6);
        assert!((windows[3].start - 0.5).abs() < 1e-6);
        assert_eq!(windows[3].end, 1.0);
    }

    #[test]
    fn test_shell_reaches_slide_corners() {
        let transition = seeded(3, 8);
        let shell = transition.scene().leaving().last().unwrap();
        // direction 3 points down-right and is clamped onto the slide corner
        assert!(shell.vertices().iter().any(|v| (v.tex_coord() - Vec2::new(1.0, 1.0)).length() < 1e-5));
        assert!(shell
            .vertices()
            .iter()
            .all(|v| (0.0..=1.0).contains(&v.tex_coord().x) && (0.0..=1.0).contains(&v.tex_coord().y)));
    }

    #[test]
    fn test_same_seed_same_axes() {
        let a = seeded(4, 16);
        let b = seeded(4, 16);
        assert_eq!(a.scene().leaving(), b.scene().leaving());
    }

    #[test]
    fn test_entering_rings_start_turned_away() {
        let transition = seeded(4, 16);
        for ring in transition.scene().entering() {
            let window = ring.operations()[0].window();
            let time = window.start + 1e-3;
            let normal = ring.transform_at(time, 1.0, 1.0).transform_vector3(Vec3::Z);
            assert!(normal.z < 0.0);
        }
    }
}
