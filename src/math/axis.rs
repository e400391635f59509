use glam::Vec3;
use rand::Rng;

/// Random unit vector in the XY plane, components drawn uniformly from [-1, 1]
pub fn random_xy_axis<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let axis = Vec3::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0), 0.0);
    axis.try_normalize().unwrap_or(Vec3::X)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_axis_is_unit_and_planar() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let axis = random_xy_axis(&mut rng);
            assert!((axis.length() - 1.0).abs() < 1e-5);
            assert_eq!(axis.z, 0.0);
        }
    }

    #[test]
    fn test_random_axis_is_seeded() {
        let a = random_xy_axis(&mut StdRng::seed_from_u64(42));
        let b = random_xy_axis(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
