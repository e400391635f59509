use glam::Vec2;

/// Slide coordinate of grid corner (x, y) on an nx × ny grid, clamped to the slide
pub fn grid_point(x: f32, y: f32, nx: f32, ny: f32) -> Vec2 {
    let x = x.max(0.0).min(nx);
    let y = y.max(0.0).min(ny);
    Vec2::new(x / nx, y / ny)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_point_origin() {
        assert_eq!(grid_point(0.0, 0.0, 8.0, 6.0), Vec2::ZERO);
    }

    #[test]
    fn test_grid_point_far_corner() {
        assert_eq!(grid_point(8.0, 6.0, 8.0, 6.0), Vec2::ONE);
    }

    #[test]
    fn test_grid_point_clamps_outside() {
        assert_eq!(grid_point(-1.0, 9.0, 4.0, 4.0), Vec2::new(0.0, 1.0));
        assert_eq!(grid_point(81.0, 2.0, 80.0, 4.0), Vec2::new(1.0, 0.5));
    }
}
