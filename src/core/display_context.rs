use glam::{Mat4, Vec3};

/// Display context - pixel dimensions of a slide or of the output surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayContext {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayContext {
    /// Create new display context
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, 1 for a degenerate height
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Scene transform fitting the [-1,1]² model space inside the display
    pub fn letterbox_matrix(&self) -> Mat4 {
        let (width, height) = (self.width.max(1) as f32, self.height.max(1) as f32);
        if height > width {
            Mat4::from_scale(Vec3::new(height / width, 1.0, 1.0))
        } else {
            Mat4::from_scale(Vec3::new(1.0, width / height, 1.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_context_with_dimensions() {
        let ctx = DisplayContext::new(1920, 1080);
        assert_eq!(ctx.width, 1920);
        assert_eq!(ctx.height, 1080);
    }

    #[test]
    fn test_landscape_letterbox_stretches_y() {
        let ctx = DisplayContext::new(1600, 800);
        assert_eq!(ctx.letterbox_matrix(), Mat4::from_scale(Vec3::new(1.0, 2.0, 1.0)));
    }

    #[test]
    fn test_portrait_letterbox_stretches_x() {
        let ctx = DisplayContext::new(600, 900);
        assert_eq!(ctx.letterbox_matrix(), Mat4::from_scale(Vec3::new(1.5, 1.0, 1.0)));
    }

    #[test]
    fn test_square_letterbox_is_identity() {
        assert_eq!(DisplayContext::new(512, 512).letterbox_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_degenerate_dimensions_stay_finite() {
        let ctx = DisplayContext::new(0, 0);
        assert!(ctx.letterbox_matrix().is_finite());
        assert_eq!(ctx.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_various_common_resolutions() {
        let resolutions = [
            (640, 480),   // VGA
            (1024, 768),  // XGA
            (1280, 720),  // HD
            (1920, 1080), // Full HD
            (3840, 2160), // 4K UHD
        ];

        for (width, height) in resolutions {
            let ctx = DisplayContext::new(width, height);
            let expected = width as f32 / height as f32;
            assert!((ctx.aspect_ratio() - expected).abs() < 1e-6);
            let corner = ctx.letterbox_matrix().transform_point3(Vec3::new(1.0, 1.0, 0.0));
            assert!((corner.y - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_copy_semantics() {
        let ctx1 = DisplayContext::new(1280, 720);
        let ctx2 = ctx1; // Copy, not move

        assert_eq!(ctx1, ctx2);
    }
}
