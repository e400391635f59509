use super::display_context::DisplayContext;

/// Frame - time and sizes one transition frame is drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Normalized transition time
    pub time: f32,
    pub slide: DisplayContext,
    pub display: DisplayContext,
}

impl Frame {
    pub fn new(time: f32, slide: DisplayContext, display: DisplayContext) -> Self {
        Self { time, slide, display }
    }

    /// Frame where the slide fills the display
    pub fn full_screen(time: f32, width: u32, height: u32) -> Self {
        let size = DisplayContext::new(width, height);
        Self::new(time, size, size)
    }

    pub fn at(self, time: f32) -> Self {
        Self { time, ..self }
    }

    pub fn width_scale(&self) -> f32 {
        self.slide.width as f32 / self.display.width.max(1) as f32
    }

    pub fn height_scale(&self) -> f32 {
        self.slide.height as f32 / self.display.height.max(1) as f32
    }

    pub fn slide_ratio(&self) -> f32 {
        self.slide.aspect_ratio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_screen_scales_are_one() {
        let frame = Frame::full_screen(0.3, 1280, 720);
        assert_eq!(frame.width_scale(), 1.0);
        assert_eq!(frame.height_scale(), 1.0);
        assert!((frame.slide_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_scales_relative_to_display() {
        let frame = Frame::new(0.0, DisplayContext::new(800, 600), DisplayContext::new(1600, 1200));
        assert_eq!(frame.width_scale(), 0.5);
        assert_eq!(frame.height_scale(), 0.5);
    }

    #[test]
    fn test_at_keeps_sizes() {
        let frame = Frame::full_screen(0.0, 640, 480).at(0.75);
        assert_eq!(frame.time, 0.75);
        assert_eq!(frame.slide.width, 640);
    }
}
