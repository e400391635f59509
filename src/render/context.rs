use crate::traits::{Renderer, TargetHandle, TextureHandle, Viewport};

/// Texture units tracked by the context
pub const TEXTURE_UNITS: usize = 4;

/// Side length of off-screen shadow maps
pub const SHADOW_MAP_SIZE: u32 = 2048;

/// Where draw calls currently land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderTarget {
    #[default]
    Default,
    Offscreen(TargetHandle),
}

/// Host-owned slide textures for one slide change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTextures {
    pub leaving: TextureHandle,
    pub entering: TextureHandle,
}

impl SlideTextures {
    pub fn new(leaving: TextureHandle, entering: TextureHandle) -> Self {
        Self { leaving, entering }
    }
}

/// Renderer state a transition relies on, passed explicitly to every call
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    bound: [Option<TextureHandle>; TEXTURE_UNITS],
    target: RenderTarget,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `texture` to `unit` on the renderer and remember it
    pub fn bind_texture<R: Renderer + ?Sized>(&mut self, renderer: &mut R, unit: u32, texture: Option<TextureHandle>) {
        match self.bound.get_mut(unit as usize) {
            Some(slot) => *slot = texture,
            None => log::warn!("Texture unit {unit} is not tracked by the render context"),
        }
        renderer.bind_texture(unit, texture);
    }

    pub fn bound_texture(&self, unit: u32) -> Option<TextureHandle> {
        self.bound.get(unit as usize).copied().flatten()
    }

    pub fn target(&self) -> RenderTarget {
        self.target
    }

    /// Start drawing into `target`; the returned guard restores the default target
    /// and the current viewport when dropped
    pub fn begin_offscreen<'a, R: Renderer + ?Sized>(
        &'a mut self,
        renderer: &'a mut R,
        target: TargetHandle,
        width: u32,
        height: u32,
    ) -> OffscreenPass<'a, R> {
        let saved = renderer.viewport();
        renderer.begin_offscreen_pass(target, width, height);
        self.target = RenderTarget::Offscreen(target);
        OffscreenPass {
            renderer,
            context: self,
            saved,
            width,
            height,
        }
    }
}

/// Active off-screen pass
pub struct OffscreenPass<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
    context: &'a mut RenderContext,
    saved: Viewport,
    width: u32,
    height: u32,
}

impl<'a, R: Renderer + ?Sized> OffscreenPass<'a, R> {
    /// Continue the pass in another target of the same size
    pub fn switch_target(&mut self, target: TargetHandle) {
        self.renderer.begin_offscreen_pass(target, self.width, self.height);
        self.context.target = RenderTarget::Offscreen(target);
    }

    pub fn parts(&mut self) -> (&mut R, &mut RenderContext) {
        (&mut *self.renderer, &mut *self.context)
    }

    /// Viewport that will be restored
    pub fn saved_viewport(&self) -> Viewport {
        self.saved
    }
}

impl<'a, R: Renderer + ?Sized> Drop for OffscreenPass<'a, R> {
    fn drop(&mut self) {
        self.renderer.end_offscreen_pass(self.saved);
        self.context.target = RenderTarget::Default;
    }
}
