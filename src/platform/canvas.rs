//=========================================================================
// Pixel Canvas
//=========================================================================
//
// `Canvas` implementation drawing into a `pixels` surface attached to the
// winit window. The logical resolution is the configured screen size; the
// surface scales it to the window.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Crates =====================================================

use log::{info, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

//=== Internal Imports ====================================================

use super::framebuffer::Framebuffer;
use crate::assets::Assets;
use crate::core::render::{Canvas, Color, SpriteId};
use crate::core::world::{Rect, Size};
use crate::error::EngineError;

//=== PixelCanvas =========================================================

pub(crate) struct PixelCanvas {
    pixels: Pixels<'static>,
    assets: Assets,
    width: u32,
    height: u32,
}

impl PixelCanvas {
    /// Creates a `screen`-sized surface on `window`.
    pub fn new(window: Arc<Window>, screen: Size, assets: Assets) -> Result<Self, EngineError> {
        let inner = window.inner_size();
        let width = screen.width as u32;
        let height = screen.height as u32;

        let surface = SurfaceTexture::new(inner.width, inner.height, window);
        let mut pixels = Pixels::new(width, height, surface)?;
        Framebuffer::new(pixels.frame_mut(), width, height).clear(Color::BLACK);

        info!(target: "platform", "Pixel surface created: {}x{} on {}x{} window", width, height, inner.width, inner.height);

        Ok(Self {
            pixels,
            assets,
            width,
            height,
        })
    }

    /// Follows a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(e) = self.pixels.resize_surface(width, height) {
            warn!(target: "platform", "Surface resize to {}x{} failed: {}", width, height, e);
        }
    }
}

impl Canvas for PixelCanvas {
    fn sprite_size(&self, sprite: SpriteId) -> Size {
        self.assets.size(sprite)
    }

    fn draw_sprite(&mut self, sprite: SpriteId, x: i32, y: i32, clip: Option<Rect>) {
        let Some(image) = self.assets.get(sprite) else {
            warn!(target: "platform", "Sprite {:?} not loaded", sprite);
            return;
        };

        Framebuffer::new(self.pixels.frame_mut(), self.width, self.height).blit(image, x, y, clip);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        Framebuffer::new(self.pixels.frame_mut(), self.width, self.height).fill_rect(rect, color);
    }

    fn present(&mut self) -> Result<(), EngineError> {
        self.pixels.render()?;
        Ok(())
    }
}
