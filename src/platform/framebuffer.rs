//=========================================================================
// Framebuffer
//=========================================================================
//
// Software drawing into a tightly packed RGBA8 pixel buffer.
//
// Everything is clipped against the buffer: sprites may be drawn partly
// or entirely off screen (the overworld houses routinely are).
//
//=========================================================================

//=== External Dependencies ===============================================

use image::RgbaImage;

//=== Internal Dependencies ===============================================

use crate::core::render::Color;
use crate::core::world::Rect;

//=== Framebuffer =========================================================

/// Borrowed RGBA8 pixel buffer of `width` x `height`.
pub(crate) struct Framebuffer<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Framebuffer<'a> {
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    //--- Drawing ----------------------------------------------------------

    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// Fills `rect` (clipped to the buffer) with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(area) = rect.intersection(&self.bounds()) else {
            return;
        };

        let rgba = color.to_rgba();
        for y in area.top()..area.bottom() {
            let start = self.index(area.left(), y);
            let end = self.index(area.right(), y);
            for pixel in self.pixels[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&rgba);
            }
        }
    }

    /// Draws `image` with its top-left corner, or the top-left corner of
    /// `clip`, at (`x`, `y`).
    ///
    /// `clip` selects a source rectangle of the image. Fully transparent
    /// pixels are skipped, partially transparent ones are blended.
    pub fn blit(&mut self, image: &RgbaImage, x: i32, y: i32, clip: Option<Rect>) {
        let image_bounds = Rect::new(0, 0, image.width() as i32, image.height() as i32);

        // Parts of the clip outside the image are skipped, and the
        // destination moves by the same amount so the visible part
        // stays where the full clip would have put it.
        let (source, placed) = match clip {
            Some(clip) => {
                let Some(source) = clip.intersection(&image_bounds) else {
                    return;
                };
                let placed = Rect::at(x + (source.x - clip.x), y + (source.y - clip.y), source.size());
                (source, placed)
            }
            None => (image_bounds, Rect::at(x, y, image_bounds.size())),
        };

        let Some(target) = placed.intersection(&self.bounds()) else {
            return;
        };

        for dy in target.top()..target.bottom() {
            let sy = source.y + (dy - placed.y);
            for dx in target.left()..target.right() {
                let sx = source.x + (dx - placed.x);
                let src = image.get_pixel(sx as u32, sy as u32).0;
                let alpha = src[3];
                if alpha == 0 {
                    continue;
                }

                let i = self.index(dx, dy);
                let dst = &mut self.pixels[i..i + 4];
                if alpha == u8::MAX {
                    dst.copy_from_slice(&src);
                } else {
                    blend(dst, src);
                }
            }
        }
    }

    #[cfg(test)]
    fn pixel(&self, x: i32, y: i32) -> [u8; 4] {
        let i = self.index(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }
}

/// Source-over blend of `src` onto an opaque `dst`.
fn blend(dst: &mut [u8], src: [u8; 4]) {
    let a = u16::from(src[3]);
    for c in 0..3 {
        let s = u16::from(src[c]);
        let d = u16::from(dst[c]);
        dst[c] = ((s * a + d * (255 - a)) / 255) as u8;
    }
    dst[3] = u8::MAX;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const W: u32 = 8;
    const H: u32 = 6;

    fn buffer() -> Vec<u8> {
        vec![0; (W * H * 4) as usize]
    }

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];
    const EMPTY: [u8; 4] = [0, 0, 0, 0];

    //--- Fill -------------------------------------------------------------

    #[test]
    fn clear_paints_every_pixel() {
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, W, H);
        fb.clear(Color::WHITE);
        assert!(pixels.iter().all(|&b| b == 255));
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, W, H);
        fb.fill_rect(Rect::new(6, 4, 10, 10), Color::BLACK);

        assert_eq!(fb.pixel(6, 4), BLACK);
        assert_eq!(fb.pixel(7, 5), BLACK);
        assert_eq!(fb.pixel(5, 4), EMPTY);
        assert_eq!(fb.pixel(6, 3), EMPTY);
    }

    #[test]
    fn fill_rect_fully_outside_is_noop() {
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, W, H);
        fb.fill_rect(Rect::new(-20, -20, 10, 10), Color::BLACK);
        assert!(pixels.iter().all(|&b| b == 0));
    }

    //--- Blit -------------------------------------------------------------

    #[test]
    fn blit_copies_opaque_pixels() {
        let image = RgbaImage::from_pixel(2, 2, Rgba(RED));
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, W, H);

        fb.blit(&image, 3, 2, None);

        assert_eq!(fb.pixel(3, 2), RED);
        assert_eq!(fb.pixel(4, 3), RED);
        assert_eq!(fb.pixel(5, 3), EMPTY);
        assert_eq!(fb.pixel(2, 2), EMPTY);
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut image = RgbaImage::from_pixel(2, 1, Rgba(RED));
        image.put_pixel(1, 0, Rgba([0, 255, 255, 0]));
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, W, H);

        fb.blit(&image, 0, 0, None);

        assert_eq!(fb.pixel(0, 0), RED);
        assert_eq!(fb.pixel(1, 0), EMPTY);
    }

    #[test]
    fn blit_blends_partial_alpha() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 51]));
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, W, H);
        fb.clear(Color::BLACK);

        fb.blit(&image, 0, 0, None);

        assert_eq!(fb.pixel(0, 0), [51, 51, 51, 255]);
    }

    #[test]
    fn blit_with_clip_draws_source_region_at_target() {
        // 4x1 image: columns 0..4 have red channel 0, 10, 20, 30.
        let mut image = RgbaImage::new(4, 1);
        for x in 0..4 {
            image.put_pixel(x, 0, Rgba([(x * 10) as u8, 0, 0, 255]));
        }
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, W, H);

        fb.blit(&image, 0, 0, Some(Rect::new(2, 0, 2, 1)));

        assert_eq!(fb.pixel(0, 0), [20, 0, 0, 255]);
        assert_eq!(fb.pixel(1, 0), [30, 0, 0, 255]);
        assert_eq!(fb.pixel(2, 0), EMPTY);
    }

    #[test]
    fn blit_with_negative_clip_origin_shifts_destination() {
        // 4x1 image: red channel 10, 20, 30, 40.
        let mut image = RgbaImage::new(4, 1);
        for x in 0..4 {
            image.put_pixel(x, 0, Rgba([((x + 1) * 10) as u8, 0, 0, 255]));
        }
        let mut pixels = vec![0; 8 * 4];
        let mut fb = Framebuffer::new(&mut pixels, 8, 1);

        fb.blit(&image, 0, 0, Some(Rect::new(-2, 0, 8, 1)));

        let row: Vec<u8> = pixels.chunks_exact(4).map(|p| p[0]).collect();
        assert_eq!(row, vec![0, 0, 10, 20, 30, 40, 0, 0]);
    }

    #[test]
    fn room_background_lines_up_with_camera_offset_when_viewport_is_larger() {
        // 2x2 level in a 4x4 viewport: camera sits at (-1, -1).
        let image = RgbaImage::from_pixel(2, 2, Rgba(RED));
        let mut pixels = vec![0; 4 * 4 * 4];
        let mut fb = Framebuffer::new(&mut pixels, 4, 4);

        fb.blit(&image, 0, 0, Some(Rect::new(-1, -1, 4, 4)));

        assert_eq!(fb.pixel(0, 0), EMPTY);
        assert_eq!(fb.pixel(1, 1), RED);
        assert_eq!(fb.pixel(2, 2), RED);
        assert_eq!(fb.pixel(3, 3), EMPTY);
    }

    #[test]
    fn blit_partly_offscreen_is_clipped() {
        let image = RgbaImage::from_pixel(4, 4, Rgba(RED));
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, W, H);

        fb.blit(&image, -2, -3, None);

        assert_eq!(fb.pixel(0, 0), RED);
        assert_eq!(fb.pixel(1, 0), RED);
        assert_eq!(fb.pixel(2, 0), EMPTY);
        assert_eq!(fb.pixel(0, 1), EMPTY);
    }

    #[test]
    fn blit_entirely_offscreen_is_noop() {
        let image = RgbaImage::from_pixel(4, 4, Rgba(RED));
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, W, H);

        fb.blit(&image, -640, -480, None);
        fb.blit(&image, 0, 0, Some(Rect::new(10, 10, 4, 4)));

        assert!(pixels.iter().all(|&b| b == 0));
    }
}
