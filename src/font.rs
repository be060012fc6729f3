//=========================================================================
// Font
//=========================================================================
//
// TrueType loading and single-line text rasterization.
//
// Text is rendered once, at startup, into an RGBA sprite: glyph coverage
// becomes the alpha channel of a solid colour, everything else stays
// fully transparent.
//
//   "Presents..."  ─charmap─>  glyph ids  ─swash─>  alpha masks
//                                                    └─ RgbaImage
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::path::Path;

//=== External Crates =====================================================

use image::{Rgba, RgbaImage};
use log::debug;
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::{CacheKey, FontRef};

//=== Internal Dependencies ===============================================

use crate::core::render::Color;
use crate::error::{EngineError, FontError};

//=== Font ================================================================

/// An owned font face.
pub struct Font {
    data: Vec<u8>,
    offset: u32,
    key: CacheKey,
}

impl Font {
    //--- Construction -----------------------------------------------------

    /// Reads and validates the font file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Font`] if the file cannot be read or holds
    /// no usable font face.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let font_error = |source| EngineError::Font {
            path: path.to_path_buf(),
            source,
        };

        let data = fs::read(path).map_err(|e| font_error(FontError::Io(e)))?;
        let font = Self::from_bytes(data).map_err(font_error)?;
        debug!(target: "assets", "Loaded font {}", path.display());
        Ok(font)
    }

    /// Wraps the first face of an in-memory font file.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontError> {
        let face = FontRef::from_index(&data, 0).ok_or(FontError::Invalid)?;
        let (offset, key) = (face.offset, face.key);
        Ok(Self { data, offset, key })
    }

    fn as_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    //--- Rasterization ----------------------------------------------------

    /// Renders `text` on one line at `size` pixels.
    ///
    /// The image is as wide as the summed advances and as tall as the
    /// font's ascent plus descent. It is never smaller than 1x1.
    pub fn render_text(&self, text: &str, size: f32, color: Color) -> RgbaImage {
        let font = self.as_ref();
        let metrics = font.metrics(&[]);
        let glyph_metrics = font.glyph_metrics(&[]);
        let charmap = font.charmap();
        let scale = size / f32::from(metrics.units_per_em.max(1));

        let ascent = metrics.ascent * scale;
        let descent = metrics.descent.abs() * scale;

        // Pen position of every glyph along the baseline.
        let mut pen = 0.0f32;
        let glyphs: Vec<(u16, f32)> = text
            .chars()
            .map(|ch| {
                let id = charmap.map(ch);
                let at = pen;
                pen += glyph_metrics.advance_width(id) * scale;
                (id, at)
            })
            .collect();

        let width = pen.ceil().max(1.0) as u32;
        let height = (ascent + descent).ceil().max(1.0) as u32;
        let baseline = ascent.round() as i32;
        let mut image = RgbaImage::new(width, height);

        let mut context = ScaleContext::new();
        let mut scaler = context.builder(font).size(size).hint(true).build();
        let mut render = Render::new(&[Source::Outline]);
        render.format(Format::Alpha);

        for (id, x) in glyphs {
            // Blank glyphs (spaces) have no bitmap.
            let Some(glyph) = render.render(&mut scaler, id) else {
                continue;
            };

            let placement = glyph.placement;
            let left = x.round() as i32 + placement.left;
            let top = baseline - placement.top;

            for gy in 0..placement.height {
                for gx in 0..placement.width {
                    let coverage = glyph.data[(gy * placement.width + gx) as usize];
                    if coverage == 0 {
                        continue;
                    }

                    let (px, py) = (left + gx as i32, top + gy as i32);
                    if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                        continue;
                    }

                    let pixel = image.get_pixel_mut(px as u32, py as u32);
                    let alpha = pixel[3].max(coverage);
                    *pixel = Rgba([color.r, color.g, color.b, alpha]);
                }
            }
        }

        image
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
