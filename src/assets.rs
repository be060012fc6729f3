//=========================================================================
// Assets
//=========================================================================
//
// Sprite store. Every image is loaded once, before the state machine
// starts, so a missing or broken file is a startup error rather than a
// per-frame one.
//
// Loading:
//   <dir>/<SpriteId::file_name()>  ─image::open─>  RGBA8
//                                   └─ colour key (0,255,255) → alpha 0
//   <dir>/lazy.ttf                 ─Font─>  message sprites (36px, black)
//
// Without an asset directory, flat-colour placeholders of the right
// sizes are generated instead. A font can still be applied on top of
// them with `render_text`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::path::Path;

//=== External Crates =====================================================

use image::{Rgba, RgbaImage};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::render::{Color, SpriteId};
use crate::core::world::Size;
use crate::error::EngineError;
use crate::font::Font;

//=== Constants ===========================================================

/// Font file looked up in the asset directory.
pub const FONT_FILE: &str = "lazy.ttf";

/// Pixel size of the message text.
pub const TEXT_SIZE: f32 = 36.0;

pub const TEXT_COLOR: Color = Color::BLACK;

//=== Assets ==============================================================

/// Decoded sprites, keyed by [`SpriteId`].
#[derive(Debug, Clone, Default)]
pub struct Assets {
    sprites: HashMap<SpriteId, RgbaImage>,
}

impl Assets {
    //--- Construction -----------------------------------------------------

    /// Loads every image from `dir` and renders the messages with
    /// `dir/lazy.ttf`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Asset`] for the first image that is missing
    /// or cannot be decoded, [`EngineError::Font`] if the font is unusable.
    pub fn load(dir: &Path) -> Result<Self, EngineError> {
        Self::load_with_font(dir, &dir.join(FONT_FILE))
    }

    /// Like [`Assets::load`], with the font taken from `font`.
    pub fn load_with_font(dir: &Path, font: &Path) -> Result<Self, EngineError> {
        info!(target: "assets", "Loading sprites from {}", dir.display());

        let mut sprites = HashMap::with_capacity(SpriteId::ALL.len());
        for sprite in SpriteId::ALL {
            let Some(file_name) = sprite.file_name() else {
                continue;
            };

            let path = dir.join(file_name);
            let mut image = image::open(&path)
                .map_err(|source| EngineError::Asset {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();

            apply_color_key(&mut image);
            debug!(
                target: "assets",
                "Loaded {:?} from {} ({}x{})",
                sprite,
                path.display(),
                image.width(),
                image.height()
            );
            sprites.insert(sprite, image);
        }

        let mut assets = Self { sprites };
        assets.render_text(&Font::load(font)?);
        Ok(assets)
    }

    /// Builds flat-colour stand-ins sized for a `screen`-sized viewport.
    pub fn placeholder(screen: Size) -> Self {
        info!(target: "assets", "Using placeholder sprites");

        let sprites = SpriteId::ALL
            .into_iter()
            .map(|sprite| {
                let (size, color) = placeholder_look(sprite, screen);
                let image = RgbaImage::from_pixel(
                    size.width.max(0) as u32,
                    size.height.max(0) as u32,
                    Rgba(color.to_rgba()),
                );
                (sprite, image)
            })
            .collect();

        Self { sprites }
    }

    /// Renders every message sprite with `font`, replacing what was there.
    pub fn render_text(&mut self, font: &Font) {
        for sprite in SpriteId::ALL {
            if let Some(text) = sprite.text() {
                let image = font.render_text(text, TEXT_SIZE, TEXT_COLOR);
                debug!(
                    target: "assets",
                    "Rendered {:?} \"{}\" ({}x{})",
                    sprite,
                    text,
                    image.width(),
                    image.height()
                );
                self.sprites.insert(sprite, image);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn get(&self, sprite: SpriteId) -> Option<&RgbaImage> {
        self.sprites.get(&sprite)
    }

    /// Pixel extent of `sprite`; zero if it is not loaded.
    pub fn size(&self, sprite: SpriteId) -> Size {
        self.get(sprite)
            .map(|image| Size::new(image.width() as i32, image.height() as i32))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

//=== Helpers =============================================================

/// Makes every colour-key pixel fully transparent.
fn apply_color_key(image: &mut RgbaImage) {
    let [r, g, b, _] = Color::COLOR_KEY.to_rgba();
    for pixel in image.pixels_mut() {
        if pixel[0] == r && pixel[1] == g && pixel[2] == b {
            pixel[3] = 0;
        }
    }
}

fn placeholder_look(sprite: SpriteId, screen: Size) -> (Size, Color) {
    match sprite {
        SpriteId::Dot => (Size::new(20, 20), Color::WHITE),
        SpriteId::IntroBackground => (screen, Color::rgb(0x20, 0x20, 0x40)),
        SpriteId::IntroMessage => (Size::new(400, 40), Color::rgb(0xE0, 0xE0, 0xE0)),
        SpriteId::TitleBackground => (screen, Color::rgb(0x40, 0x20, 0x20)),
        SpriteId::TitleMessage => (Size::new(360, 40), Color::rgb(0xE0, 0xE0, 0xE0)),
        SpriteId::Overworld => (Size::new(1280, 960), Color::rgb(0x20, 0x80, 0x20)),
        SpriteId::RedHouse => (Size::new(40, 40), Color::rgb(0xC0, 0x20, 0x20)),
        SpriteId::BlueHouse => (Size::new(40, 40), Color::rgb(0x20, 0x20, 0xC0)),
        SpriteId::RedRoom => (Size::new(640, 480), Color::rgb(0x80, 0x30, 0x30)),
        SpriteId::BlueRoom => (Size::new(640, 480), Color::rgb(0x30, 0x30, 0x80)),
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::TEST_FONT;
    use std::fs;
    use std::path::PathBuf;

    const SCREEN: Size = Size::new(640, 480);

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("overworld-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    //--- Placeholders -----------------------------------------------------

    #[test]
    fn placeholder_has_every_sprite() {
        let assets = Assets::placeholder(SCREEN);
        assert_eq!(assets.len(), SpriteId::ALL.len());
        for sprite in SpriteId::ALL {
            assert!(assets.get(sprite).is_some(), "{:?}", sprite);
        }
    }

    #[test]
    fn placeholder_sizes_match_world() {
        let assets = Assets::placeholder(SCREEN);
        assert_eq!(assets.size(SpriteId::Dot), Size::new(20, 20));
        assert_eq!(assets.size(SpriteId::RedHouse), Size::new(40, 40));
        assert_eq!(assets.size(SpriteId::Overworld), Size::new(1280, 960));
        assert_eq!(assets.size(SpriteId::IntroBackground), SCREEN);
    }

    #[test]
    fn unknown_sprite_has_zero_size() {
        let assets = Assets::default();
        assert!(assets.is_empty());
        assert_eq!(assets.size(SpriteId::Dot), Size::new(0, 0));
    }

    //--- Colour Key -------------------------------------------------------

    #[test]
    fn color_key_pixels_become_transparent() {
        let mut image = RgbaImage::from_pixel(2, 1, Rgba([0, 255, 255, 255]));
        image.put_pixel(1, 0, Rgba([0, 255, 254, 255]));

        apply_color_key(&mut image);

        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(1, 0)[3], 255);
    }

    //--- Loading ----------------------------------------------------------

    #[test]
    fn missing_directory_reports_first_file() {
        let dir = scratch_dir("missing");
        let err = Assets::load(&dir.join("nope")).unwrap_err();

        match err {
            EngineError::Asset { path, .. } => {
                assert!(path.ends_with("dot.bmp"), "{}", path.display());
            }
            other => panic!("Expected asset error, got {:?}", other),
        }
    }

    /// Writes placeholder images (and optionally the test font) to `dir`.
    fn populate(dir: &Path, with_font: bool) -> Assets {
        let source = Assets::placeholder(SCREEN);
        for sprite in SpriteId::ALL {
            if let Some(file_name) = sprite.file_name() {
                source.get(sprite).unwrap().save(dir.join(file_name)).unwrap();
            }
        }
        if with_font {
            fs::write(dir.join(FONT_FILE), TEST_FONT).unwrap();
        }
        source
    }

    fn inked(image: &RgbaImage) -> usize {
        image.pixels().filter(|p| p[3] > 0).count()
    }

    #[test]
    fn loads_saved_sprites() {
        let dir = scratch_dir("load");
        let source = populate(&dir, true);

        let loaded = Assets::load(&dir).unwrap();

        assert_eq!(loaded.len(), SpriteId::ALL.len());
        for sprite in SpriteId::ALL.into_iter().filter(|s| s.file_name().is_some()) {
            assert_eq!(loaded.size(sprite), source.size(sprite), "{:?}", sprite);
        }
        let _ = fs::remove_dir_all(&dir);
    }

    //--- Text -------------------------------------------------------------

    #[test]
    fn intro_message_is_rendered_from_font() {
        let dir = scratch_dir("font");
        populate(&dir, true);

        let loaded = Assets::load(&dir).unwrap();
        let message = loaded.get(SpriteId::IntroMessage).unwrap();

        assert!(message.width() > 0 && message.height() > 0);
        assert!(inked(message) > 0, "intro message has no visible pixels");
        assert!(message.pixels().any(|p| p[3] == 0), "text background must be transparent");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_font_is_an_error() {
        let dir = scratch_dir("nofont");
        populate(&dir, false);

        match Assets::load(&dir).unwrap_err() {
            EngineError::Font { path, .. } => assert!(path.ends_with(FONT_FILE)),
            other => panic!("Expected font error, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn render_text_replaces_placeholder_bars() {
        let mut assets = Assets::placeholder(SCREEN);
        let bar = assets.get(SpriteId::TitleMessage).unwrap().clone();
        let font = Font::from_bytes(TEST_FONT.to_vec()).unwrap();

        assets.render_text(&font);

        let title = assets.get(SpriteId::TitleMessage).unwrap();
        assert_ne!(title, &bar);
        assert!(inked(title) > 0);
        assert_eq!(assets.size(SpriteId::Dot), Size::new(20, 20));
        assert_eq!(assets.len(), SpriteId::ALL.len());
    }
}
