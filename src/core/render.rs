//=========================================================================
// Rendering Seam
//=========================================================================
//
// What states are allowed to do with the screen: blit a sprite at an
// offset (optionally clipped to a source rectangle) and fill a rectangle.
//
// The concrete canvas lives in the platform layer. States only name
// sprites by `SpriteId`; pixels are owned by the asset store.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::world::{Rect, Size};
use crate::error::EngineError;

//=== SpriteId ============================================================

/// Every image the demo draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Dot,
    IntroBackground,
    IntroMessage,
    TitleBackground,
    TitleMessage,
    Overworld,
    RedHouse,
    BlueHouse,
    RedRoom,
    BlueRoom,
}

impl SpriteId {
    pub const ALL: [SpriteId; 10] = [
        SpriteId::Dot,
        SpriteId::IntroBackground,
        SpriteId::IntroMessage,
        SpriteId::TitleBackground,
        SpriteId::TitleMessage,
        SpriteId::Overworld,
        SpriteId::RedHouse,
        SpriteId::BlueHouse,
        SpriteId::RedRoom,
        SpriteId::BlueRoom,
    ];

    /// File name of an image sprite inside the asset directory.
    ///
    /// `None` for text sprites, which are rendered from the font.
    pub fn file_name(self) -> Option<&'static str> {
        let name = match self {
            SpriteId::Dot => "dot.bmp",
            SpriteId::IntroBackground => "introbg.png",
            SpriteId::TitleBackground => "titlebg.png",
            SpriteId::Overworld => "greenoverworld.png",
            SpriteId::RedHouse => "red.bmp",
            SpriteId::BlueHouse => "blue.bmp",
            SpriteId::RedRoom => "redroom.png",
            SpriteId::BlueRoom => "blueroom.png",
            SpriteId::IntroMessage | SpriteId::TitleMessage => return None,
        };
        Some(name)
    }

    /// Text of a message sprite.
    pub fn text(self) -> Option<&'static str> {
        match self {
            SpriteId::IntroMessage => Some("Lazy Foo' Productions Presents..."),
            SpriteId::TitleMessage => Some("A State Machine Demo."),
            _ => None,
        }
    }
}

//=== Color ===============================================================

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Sprite pixels of this colour are not drawn.
    pub const COLOR_KEY: Color = Color::rgb(0, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

//=== Canvas ==============================================================

/// Drawing target handed to [`State::render`](crate::core::scene::State::render).
pub trait Canvas {
    /// Pixel extent of `sprite`.
    fn sprite_size(&self, sprite: SpriteId) -> Size;

    /// Draws `sprite` with its top-left corner at screen (`x`, `y`).
    ///
    /// With `clip`, only that source rectangle of the sprite is drawn.
    fn draw_sprite(&mut self, sprite: SpriteId, x: i32, y: i32, clip: Option<Rect>);

    /// Fills a screen rectangle with a solid colour.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Shows the finished frame.
    fn present(&mut self) -> Result<(), EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_sprite_has_a_distinct_file() {
        let names: HashSet<_> = SpriteId::ALL.iter().filter_map(|s| s.file_name()).collect();
        assert_eq!(names.len(), SpriteId::ALL.len() - 2);
    }

    #[test]
    fn every_sprite_is_either_a_file_or_text() {
        for sprite in SpriteId::ALL {
            assert!(sprite.file_name().is_some() ^ sprite.text().is_some(), "{:?}", sprite);
        }
    }

    #[test]
    fn color_key_is_cyan() {
        assert_eq!(Color::COLOR_KEY.to_rgba(), [0, 255, 255, 255]);
    }
}
