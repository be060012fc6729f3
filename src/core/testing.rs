//=========================================================================
// Test Support
//=========================================================================
//
// Headless canvas that records draw calls instead of touching pixels,
// an input source that replays a fixed script, and a test font.
//
//=========================================================================

use std::collections::VecDeque;

use crate::core::input::{InputEvent, InputSource};
use crate::core::render::{Canvas, Color, SpriteId};
use crate::core::world::{Rect, Size};
use crate::error::EngineError;

/// A small TrueType face for text rendering tests.
pub(crate) const TEST_FONT: &[u8] = include_bytes!("../../fixtures/DejaVuSansMono.ttf");

/// One recorded canvas call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DrawCall {
    Sprite {
        sprite: SpriteId,
        x: i32,
        y: i32,
        clip: Option<Rect>,
    },
    Fill {
        rect: Rect,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
    pub presented: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the first draw of `sprite` in the current frame.
    pub fn sprite_position(&self, sprite: SpriteId) -> Option<(i32, i32)> {
        self.calls.iter().find_map(|call| match *call {
            DrawCall::Sprite { sprite: s, x, y, .. } if s == sprite => Some((x, y)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn sprite_size(&self, sprite: SpriteId) -> Size {
        match sprite {
            SpriteId::IntroMessage | SpriteId::TitleMessage => Size::new(400, 40),
            SpriteId::Dot => Size::new(20, 20),
            SpriteId::RedHouse | SpriteId::BlueHouse => Size::new(40, 40),
            SpriteId::Overworld => Size::new(1280, 960),
            _ => Size::new(640, 480),
        }
    }

    fn draw_sprite(&mut self, sprite: SpriteId, x: i32, y: i32, clip: Option<Rect>) {
        self.calls.push(DrawCall::Sprite { sprite, x, y, clip });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Fill { rect, color });
    }

    fn present(&mut self) -> Result<(), EngineError> {
        self.presented += 1;
        Ok(())
    }
}

/// Input source replaying one batch of events per poll, then quitting.
#[derive(Debug, Default)]
pub(crate) struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
        match self.batches.pop_front() {
            Some(batch) => out.extend(batch),
            None => out.push(InputEvent::Quit),
        }
    }
}
