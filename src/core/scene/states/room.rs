//=========================================================================
// Rooms
//=========================================================================
//
// The inside of a house: a screen-sized level with a single exit door
// back to the overworld.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::request_exit_on_quit;
use crate::core::globals::GlobalContext;
use crate::core::input::InputEvent;
use crate::core::render::{Canvas, Color, SpriteId};
use crate::core::scene::{State, StateKind};
use crate::core::world::{check_collision, Rect, Size};

//=== Constants ===========================================================

const DOOR_SIZE: Size = Size::new(20, 40);

//=== Room ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    background: SpriteId,
    exit: Rect,
}

impl Room {
    /// Level extent shared by both rooms.
    pub const LEVEL: Size = Size::new(640, 480);

    /// Red room: exit at the bottom, dot starts just above it.
    pub fn red(context: &mut GlobalContext) -> Self {
        Self::enter(SpriteId::RedRoom, (310, 440), (310, 420), context)
    }

    /// Blue room: exit at the top, dot starts just below it.
    pub fn blue(context: &mut GlobalContext) -> Self {
        Self::enter(SpriteId::BlueRoom, (310, 0), (310, 40), context)
    }

    fn enter(
        background: SpriteId,
        (door_x, door_y): (i32, i32),
        (dot_x, dot_y): (i32, i32),
        context: &mut GlobalContext,
    ) -> Self {
        context.dot.place(dot_x, dot_y, Self::LEVEL);
        Self {
            background,
            exit: Rect::at(door_x, door_y, DOOR_SIZE),
        }
    }
}

impl State for Room {
    fn handle_input(&mut self, events: &[InputEvent], context: &mut GlobalContext) {
        for event in events {
            context.dot.handle_event(event);
            request_exit_on_quit(event, context);
        }
    }

    fn logic(&mut self, context: &mut GlobalContext) {
        if check_collision(context.dot.bounds(), self.exit) {
            context.transitions.request(StateKind::Overworld);
        }

        context.dot.advance();
    }

    fn render(&self, context: &GlobalContext, canvas: &mut dyn Canvas) {
        let camera = context.camera();

        canvas.draw_sprite(self.background, 0, 0, Some(camera));
        canvas.fill_rect(self.exit.offset_by(camera.x, camera.y), Color::BLACK);

        let dot = context.dot.bounds().offset_by(camera.x, camera.y);
        canvas.draw_sprite(SpriteId::Dot, dot.x, dot.y, None);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
