//=========================================================================
// Overworld
//=========================================================================
//
// Scrolling 1280x960 field with two houses. Walking into a house enters
// its room; coming back out places the dot in front of that house.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::request_exit_on_quit;
use crate::core::globals::GlobalContext;
use crate::core::input::InputEvent;
use crate::core::render::{Canvas, SpriteId};
use crate::core::scene::{State, StateKind};
use crate::core::world::{check_collision, Rect, Size};

//=== Constants ===========================================================

const HOUSE_SIZE: Size = Size::new(40, 40);

//=== Overworld ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overworld {
    red_house: Rect,
    blue_house: Rect,
}

impl Overworld {
    /// Level extent.
    pub const LEVEL: Size = Size::new(1280, 960);

    /// Enters the overworld, placing the dot according to where it came from.
    pub fn new(previous: Option<StateKind>, context: &mut GlobalContext) -> Self {
        let (x, y) = Self::spawn_point(previous);
        debug!(target: "scene", "Overworld entered from {:?}, spawning at ({}, {})", previous, x, y);
        context.dot.place(x, y, Self::LEVEL);

        Self {
            red_house: Rect::at(0, 0, HOUSE_SIZE),
            blue_house: Rect::at(1240, 920, HOUSE_SIZE),
        }
    }

    /// Dot spawn point for an arrival from `previous`.
    ///
    /// In front of the house of the room just left, otherwise the centre.
    pub fn spawn_point(previous: Option<StateKind>) -> (i32, i32) {
        match previous {
            Some(StateKind::RedRoom) => (10, 40),
            Some(StateKind::BlueRoom) => (1250, 900),
            _ => (630, 470),
        }
    }
}

impl State for Overworld {
    fn handle_input(&mut self, events: &[InputEvent], context: &mut GlobalContext) {
        for event in events {
            context.dot.handle_event(event);
            request_exit_on_quit(event, context);
        }
    }

    fn logic(&mut self, context: &mut GlobalContext) {
        let dot = context.dot.bounds();

        // Red house is checked first; only one door can win per tick.
        if check_collision(dot, self.red_house) {
            context.transitions.request(StateKind::RedRoom);
        } else if check_collision(dot, self.blue_house) {
            context.transitions.request(StateKind::BlueRoom);
        }

        context.dot.advance();
    }

    fn render(&self, context: &GlobalContext, canvas: &mut dyn Canvas) {
        let camera = context.camera();

        canvas.draw_sprite(SpriteId::Overworld, 0, 0, Some(camera));

        let red = self.red_house.offset_by(camera.x, camera.y);
        canvas.draw_sprite(SpriteId::RedHouse, red.x, red.y, None);

        let blue = self.blue_house.offset_by(camera.x, camera.y);
        canvas.draw_sprite(SpriteId::BlueHouse, blue.x, blue.y, None);

        let dot = context.dot.bounds().offset_by(camera.x, camera.y);
        canvas.draw_sprite(SpriteId::Dot, dot.x, dot.y, None);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
