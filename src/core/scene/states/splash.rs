//=========================================================================
// Splash Screens
//=========================================================================
//
// Intro and Title: a background, a centred message, and Enter to move on.
// No logic of their own.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::request_exit_on_quit;
use crate::core::globals::GlobalContext;
use crate::core::input::{InputEvent, KeyCode};
use crate::core::render::{Canvas, SpriteId};
use crate::core::scene::{State, StateKind};

//=== Splash ==============================================================

/// Static screen that advances to `next` when Enter is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splash {
    background: SpriteId,
    message: SpriteId,
    next: StateKind,
}

impl Splash {
    /// "Presents..." screen shown at startup. Enter goes to the title.
    pub fn intro() -> Self {
        Self {
            background: SpriteId::IntroBackground,
            message: SpriteId::IntroMessage,
            next: StateKind::Title,
        }
    }

    /// Title screen. Enter goes to the overworld.
    pub fn title() -> Self {
        Self {
            background: SpriteId::TitleBackground,
            message: SpriteId::TitleMessage,
            next: StateKind::Overworld,
        }
    }
}

impl State for Splash {
    fn handle_input(&mut self, events: &[InputEvent], context: &mut GlobalContext) {
        for event in events {
            if request_exit_on_quit(event, context) {
                continue;
            }

            if event.is_press(KeyCode::Enter) {
                context.transitions.request(self.next);
            }
        }
    }

    fn logic(&mut self, _context: &mut GlobalContext) {}

    fn render(&self, context: &GlobalContext, canvas: &mut dyn Canvas) {
        canvas.draw_sprite(self.background, 0, 0, None);

        let screen = context.screen();
        let message = canvas.sprite_size(self.message);
        canvas.draw_sprite(
            self.message,
            (screen.width - message.width) / 2,
            (screen.height - message.height) / 2,
            None,
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
