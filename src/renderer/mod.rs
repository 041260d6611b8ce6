//! Frame handoff to the display layer
//!
//! The core builds one read-only `Frame` per tick and hands it to whatever
//! `Renderer` the driver installed. Nothing in this crate draws pixels; a
//! real display backend implements the trait outside.

use crate::sim::collision::Rect;
use crate::sim::state::{GameWorld, Invader, Projectile};
use crate::ui::Hud;

/// Read-only snapshot of everything the display layer needs for one frame
#[derive(Debug)]
pub struct Frame<'a> {
    pub ship: Rect,
    pub projectiles: &'a [Projectile],
    pub invaders: &'a [Invader],
    pub hud: Hud,
    /// The start control is drawn only while the game is inactive
    pub show_play_button: bool,
    pub cursor_visible: bool,
}

impl<'a> Frame<'a> {
    /// Capture the current world state.
    pub fn capture(world: &'a GameWorld) -> Self {
        Self {
            ship: world.ship.rect(),
            projectiles: &world.projectiles,
            invaders: &world.invaders,
            hud: Hud::from_stats(&world.stats),
            show_play_button: !world.game_active(),
            cursor_visible: world.cursor_visible,
        }
    }
}

/// Display-layer boundary: consumes one frame per tick, returns nothing
/// the core acts on.
pub trait Renderer {
    fn present(&mut self, frame: &Frame<'_>);
}

/// Renderer that draws nothing (headless runs and tests)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn present(&mut self, _frame: &Frame<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{GameWorld, start_game};

    #[test]
    fn test_frame_capture_reflects_world() {
        let mut world = GameWorld::new(Settings::default());

        let frame = Frame::capture(&world);
        assert!(frame.show_play_button);
        assert!(frame.cursor_visible);
        assert!(frame.invaders.is_empty());

        start_game(&mut world);
        world.fire_projectile();

        let frame = Frame::capture(&world);
        assert!(!frame.show_play_button);
        assert!(!frame.cursor_visible);
        assert_eq!(frame.invaders.len(), world.invaders.len());
        assert_eq!(frame.projectiles.len(), 1);
        assert_eq!(frame.hud.score, "0");
    }
}
