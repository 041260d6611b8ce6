//! HUD display values and the start control
//!
//! Pure data for the display layer: formatted read-only strings and the
//! clickable play-button area. No drawing happens here.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::collision::Rect;
use crate::sim::state::GameStats;

/// Play button size
pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

/// The clickable start control, centered on the screen
#[derive(Debug, Clone)]
pub struct PlayButton {
    pub rect: Rect,
    pub label: &'static str,
}

impl PlayButton {
    pub fn centered(settings: &Settings) -> Self {
        let min = Vec2::new(
            (settings.screen_width - BUTTON_WIDTH) / 2.0,
            (settings.screen_height - BUTTON_HEIGHT) / 2.0,
        );
        Self {
            rect: Rect::new(min, Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT)),
            label: "Play",
        }
    }

    /// Hit-test a pointer position against the control's area. Consulted
    /// only while the game is inactive.
    pub fn hit(&self, pos: Vec2) -> bool {
        self.rect.contains(pos)
    }
}

/// Read-only display values for the renderer's HUD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: String,
    pub high_score: String,
    pub level: String,
    /// Remaining ships, drawn as icons by the display layer
    pub ships_left: u32,
}

impl Hud {
    pub fn from_stats(stats: &GameStats) -> Self {
        Self {
            score: stats.score.to_string(),
            high_score: stats.high_score.to_string(),
            level: stats.level.to_string(),
            ships_left: stats.ships_left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_hit_test() {
        let button = PlayButton::centered(&Settings::default());
        assert!(button.hit(button.rect.center()));
        assert!(!button.hit(Vec2::new(0.0, 0.0)));
        // Just outside the right edge
        let outside = Vec2::new(button.rect.right() + 1.0, button.rect.center().y);
        assert!(!button.hit(outside));
    }

    #[test]
    fn test_hud_formats_stats() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);
        stats.award(1250);
        stats.level = 3;

        let hud = Hud::from_stats(&stats);
        assert_eq!(hud.score, "1250");
        assert_eq!(hud.high_score, "1250");
        assert_eq!(hud.level, "3");
        assert_eq!(hud.ships_left, settings.ship_limit);
    }
}
