//! Game world state and entity types
//!
//! The mutable aggregate every subsystem operates on. All of it is advanced
//! by `sim::tick` on a single thread at a fixed timestep; there are no
//! concurrent readers or writers.

use glam::Vec2;

use super::collision::Rect;
use crate::consts::*;
use crate::highscores::HighScores;
use crate::settings::Settings;
use crate::ui::PlayButton;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting at the start screen, or after the last ship is lost
    Idle,
    /// Active gameplay
    Playing,
    /// Short freeze after a non-fatal ship hit, before the new fleet acts
    Respawn { ticks_left: u32 },
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal intent, held while the key is down
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship centered at the bottom of the screen
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            pos: Vec2::ZERO,
            moving_left: false,
            moving_right: false,
        };
        ship.center(settings);
        ship
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(SHIP_WIDTH, SHIP_HEIGHT))
    }

    /// Put the ship back at the bottom center of the screen.
    pub fn center(&mut self, settings: &Settings) {
        self.pos = Vec2::new(
            (settings.screen_width - SHIP_WIDTH) / 2.0,
            settings.screen_height - SHIP_HEIGHT,
        );
    }

    /// One tick of horizontal movement, clamped to the screen edges.
    pub fn advance(&mut self, settings: &Settings, dt: f32) {
        let mut dx = 0.0;
        if self.moving_right {
            dx += settings.ship_speed * dt;
        }
        if self.moving_left {
            dx -= settings.ship_speed * dt;
        }
        self.pos.x = (self.pos.x + dx).clamp(0.0, settings.screen_width - SHIP_WIDTH);
    }
}

/// A projectile in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Top-left corner
    pub pos: Vec2,
}

impl Projectile {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT))
    }
}

/// A single fleet member
#[derive(Debug, Clone)]
pub struct Invader {
    /// Top-left corner
    pub pos: Vec2,
}

impl Invader {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(INVADER_WIDTH, INVADER_HEIGHT))
    }
}

/// Score, level and lives for the current run
#[derive(Debug, Clone)]
pub struct GameStats {
    pub score: u64,
    /// Best score seen this process run; never decreases
    pub high_score: u64,
    /// Starts at 1, increments on every fleet clear
    pub level: u32,
    /// Remaining ships; 0 ends the run
    pub ships_left: u32,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        Self {
            score: 0,
            high_score: 0,
            level: 1,
            ships_left: settings.ship_limit,
        }
    }

    /// Reset for a new game. The high score is deliberately kept.
    pub fn reset(&mut self, settings: &Settings) {
        self.score = 0;
        self.level = 1;
        self.ships_left = settings.ship_limit;
    }

    /// Award points for destroyed invaders, raising the high score when
    /// passed.
    pub fn award(&mut self, points: u64) {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

/// Complete game world
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub settings: Settings,
    pub stats: GameStats,
    pub phase: GamePhase,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub invaders: Vec<Invader>,
    pub play_button: PlayButton,
    /// Pointer cursor visibility, applied by the display layer
    pub cursor_visible: bool,
    /// Best finished runs of this process
    pub highscores: HighScores,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameWorld {
    /// A world sitting at the start screen, no fleet yet.
    pub fn new(settings: Settings) -> Self {
        let ship = Ship::new(&settings);
        let play_button = PlayButton::centered(&settings);
        Self {
            stats: GameStats::new(&settings),
            phase: GamePhase::Idle,
            ship,
            projectiles: Vec::new(),
            invaders: Vec::new(),
            play_button,
            cursor_visible: true,
            highscores: HighScores::new(),
            time_ticks: 0,
            settings,
        }
    }

    /// Whether gameplay is running (anything but the idle start screen)
    pub fn game_active(&self) -> bool {
        self.phase != GamePhase::Idle
    }

    /// Spawn a projectile at the ship's top center. Silent no-op at the cap.
    pub fn fire_projectile(&mut self) {
        if self.projectiles.len() >= self.settings.projectile_cap {
            return;
        }
        let ship = self.ship.rect();
        let pos = Vec2::new(
            ship.center().x - PROJECTILE_WIDTH / 2.0,
            ship.top() - PROJECTILE_HEIGHT,
        );
        self.projectiles.push(Projectile { pos });
    }

    /// Move projectiles up and cull those fully above the screen.
    pub fn advance_projectiles(&mut self, dt: f32) {
        let speed = self.settings.projectile_speed;
        for projectile in &mut self.projectiles {
            projectile.pos.y -= speed * dt;
        }
        self.projectiles
            .retain(|projectile| projectile.rect().bottom() > 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_ship_clamps_to_screen() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);

        ship.moving_left = true;
        for _ in 0..100_000 {
            ship.advance(&settings, SIM_DT);
        }
        assert_eq!(ship.pos.x, 0.0);

        ship.moving_left = false;
        ship.moving_right = true;
        for _ in 0..100_000 {
            ship.advance(&settings, SIM_DT);
        }
        assert_eq!(ship.pos.x, settings.screen_width - crate::consts::SHIP_WIDTH);
    }

    #[test]
    fn test_fire_respects_cap() {
        let mut world = GameWorld::new(Settings::default());
        for _ in 0..20 {
            world.fire_projectile();
        }
        assert_eq!(world.projectiles.len(), world.settings.projectile_cap);
    }

    #[test]
    fn test_projectile_spawns_at_ship_top_center() {
        let mut world = GameWorld::new(Settings::default());
        world.fire_projectile();
        let projectile = world.projectiles[0].rect();
        let ship = world.ship.rect();
        assert!((projectile.center().x - ship.center().x).abs() < 1e-3);
        assert_eq!(projectile.bottom(), ship.top());
    }

    #[test]
    fn test_projectiles_culled_above_screen() {
        let mut world = GameWorld::new(Settings::default());
        world.fire_projectile();
        world.projectiles[0].pos.y = -crate::consts::PROJECTILE_HEIGHT;
        world.advance_projectiles(SIM_DT);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_award_tracks_high_score() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);
        stats.award(100);
        assert_eq!(stats.score, 100);
        assert_eq!(stats.high_score, 100);

        stats.reset(&settings);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.high_score, 100);

        stats.award(50);
        assert_eq!(stats.high_score, 100);
        stats.award(60);
        assert_eq!(stats.high_score, 110);
    }
}
