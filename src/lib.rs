//! Astro Invaders - a fixed-screen fleet-invasion arcade shooter core
//!
//! Core modules:
//! - `sim`: deterministic simulation (entities, fleet motion, collisions, game state machine)
//! - `renderer`: per-tick frame handoff to the display layer
//! - `platform`: input-event abstraction
//! - `settings`: game tuning with a static/dynamic split
//! - `ui`: HUD display values and the start control
//! - `highscores`: in-process leaderboard

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate in Hz
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Default screen dimensions; the window system supplies the real ones at startup
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Ship sprite size
    pub const SHIP_WIDTH: f32 = 60.0;
    pub const SHIP_HEIGHT: f32 = 48.0;

    /// Projectile size
    pub const PROJECTILE_WIDTH: f32 = 3.0;
    pub const PROJECTILE_HEIGHT: f32 = 15.0;

    /// Invader sprite size
    pub const INVADER_WIDTH: f32 = 60.0;
    pub const INVADER_HEIGHT: f32 = 50.0;

    /// Ticks the world stays frozen after a non-fatal ship hit (0.5 s at 60 Hz)
    pub const RESPAWN_PAUSE_TICKS: u32 = TICK_RATE / 2;
}
