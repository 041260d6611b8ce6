//! Game tuning and runtime configuration
//!
//! Split into a static subset that never changes once the process is up and
//! a dynamic subset that is reset to baseline at every new game and scaled
//! up as levels are cleared.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// All tunable parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Static ===
    /// Screen width in pixels, supplied by the window system at startup
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
    /// Ships the player starts a game with
    pub ship_limit: u32,
    /// Maximum projectiles in flight at once
    pub projectile_cap: usize,
    /// Vertical distance the fleet drops on edge contact
    pub fleet_drop: f32,
    /// Multiplier applied to the dynamic speeds at every level-up
    pub speedup_scale: f32,
    /// Points awarded per invader destroyed
    pub invader_points: u32,

    // === Baselines the dynamic subset is reset to ===
    pub base_ship_speed: f32,
    pub base_projectile_speed: f32,
    pub base_invader_speed: f32,

    // === Dynamic (never read from a tuning file) ===
    /// Ship speed in px/s
    #[serde(skip)]
    pub ship_speed: f32,
    /// Projectile speed in px/s
    #[serde(skip)]
    pub projectile_speed: f32,
    /// Invader march speed in px/s
    #[serde(skip)]
    pub invader_speed: f32,
    /// Fleet march direction: +1.0 = right, -1.0 = left
    #[serde(skip)]
    pub fleet_direction: f32,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ship_limit: 3,
            projectile_cap: 3,
            fleet_drop: 10.0,
            speedup_scale: 1.1,
            invader_points: 50,
            base_ship_speed: 90.0,
            base_projectile_speed: 180.0,
            base_invader_speed: 60.0,
            ship_speed: 0.0,
            projectile_speed: 0.0,
            invader_speed: 0.0,
            fleet_direction: 0.0,
        };
        settings.reset_dynamic();
        settings
    }
}

impl Settings {
    /// Restore the dynamic subset to baseline. Called at every new game.
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = self.base_ship_speed;
        self.projectile_speed = self.base_projectile_speed;
        self.invader_speed = self.base_invader_speed;
        self.fleet_direction = 1.0;
    }

    /// Scale the dynamic speeds up for the next level.
    pub fn scale_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.projectile_speed *= self.speedup_scale;
        self.invader_speed *= self.speedup_scale;
    }

    /// Load tuning from a JSON file, falling back to defaults.
    ///
    /// A missing file is the normal case; a malformed one is logged and
    /// ignored. The dynamic subset is always re-derived from the baselines.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(mut settings) => {
                    settings.reset_dynamic();
                    log::info!("Loaded tuning from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }
}
