//! Fixed timestep simulation tick
//!
//! Advances the world through the per-tick pipeline in a fixed order: ship,
//! projectiles, fleet motion, collision resolution, state machine reactions,
//! score. Later steps depend on the post-update positions of earlier ones.

use glam::Vec2;

use super::collision;
use super::fleet;
use super::state::{GamePhase, GameWorld};
use crate::consts::*;
use crate::platform::{InputEvent, Key};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional intent, held across ticks while the key is down
    pub left: bool,
    pub right: bool,
    /// Fire one projectile (one-shot, cleared by the driver after the tick)
    pub fire: bool,
    /// Pointer click position (one-shot)
    pub click: Option<Vec2>,
    /// Let the built-in pilot play (demo mode)
    pub autopilot: bool,
}

impl TickInput {
    /// Fold one input event into the tick input. Returns true when the event
    /// asks to quit; the driver uses that to leave the loop.
    pub fn apply_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::KeyDown(Key::Left) => self.left = true,
            InputEvent::KeyDown(Key::Right) => self.right = true,
            InputEvent::KeyDown(Key::Fire) => self.fire = true,
            InputEvent::KeyDown(Key::Quit) => return true,
            InputEvent::KeyUp(Key::Left) => self.left = false,
            InputEvent::KeyUp(Key::Right) => self.right = false,
            InputEvent::KeyUp(_) => {}
            InputEvent::PointerClick(pos) => self.click = Some(pos),
            InputEvent::Quit => return true,
        }
        false
    }

    /// Clear the one-shot commands after a tick has consumed them.
    pub fn clear_one_shot(&mut self) {
        self.fire = false;
        self.click = None;
    }
}

/// Advance the game world by one fixed timestep.
pub fn tick(world: &mut GameWorld, input: &TickInput, dt: f32) {
    world.time_ticks += 1;

    // Demo pilot: synthesize inputs instead of reading the player's.
    let mut input = input.clone();
    if input.autopilot {
        drive_autopilot(world, &mut input);
    }
    let input = &input;

    match world.phase {
        GamePhase::Idle => {
            if let Some(pos) = input.click {
                if world.play_button.hit(pos) {
                    start_game(world);
                }
            }
        }

        GamePhase::Respawn { ticks_left } => {
            // Frozen breather; the driver keeps draining input meanwhile, so
            // quit stays responsive.
            let ticks_left = ticks_left.saturating_sub(1);
            world.phase = if ticks_left == 0 {
                GamePhase::Playing
            } else {
                GamePhase::Respawn { ticks_left }
            };
        }

        GamePhase::Playing => {
            // Ship
            world.ship.moving_left = input.left;
            world.ship.moving_right = input.right;
            world.ship.advance(&world.settings, dt);
            if input.fire {
                world.fire_projectile();
            }

            // Projectiles
            world.advance_projectiles(dt);

            // Fleet motion
            fleet::advance_fleet(world, dt);

            // Collision resolution and score
            let destroyed =
                collision::resolve_projectile_hits(&mut world.projectiles, &mut world.invaders);
            if destroyed > 0 {
                world
                    .stats
                    .award(destroyed as u64 * world.settings.invader_points as u64);
            }

            // State machine reactions
            if world.invaders.is_empty() {
                advance_level(world);
            } else if collision::ship_hit(&world.ship, &world.invaders)
                || collision::fleet_reached_bottom(&world.invaders, world.settings.screen_height)
            {
                ship_destroyed(world);
            }
        }
    }
}

/// Reset everything for a fresh run and field the first fleet.
pub fn start_game(world: &mut GameWorld) {
    world.settings.reset_dynamic();
    world.stats.reset(&world.settings);
    world.projectiles.clear();
    world.invaders.clear();
    fleet::spawn_fleet(world);
    world.ship.center(&world.settings);
    world.cursor_visible = false;
    world.phase = GamePhase::Playing;
    log::info!("new game: {} ships", world.stats.ships_left);
}

/// React to a ship hit or a formation breach.
fn ship_destroyed(world: &mut GameWorld) {
    debug_assert!(world.stats.ships_left > 0, "ship hit with no ships left");
    world.stats.ships_left = world.stats.ships_left.saturating_sub(1);

    if world.stats.ships_left == 0 {
        game_over(world);
        return;
    }

    world.projectiles.clear();
    world.invaders.clear();
    fleet::spawn_fleet(world);
    world.ship.center(&world.settings);
    world.phase = GamePhase::Respawn {
        ticks_left: RESPAWN_PAUSE_TICKS,
    };
    log::info!("ship lost, {} left", world.stats.ships_left);
}

/// End the run: back to the start screen, cursor and play button visible.
/// The fleet stays on screen behind the button until the next game starts.
fn game_over(world: &mut GameWorld) {
    world.cursor_visible = true;
    world.phase = GamePhase::Idle;
    match world.highscores.add_score(world.stats.score, world.stats.level) {
        Some(rank) => log::info!(
            "game over: score {} (leaderboard rank {})",
            world.stats.score,
            rank
        ),
        None => log::info!("game over: score {}", world.stats.score),
    }
}

/// The fleet is gone: speed up, count the level, field a new fleet.
fn advance_level(world: &mut GameWorld) {
    world.projectiles.clear();
    world.settings.scale_speed();
    world.stats.level += 1;
    fleet::spawn_fleet(world);
    log::info!(
        "level {}: invader speed {:.1}",
        world.stats.level,
        world.settings.invader_speed
    );
}

/// Minimal built-in pilot for the headless demo: start the game when idle,
/// then chase the lowest invader's column and shoot once lined up.
fn drive_autopilot(world: &GameWorld, input: &mut TickInput) {
    match world.phase {
        GamePhase::Idle => {
            input.click = Some(world.play_button.rect.center());
        }
        GamePhase::Playing => {
            let target = world.invaders.iter().max_by(|a, b| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            if let Some(invader) = target {
                let dx = invader.rect().center().x - world.ship.rect().center().x;
                input.left = dx < -4.0;
                input.right = dx > 4.0;
                input.fire = dx.abs() < INVADER_WIDTH / 2.0;
            }
        }
        GamePhase::Respawn { .. } => {}
    }
}
