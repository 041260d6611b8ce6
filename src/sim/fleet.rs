//! Fleet spawning and formation motion
//!
//! The whole fleet shares one march direction; when any member reaches a
//! horizontal screen edge the formation drops and reverses.

use glam::Vec2;

use super::state::{GameWorld, Invader};
use crate::consts::*;

/// Fill the world with a fresh grid of invaders sized to the screen.
///
/// Margins: one invader width on each side and one invader width between
/// columns; the rows leave room at the top for three invader heights plus
/// the ship at the bottom. A screen too small for a single cell yields an
/// empty fleet, not an error.
pub fn spawn_fleet(world: &mut GameWorld) {
    let settings = &world.settings;
    let available_x = settings.screen_width - 2.0 * INVADER_WIDTH;
    let columns = (available_x / (2.0 * INVADER_WIDTH)).floor() as i32;
    let available_y = settings.screen_height - 3.0 * INVADER_HEIGHT - SHIP_HEIGHT;
    let rows = (available_y / (2.0 * INVADER_HEIGHT)).floor() as i32;

    if columns <= 0 || rows <= 0 {
        log::warn!(
            "screen {}x{} too small for a fleet",
            settings.screen_width,
            settings.screen_height
        );
        return;
    }

    world.invaders.reserve((columns * rows) as usize);
    for row in 0..rows {
        for column in 0..columns {
            let pos = Vec2::new(
                INVADER_WIDTH + 2.0 * INVADER_WIDTH * column as f32,
                INVADER_HEIGHT + 2.0 * INVADER_HEIGHT * row as f32,
            );
            world.invaders.push(Invader::new(pos));
        }
    }
    log::info!("fleet spawned: {} columns x {} rows", columns, rows);
}

/// March the fleet one tick and handle edge contact.
///
/// The drop is applied at most once per tick no matter how many members
/// cross an edge, and the reversed direction takes effect on the next
/// tick's translation.
pub fn advance_fleet(world: &mut GameWorld, dt: f32) {
    let step = world.settings.invader_speed * world.settings.fleet_direction * dt;
    for invader in &mut world.invaders {
        invader.pos.x += step;
    }

    // Only the edge ahead of the march can trigger; checking the trailing
    // edge too would re-trigger on the tick right after a reversal.
    let width = world.settings.screen_width;
    let marching_right = world.settings.fleet_direction > 0.0;
    let crossed = world.invaders.iter().any(|invader| {
        let rect = invader.rect();
        if marching_right {
            rect.right() >= width
        } else {
            rect.left() <= 0.0
        }
    });
    if crossed {
        let drop = world.settings.fleet_drop;
        for invader in &mut world.invaders {
            invader.pos.y += drop;
        }
        world.settings.fleet_direction *= -1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::Settings;

    fn empty_world() -> GameWorld {
        GameWorld::new(Settings::default())
    }

    #[test]
    fn test_grid_fills_default_screen() {
        // 1200x800 with a 60x50 invader: 9 columns, 6 rows
        let mut world = empty_world();
        spawn_fleet(&mut world);
        assert_eq!(world.invaders.len(), 54);

        // First cell sits one invader width/height in from the corner
        let first = world.invaders[0].rect();
        assert_eq!(first.left(), INVADER_WIDTH);
        assert_eq!(first.top(), INVADER_HEIGHT);
    }

    #[test]
    fn test_tiny_screen_spawns_nothing() {
        let mut settings = Settings::default();
        settings.screen_width = 100.0;
        settings.screen_height = 100.0;
        let mut world = GameWorld::new(settings);
        spawn_fleet(&mut world);
        assert!(world.invaders.is_empty());
    }

    #[test]
    fn test_fleet_marches_with_direction() {
        let mut world = empty_world();
        spawn_fleet(&mut world);
        let before = world.invaders[0].pos.x;

        advance_fleet(&mut world, SIM_DT);
        let expected = world.settings.invader_speed * SIM_DT;
        assert!((world.invaders[0].pos.x - before - expected).abs() < 1e-4);
    }

    #[test]
    fn test_edge_contact_drops_once_and_reverses() {
        let mut world = empty_world();
        // Two invaders already at the right edge: still a single drop
        world.invaders.push(Invader::new(Vec2::new(
            world.settings.screen_width - INVADER_WIDTH,
            100.0,
        )));
        world.invaders.push(Invader::new(Vec2::new(
            world.settings.screen_width - INVADER_WIDTH,
            300.0,
        )));

        advance_fleet(&mut world, SIM_DT);
        assert_eq!(world.settings.fleet_direction, -1.0);
        assert_eq!(world.invaders[0].pos.y, 100.0 + world.settings.fleet_drop);
        assert_eq!(world.invaders[1].pos.y, 300.0 + world.settings.fleet_drop);
    }

    #[test]
    fn test_reversed_direction_applies_next_tick() {
        let mut world = empty_world();
        world
            .invaders
            .push(Invader::new(Vec2::new(world.settings.screen_width - INVADER_WIDTH, 100.0)));

        advance_fleet(&mut world, SIM_DT);
        let after_reversal = world.invaders[0].pos.x;

        advance_fleet(&mut world, SIM_DT);
        assert!(world.invaders[0].pos.x < after_reversal);
        assert_eq!(world.settings.fleet_direction, -1.0);
    }

    #[test]
    fn test_left_edge_also_reverses() {
        let mut world = empty_world();
        world.settings.fleet_direction = -1.0;
        world.invaders.push(Invader::new(Vec2::new(0.5, 100.0)));

        advance_fleet(&mut world, SIM_DT);
        assert_eq!(world.settings.fleet_direction, 1.0);
        assert_eq!(world.invaders[0].pos.y, 100.0 + world.settings.fleet_drop);
    }
}
