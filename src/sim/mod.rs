//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Single mutating thread, fixed per-tick update order
//! - No rendering or platform dependencies

pub mod collision;
pub mod fleet;
pub mod state;
pub mod tick;

pub use collision::{Rect, fleet_reached_bottom, resolve_projectile_hits, ship_hit};
pub use fleet::{advance_fleet, spawn_fleet};
pub use state::{GamePhase, GameStats, GameWorld, Invader, Projectile, Ship};
pub use tick::{TickInput, start_game, tick};
