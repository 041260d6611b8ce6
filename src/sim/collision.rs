//! Axis-aligned collision geometry and resolution
//!
//! Screen space: origin at the top-left, +y points down. Overlap is strict,
//! touching edges do not collide.

use glam::Vec2;

use super::state::{Invader, Projectile, Ship};

/// An axis-aligned rectangle, top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether a point falls inside the rectangle
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// Resolve projectile hits against the fleet.
///
/// Exhaustive pairwise test: every overlapping pair removes both sides, and
/// a single projectile that overlaps several invaders removes all of them.
/// Returns the number of invaders destroyed.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    invaders: &mut Vec<Invader>,
) -> usize {
    let mut dead = vec![false; invaders.len()];

    projectiles.retain(|projectile| {
        let rect = projectile.rect();
        let mut hit = false;
        for (i, invader) in invaders.iter().enumerate() {
            if !dead[i] && rect.intersects(&invader.rect()) {
                dead[i] = true;
                hit = true;
            }
        }
        !hit
    });

    let destroyed = dead.iter().filter(|d| **d).count();
    let mut index = 0;
    invaders.retain(|_| {
        let keep = !dead[index];
        index += 1;
        keep
    });
    destroyed
}

/// Any overlap between the ship and a live invader. One event per tick no
/// matter how many invaders overlap.
pub fn ship_hit(ship: &Ship, invaders: &[Invader]) -> bool {
    let rect = ship.rect();
    invaders.iter().any(|invader| rect.intersects(&invader.rect()))
}

/// Whether any invader's bottom edge has reached the screen bottom.
/// A formation breach is as fatal as physical contact.
pub fn fleet_reached_bottom(invaders: &[Invader], screen_height: f32) -> bool {
    invaders
        .iter()
        .any(|invader| invader.rect().bottom() >= screen_height)
}
