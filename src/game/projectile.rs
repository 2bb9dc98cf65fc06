// This file is part of Space Hell
// Copyright (C) 2026 Calle Laakkonen
//
// Space Hell is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Space Hell is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Space Hell.  If not, see <https://www.gnu.org/licenses/>.

use crate::game::player::{PLAYER_HEIGHT, Player};
use crate::game::{LOGICAL_HEIGHT, PLAYFIELD_WIDTH};
use crate::math::Vec2;

/// Bullet climb speed in logical units per frame.
pub const BULLET_SPEED: f32 = 5.0;

/// On-screen bullet size in logical units.
pub const BULLET_SIZE: f32 = 50.0;

/// Hard limit on live projectiles. Shots fired past this are dropped.
pub const MAX_PROJECTILES: usize = 512;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectileKind {
    Bullet,
}

#[derive(Clone, Copy, Debug)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    /// A bullet leaving the nose of the ship, climbing straight up.
    pub fn fired_from(player: &Player) -> Self {
        Self {
            kind: ProjectileKind::Bullet,
            pos: Vec2(player.pos.0, player.pos.1 + PLAYER_HEIGHT / 2.0),
            vel: Vec2(0.0, BULLET_SPEED),
        }
    }

    // Note: both comparisons read the x coordinate, so a projectile is
    // never removed for altitude alone. The slot cap is the effective
    // bound on the live count.
    fn out_of_bounds(&self) -> bool {
        self.pos.0.abs() > PLAYFIELD_WIDTH / 2.0 || self.pos.0.abs() > LOGICAL_HEIGHT / 2.0
    }
}

/**
 * All live projectiles, stored in an unordered array with a fixed
 * capacity. Removal swaps the last element into the vacated slot, so
 * iteration order changes whenever something is removed.
 */
pub struct ProjectileArray(Vec<Projectile>);

impl ProjectileArray {
    pub fn new() -> Self {
        Self(Vec::with_capacity(MAX_PROJECTILES))
    }

    /// Add a projectile. Returns false when all slots are in use.
    pub fn try_push(&mut self, projectile: Projectile) -> bool {
        if self.0.len() >= MAX_PROJECTILES {
            return false;
        }
        self.0.push(projectile);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Projectile> {
        self.0.iter()
    }

    /// Advance every projectile one frame and remove the ones that left
    /// the play-field. The element swapped into a vacated slot is
    /// stepped in the same pass, so nothing moves twice or gets skipped.
    pub fn step(&mut self) {
        let mut i = 0;
        while i < self.0.len() {
            let p = &mut self.0[i];
            p.pos = p.pos + p.vel;

            if p.out_of_bounds() {
                self.0.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parked(x: f32, y: f32) -> Projectile {
        Projectile {
            kind: ProjectileKind::Bullet,
            pos: Vec2(x, y),
            vel: Vec2::ZERO,
        }
    }

    #[test]
    fn test_bullet_spawns_at_ship_nose() {
        let p = Projectile::fired_from(&Player::new());

        assert_eq!(p.pos, Vec2(0.0, -150.0 + PLAYER_HEIGHT / 2.0));
        assert_eq!(p.pos, Vec2(0.0, -124.4));
        assert_eq!(p.vel, Vec2(0.0, BULLET_SPEED));
    }

    #[test]
    fn test_slot_cap() {
        let mut bullets = ProjectileArray::new();
        for _ in 0..MAX_PROJECTILES {
            assert!(bullets.try_push(parked(0.0, 0.0)));
        }

        assert!(!bullets.try_push(parked(0.0, 0.0)));
        assert_eq!(bullets.len(), MAX_PROJECTILES);
    }

    #[test]
    fn test_out_of_field_removed_in_one_pass() {
        let mut bullets = ProjectileArray::new();
        bullets.try_push(parked(250.0, 0.0));
        bullets.try_push(parked(-300.0, 0.0));
        bullets.try_push(parked(10.0, 0.0));
        bullets.try_push(parked(201.0, 0.0));

        // The removals swap later elements forward; a single pass must
        // still consider every one of them.
        bullets.step();

        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets.iter().next().unwrap().pos, Vec2(10.0, 0.0));
    }

    #[test]
    fn test_each_survivor_moves_exactly_once() {
        let mut bullets = ProjectileArray::new();
        bullets.try_push(parked(500.0, 0.0));
        bullets.try_push(Projectile {
            kind: ProjectileKind::Bullet,
            pos: Vec2(0.0, 0.0),
            vel: Vec2(1.0, 2.0),
        });

        bullets.step();

        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets.iter().next().unwrap().pos, Vec2(1.0, 2.0));
    }

    #[test]
    fn test_altitude_never_removes_a_bullet() {
        let mut bullets = ProjectileArray::new();
        bullets.try_push(Projectile {
            kind: ProjectileKind::Bullet,
            pos: Vec2(0.0, 10_000.0),
            vel: Vec2(0.0, BULLET_SPEED),
        });

        for _ in 0..100 {
            bullets.step();
        }

        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets.iter().next().unwrap().pos.1, 10_500.0);
    }
}
