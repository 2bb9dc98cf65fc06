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

use crate::game::{LOGICAL_HEIGHT, PLAYFIELD_WIDTH};
use crate::math::Vec2;

/// Ship movement speed in logical units per frame.
pub const PLAYER_SPEED: f32 = 5.0;

/// On-screen ship size in logical units (the 256x256 sprite at 0.2 scale).
pub const PLAYER_WIDTH: f32 = 256.0 * 0.2;
pub const PLAYER_HEIGHT: f32 = 256.0 * 0.2;

/**
 * The player's ship.
 *
 * The hitbox is narrower than the sprite and is only used to keep the
 * ship inside the play-field.
 */
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    hitbox: Vec2,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2(0.0, -LOGICAL_HEIGHT / 4.0),
            vel: Vec2::ZERO,
            hitbox: Vec2(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT),
        }
    }

    /// Advance one frame: apply the velocity, then clamp the position
    /// so the hitbox stays inside the play-field.
    pub fn integrate(&mut self) {
        self.pos = self.pos + self.vel;

        let xmax = (PLAYFIELD_WIDTH - self.hitbox.0) / 2.0;
        let ymax = (LOGICAL_HEIGHT - self.hitbox.1) / 2.0;
        self.pos.0 = self.pos.0.clamp(-xmax, xmax);
        self.pos.1 = self.pos.1.clamp(-ymax, ymax);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_frame_up() {
        let mut p = Player::new();
        assert_eq!(p.pos, Vec2(0.0, -150.0));

        p.vel = Vec2(0.0, PLAYER_SPEED);
        p.integrate();
        assert_eq!(p.pos, Vec2(0.0, -145.0));
    }

    #[test]
    fn test_clamped_to_playfield() {
        let mut p = Player::new();

        p.vel = Vec2(PLAYER_SPEED, 0.0);
        for _ in 0..100 {
            p.integrate();
        }
        assert_eq!(p.pos.0, (PLAYFIELD_WIDTH - PLAYER_WIDTH / 2.0) / 2.0);
        assert_eq!(p.pos.0, 187.2);

        p.vel = Vec2(0.0, -PLAYER_SPEED);
        for _ in 0..200 {
            p.integrate();
        }
        assert_eq!(p.pos.1, -(LOGICAL_HEIGHT - PLAYER_HEIGHT) / 2.0);
        assert_eq!(p.pos.1, -274.4);
    }

    #[test]
    fn test_clamp_holds_at_rest() {
        let mut p = Player::new();
        p.pos = Vec2(187.2, 274.4);
        p.vel = Vec2::ZERO;

        p.integrate();
        assert_eq!(p.pos, Vec2(187.2, 274.4));
    }
}
