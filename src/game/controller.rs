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

use sdl3_sys::{
    events::SDL_KeyboardEvent,
    scancode::{
        SDL_SCANCODE_A, SDL_SCANCODE_D, SDL_SCANCODE_S, SDL_SCANCODE_SPACE, SDL_SCANCODE_W,
    },
};
use serde::Deserialize;

use crate::{configfile::GAME_CONFIG, game::player::PLAYER_SPEED, math::Vec2};

/// Scancode bindings for the ship controls.
#[derive(Deserialize, Clone)]
pub struct Keymap {
    pub up: u32,
    pub down: u32,
    pub left: u32,
    pub right: u32,
    pub fire: u32,
}

/**
 * The state of the player's controls, updated from SDL keyboard events
 * and sampled by the world once per frame.
 */
pub struct ShipController {
    velocity: Vec2,
    queued_shots: u32,
    keymap: Keymap,
}

impl ShipController {
    pub const DEFAULT_KEYMAP: Keymap = Keymap {
        up: SDL_SCANCODE_W.0 as u32,
        down: SDL_SCANCODE_S.0 as u32,
        left: SDL_SCANCODE_A.0 as u32,
        right: SDL_SCANCODE_D.0 as u32,
        fire: SDL_SCANCODE_SPACE.0 as u32,
    };

    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            queued_shots: 0,
            keymap: Self::DEFAULT_KEYMAP,
        }
    }

    pub fn reload_keymap(&mut self) {
        let config = GAME_CONFIG.read().unwrap();
        self.keymap = config
            .keymap
            .as_ref()
            .unwrap_or(&Self::DEFAULT_KEYMAP)
            .clone();
    }

    pub fn handle_sdl_key_event(&mut self, key: &SDL_KeyboardEvent) {
        self.handle_key(key.scancode.0 as u32, key.down);
    }

    /// Apply a single key transition.
    ///
    /// Key repeats are not filtered out, so holding the fire key down
    /// keeps queueing shots at the keyboard repeat rate.
    pub fn handle_key(&mut self, scancode: u32, down: bool) {
        if down {
            if scancode == self.keymap.up {
                self.velocity.1 = PLAYER_SPEED;
            } else if scancode == self.keymap.down {
                self.velocity.1 = -PLAYER_SPEED;
            } else if scancode == self.keymap.left {
                self.velocity.0 = -PLAYER_SPEED;
            } else if scancode == self.keymap.right {
                self.velocity.0 = PLAYER_SPEED;
            } else if scancode == self.keymap.fire {
                self.queued_shots += 1;
            }
        } else {
            // A release stops the ship only if it is still moving in the
            // released key's direction. Pressing D while A is held, then
            // releasing A, keeps the ship moving right.
            if scancode == self.keymap.up && self.velocity.1 > 0.0 {
                self.velocity.1 = 0.0;
            } else if scancode == self.keymap.down && self.velocity.1 < 0.0 {
                self.velocity.1 = 0.0;
            } else if scancode == self.keymap.left && self.velocity.0 < 0.0 {
                self.velocity.0 = 0.0;
            } else if scancode == self.keymap.right && self.velocity.0 > 0.0 {
                self.velocity.0 = 0.0;
            }
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Take the shots queued since the last call.
    pub fn take_queued_shots(&mut self) -> u32 {
        std::mem::take(&mut self.queued_shots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    const KEYS: Keymap = ShipController::DEFAULT_KEYMAP;

    #[test]
    fn test_last_pressed_direction_wins() {
        let mut c = ShipController::new();

        c.handle_key(KEYS.left, true);
        assert_eq!(c.velocity(), Vec2(-PLAYER_SPEED, 0.0));

        c.handle_key(KEYS.right, true);
        assert_eq!(c.velocity(), Vec2(PLAYER_SPEED, 0.0));

        c.handle_key(KEYS.up, true);
        c.handle_key(KEYS.down, true);
        assert_eq!(c.velocity(), Vec2(PLAYER_SPEED, -PLAYER_SPEED));
    }

    #[test]
    fn test_any_press_order_settles_on_last_per_axis() {
        for presses in [KEYS.up, KEYS.down, KEYS.left, KEYS.right]
            .into_iter()
            .permutations(4)
        {
            let mut c = ShipController::new();
            for key in &presses {
                c.handle_key(*key, true);
            }

            let last_x = *presses
                .iter()
                .rfind(|k| **k == KEYS.left || **k == KEYS.right)
                .unwrap();
            let last_y = *presses
                .iter()
                .rfind(|k| **k == KEYS.up || **k == KEYS.down)
                .unwrap();

            let expected = Vec2(
                if last_x == KEYS.left {
                    -PLAYER_SPEED
                } else {
                    PLAYER_SPEED
                },
                if last_y == KEYS.down {
                    -PLAYER_SPEED
                } else {
                    PLAYER_SPEED
                },
            );
            assert_eq!(c.velocity(), expected);
        }
    }

    #[test]
    fn test_release_only_stops_matching_direction() {
        let mut c = ShipController::new();

        // A held, D pressed over it: releasing A must not stop the
        // rightward motion, releasing D must.
        c.handle_key(KEYS.left, true);
        c.handle_key(KEYS.right, true);
        c.handle_key(KEYS.left, false);
        assert_eq!(c.velocity(), Vec2(PLAYER_SPEED, 0.0));

        c.handle_key(KEYS.right, false);
        assert_eq!(c.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_fire_queues_every_press() {
        let mut c = ShipController::new();

        c.handle_key(KEYS.fire, true);
        c.handle_key(KEYS.fire, false);
        c.handle_key(KEYS.fire, true);
        c.handle_key(KEYS.fire, true);

        assert_eq!(c.take_queued_shots(), 3);
        assert_eq!(c.take_queued_shots(), 0);
    }
}
