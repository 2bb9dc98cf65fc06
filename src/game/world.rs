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

use anyhow::Result;
use log::warn;

use crate::game::player::{PLAYER_HEIGHT, PLAYER_WIDTH, Player};
use crate::game::projectile::{BULLET_SIZE, Projectile, ProjectileArray};
use crate::game::{ShipController, Starfield, Viewport};
use crate::gfx::{Color, Renderer, TextureId};

/// Texture handles the render pass needs every frame, looked up once at
/// startup so the simulation itself never touches the renderer.
pub struct WorldSprites {
    pub stars: TextureId,
    pub ship: TextureId,
    pub bullet: TextureId,
}

impl WorldSprites {
    pub fn resolve(renderer: &Renderer) -> Result<Self> {
        let store = renderer.texture_store();

        Ok(Self {
            stars: store.find_texture("stars")?,
            ship: store.find_texture("player-ship")?,
            bullet: store.find_texture("bullet")?,
        })
    }
}

/**
 * The simulation state of a round: the player's ship, its bullets and
 * the scrolling backdrop.
 */
pub struct World {
    player: Player,
    bullets: ProjectileArray,
    starfield: Starfield,
}

impl World {
    pub fn new(stars_height: f32) -> Self {
        Self {
            player: Player::new(),
            bullets: ProjectileArray::new(),
            starfield: Starfield::new(stars_height),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bullets(&self) -> &ProjectileArray {
        &self.bullets
    }

    /// Advance the simulation one frame.
    pub fn step(&mut self, controller: &mut ShipController, view: &Viewport) {
        // Queued shots leave the ship where it stands at the start of
        // the frame, before this frame's movement is applied.
        for _ in 0..controller.take_queued_shots() {
            if !self.bullets.try_push(Projectile::fired_from(&self.player)) {
                warn!(
                    "Out of bullet slots, dropping shot fired at {}",
                    self.player.pos
                );
            }
        }

        self.player.vel = controller.velocity();

        self.starfield.advance(view);
        self.player.integrate();
        self.bullets.step();
    }

    pub fn render(&self, renderer: &Renderer, sprites: &WorldSprites, view: &Viewport) {
        renderer.draw_filled_rectangle(view.playfield(), &Color::BLACK);

        let store = renderer.texture_store();

        self.starfield
            .render(renderer, store.get_texture(sprites.stars), view);

        store.get_texture(sprites.ship).render_simple(
            renderer,
            None,
            Some(view.sprite_rect(self.player.pos, PLAYER_WIDTH, PLAYER_HEIGHT)),
        );

        let bullet = store.get_texture(sprites.bullet);
        for b in self.bullets.iter() {
            bullet.render_simple(
                renderer,
                None,
                Some(view.sprite_rect(b.pos, BULLET_SIZE, BULLET_SIZE)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    const KEYS: crate::game::Keymap = ShipController::DEFAULT_KEYMAP;

    #[test]
    fn test_shot_spawns_before_ship_moves() {
        let mut world = World::new(1024.0);
        let mut controller = ShipController::new();
        let view = Viewport::new(800, 600);

        controller.handle_key(KEYS.fire, true);
        controller.handle_key(KEYS.up, true);
        world.step(&mut controller, &view);

        assert_eq!(world.player().pos, Vec2(0.0, -145.0));
        assert_eq!(world.bullets().len(), 1);
        assert_eq!(
            world.bullets().iter().next().unwrap().pos,
            // Nose of the ship at the start position, plus one frame of
            // bullet movement.
            Vec2(0.0, -124.4 + 5.0)
        );
    }

    #[test]
    fn test_extra_shots_past_the_cap_are_dropped() {
        let mut world = World::new(1024.0);
        let mut controller = ShipController::new();
        let view = Viewport::new(800, 600);

        for _ in 0..600 {
            controller.handle_key(KEYS.fire, true);
        }
        world.step(&mut controller, &view);

        assert_eq!(world.bullets().len(), 512);
    }
}
