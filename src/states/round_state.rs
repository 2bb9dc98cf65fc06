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

use std::{cell::RefCell, rc::Rc};

use crate::{
    game::{ShipController, Viewport, World, WorldSprites},
    gfx::{Color, Renderer},
    states::{StackableState, StackableStateResult},
};

/// Window clear color. Only the margins either side of the playfield
/// stay visible once the frame is drawn.
const BACKDROP: Color = Color::from_argb_u32(0xff222222);

pub struct GameRoundState {
    renderer: Rc<RefCell<Renderer>>,
    controller: Rc<RefCell<ShipController>>,
    world: World,
    sprites: WorldSprites,
}

impl GameRoundState {
    pub fn new(
        controller: Rc<RefCell<ShipController>>,
        renderer: Rc<RefCell<Renderer>>,
        sprites: WorldSprites,
        stars_height: f32,
    ) -> Self {
        Self {
            renderer,
            controller,
            world: World::new(stars_height),
            sprites,
        }
    }
}

impl StackableState for GameRoundState {
    // Motion is tuned per frame and the main loop pins the frame rate
    // to 60 Hz, so the timestep argument stays constant and unused.
    fn state_iterate(&mut self, _timestep: f32) -> StackableStateResult {
        let renderer = self.renderer.borrow();
        let view = Viewport::new(renderer.width(), renderer.height());

        self.world.step(&mut self.controller.borrow_mut(), &view);

        renderer.clear(&BACKDROP);
        self.world.render(&renderer, &self.sprites, &view);
        renderer.present();

        StackableStateResult::Continue
    }
}
