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
use std::{cell::RefCell, rc::Rc};

use crate::{
    fs::find_datafile_path,
    game::{ShipController, WorldSprites},
    gfx::Renderer,
    states::GameRoundState,
};

use super::{StackableState, StackableStateResult};

/// Loads the game assets on the first frame, then hands over to the
/// game round proper.
pub struct GameInitState {
    is_init: bool,
    controller: Rc<RefCell<ShipController>>,
    renderer: Rc<RefCell<Renderer>>,
}

impl GameInitState {
    pub fn new(controller: Rc<RefCell<ShipController>>, renderer: Rc<RefCell<Renderer>>) -> Self {
        Self {
            is_init: false,
            controller,
            renderer,
        }
    }
}

fn load_resources(renderer: Rc<RefCell<Renderer>>) -> Result<(WorldSprites, f32)> {
    renderer
        .borrow_mut()
        .load_textures(&find_datafile_path(&["textures/textures.toml"])?)?;

    let renderer = renderer.borrow();
    let sprites = WorldSprites::resolve(&renderer)?;

    // The scroll wrap-around needs the height of the star art
    let stars_height = renderer
        .texture_store()
        .get_texture(sprites.stars)
        .height();

    Ok((sprites, stars_height))
}

impl StackableState for GameInitState {
    fn state_iterate(&mut self, _timestep: f32) -> StackableStateResult {
        if self.is_init {
            return StackableStateResult::Continue;
        }
        self.is_init = true;

        match load_resources(self.renderer.clone()) {
            Ok((sprites, stars_height)) => StackableStateResult::Replace(Box::new(
                GameRoundState::new(
                    self.controller.clone(),
                    self.renderer.clone(),
                    sprites,
                    stars_height,
                ),
            )),
            Err(err) => StackableStateResult::Error(err),
        }
    }
}
