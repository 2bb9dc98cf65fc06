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

use log::error;
use sdl3_main::AppResult;

pub enum StackableStateResult {
    Continue,
    Replace(Box<dyn StackableState>),
    Error(anyhow::Error),
}

pub trait StackableState {
    fn state_iterate(&mut self, timestep: f32) -> StackableStateResult;
}

pub struct StateStack {
    states: Vec<Box<dyn StackableState>>,
}

impl StateStack {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn push(&mut self, state: Box<dyn StackableState>) {
        self.states.push(state);
    }

    pub fn state_iterate(&mut self, timestep: f32) -> AppResult {
        let result = if let Some(state) = self.states.last_mut() {
            state.state_iterate(timestep)
        } else {
            return AppResult::Success;
        };

        match result {
            StackableStateResult::Continue => {}
            StackableStateResult::Replace(s) => {
                self.states.pop();
                self.states.push(s)
            }
            StackableStateResult::Error(err) => {
                error!("{:#}", err);
                return AppResult::Failure;
            }
        }

        if self.states.is_empty() {
            AppResult::Success
        } else {
            AppResult::Continue
        }
    }
}
