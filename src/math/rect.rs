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

use sdl3_sys::rect::SDL_FRect;

/// A rectangle in window pixel coordinates, layout compatible with SDL.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct RectF(pub SDL_FRect);

impl RectF {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self(SDL_FRect { x, y, w, h })
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn w(&self) -> f32 {
        self.0.w
    }

    pub fn h(&self) -> f32 {
        self.0.h
    }
}

impl From<RectF> for SDL_FRect {
    fn from(rect: RectF) -> SDL_FRect {
        rect.0
    }
}
