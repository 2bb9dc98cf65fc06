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

mod controller;
mod player;
mod projectile;
mod starfield;
mod viewport;
mod world;

pub use controller::{Keymap, ShipController};
pub use player::Player;
pub use projectile::{Projectile, ProjectileArray, ProjectileKind};
pub use starfield::Starfield;
pub use viewport::Viewport;
pub use world::{World, WorldSprites};

/// The game simulation runs in a fixed logical coordinate space with the
/// origin at the center of the screen and the y axis pointing up.
/// The viewport scales it to whatever size the window happens to be.
pub const LOGICAL_WIDTH: f32 = 800.0;
pub const LOGICAL_HEIGHT: f32 = 600.0;

/// Width of the play-field strip centered inside the logical screen.
pub const PLAYFIELD_WIDTH: f32 = 400.0;
