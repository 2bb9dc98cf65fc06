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

use std::{
    fmt,
    ops::{Add, Mul},
};

/// A position or velocity in logical game units.
#[derive(Debug, Copy, Clone)]
pub struct Vec2(pub f32, pub f32);

impl Vec2 {
    pub const ZERO: Vec2 = Vec2(0.0, 0.0);

    pub fn dist_squared(self, other: Self) -> f32 {
        (self.0 - other.0).powf(2.0) + (self.1 - other.1).powf(2.0)
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Vec2(0.0, 0.0)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vec2(self.0 + other.0, self.1 + other.1)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Vec2(self.0 * rhs, self.1 * rhs)
    }
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        self.dist_squared(*other) < 0.001
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_vec2_ops() {
        let v1 = Vec2(1.0, 2.0);
        let v2 = Vec2(3.0, 4.0);

        assert_eq!(v1 + v2, Vec2(4.0, 6.0));

        assert_eq!(v1 * 3.0, Vec2(3.0, 6.0));
    }

    #[test]
    fn test_approximate_equality() {
        assert_eq!(Vec2(0.0001, 0.0), Vec2::ZERO);
        assert_ne!(Vec2(1.0, 0.0), Vec2::ZERO);
    }
}
