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

/// A color with floating point channels in the 0.0..=1.0 range,
/// as used by SDL's float drawing functions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_argb_u32(c: u32) -> Self {
        Self {
            r: ((c & 0x00ff0000) >> 16) as f32 / 255.0,
            g: ((c & 0x0000ff00) >> 8) as f32 / 255.0,
            b: (c & 0x000000ff) as f32 / 255.0,
            a: ((c & 0xff000000) >> 24) as f32 / 255.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_unpacking() {
        let c = Color::from_argb_u32(0xff222222);
        assert_eq!(c.r, 0x22 as f32 / 255.0);
        assert_eq!(c.g, c.r);
        assert_eq!(c.b, c.r);
        assert_eq!(c.a, 1.0);

        let translucent = Color::from_argb_u32(0x80ff0000);
        assert_eq!(translucent.r, 1.0);
        assert_eq!(translucent.g, 0.0);
        assert!((translucent.a - 0.5).abs() < 0.01);
    }
}
