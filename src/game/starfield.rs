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

use crate::game::{PLAYFIELD_WIDTH, Viewport};
use crate::gfx::{Renderer, Texture};
use crate::math::RectF;

/**
 * The scrolling star backdrop behind the playfield.
 *
 * Scrolling works by sliding a window-sized source rectangle down the
 * star art one pixel per frame, wrapping at the leftover height. When
 * the scaled art is not taller than the window there is no leftover,
 * the divisor clamps to one and the backdrop holds still.
 */
pub struct Starfield {
    top: i32,
    art_height: f32,
}

impl Starfield {
    pub fn new(art_height: f32) -> Self {
        Self { top: 0, art_height }
    }

    pub fn advance(&mut self, view: &Viewport) {
        let leftover = ((view.height() - self.art_height * view.scale_h()) as i32).max(1);
        self.top = (self.top + 1) % leftover;
    }

    pub fn render(&self, renderer: &Renderer, texture: &Texture, view: &Viewport) {
        let source = RectF::new(
            0.0,
            self.top as f32,
            PLAYFIELD_WIDTH * view.scale_w(),
            view.height(),
        );

        texture.render_simple(renderer, Some(source), Some(view.playfield()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tall_art_holds_still() {
        // The shipped art is 1024 px tall, taller than any window once
        // scaled, so the offset never leaves zero.
        let mut stars = Starfield::new(1024.0);
        let view = Viewport::new(800, 600);

        for _ in 0..100 {
            stars.advance(&view);
            assert_eq!(stars.top, 0);
        }

        let big = Viewport::new(1920, 1080);
        for _ in 0..100 {
            stars.advance(&big);
            assert_eq!(stars.top, 0);
        }
    }

    #[test]
    fn test_short_art_wraps_at_leftover_height() {
        let mut stars = Starfield::new(100.0);
        let view = Viewport::new(800, 600);

        // 600 px window minus 100 px of art leaves 500 rows to slide over
        for frame in 1..=499 {
            stars.advance(&view);
            assert_eq!(stars.top, frame);
        }

        stars.advance(&view);
        assert_eq!(stars.top, 0);
    }
}
