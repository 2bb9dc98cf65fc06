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

use crate::game::{LOGICAL_HEIGHT, LOGICAL_WIDTH, PLAYFIELD_WIDTH};
use crate::math::{RectF, Vec2};

/**
 * Mapping from the logical coordinate space to window pixels.
 *
 * Logical coordinates put the origin at the center of the window with
 * the y axis pointing up. Window coordinates are the usual top-left
 * origin, y down. The two axes scale independently, so a non 4:3
 * window stretches the picture rather than letterboxing it.
 */
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: f32,
    height: f32,
    scale_w: f32,
    scale_h: f32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            scale_w: width as f32 / LOGICAL_WIDTH,
            scale_h: height as f32 / LOGICAL_HEIGHT,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn scale_w(&self) -> f32 {
        self.scale_w
    }

    pub fn scale_h(&self) -> f32 {
        self.scale_h
    }

    /// The playable band in window coordinates. Horizontally centered,
    /// always the full height of the window.
    pub fn playfield(&self) -> RectF {
        let w = PLAYFIELD_WIDTH * self.scale_w;
        RectF::new((self.width - w) / 2.0, 0.0, w, self.height)
    }

    /// Window rectangle for a sprite of the given logical size,
    /// centered on a logical position.
    pub fn sprite_rect(&self, pos: Vec2, width: f32, height: f32) -> RectF {
        let w = width * self.scale_w;
        let h = height * self.scale_h;

        RectF::new(
            self.width / 2.0 - w / 2.0 + pos.0 * self.scale_w,
            self.height / 2.0 - h / 2.0 - pos.1 * self.scale_h,
            w,
            h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_maps_one_to_one() {
        let view = Viewport::new(800, 600);

        let field = view.playfield();
        assert_eq!(field.x(), 200.0);
        assert_eq!(field.y(), 0.0);
        assert_eq!(field.w(), 400.0);
        assert_eq!(field.h(), 600.0);

        // Ship resting at its start position
        let ship = view.sprite_rect(Vec2(0.0, -150.0), 51.2, 51.2);
        assert_eq!(ship.x(), 374.4);
        assert_eq!(ship.y(), 424.4);
        assert_eq!(ship.w(), 51.2);
        assert_eq!(ship.h(), 51.2);
    }

    #[test]
    fn test_doubled_window_doubles_everything() {
        let view = Viewport::new(1600, 1200);
        assert_eq!(view.scale_w(), 2.0);
        assert_eq!(view.scale_h(), 2.0);

        let field = view.playfield();
        assert_eq!(field.x(), 400.0);
        assert_eq!(field.w(), 800.0);
        assert_eq!(field.h(), 1200.0);

        let rect = view.sprite_rect(Vec2(10.0, 20.0), 50.0, 50.0);
        assert_eq!(rect.x(), 770.0);
        assert_eq!(rect.y(), 510.0);
        assert_eq!(rect.w(), 100.0);
        assert_eq!(rect.h(), 100.0);
    }

    #[test]
    fn test_positive_y_is_up() {
        let view = Viewport::new(800, 600);

        let above = view.sprite_rect(Vec2(0.0, 100.0), 10.0, 10.0);
        let below = view.sprite_rect(Vec2(0.0, -100.0), 10.0, 10.0);

        assert!(above.y() < below.y());
    }
}
