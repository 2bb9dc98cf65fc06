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

use anyhow::{Result, anyhow};
use sdl3_sys::blendmode::SDL_BLENDMODE_BLEND;
use sdl3_sys::render::{
    SDL_DestroyRenderer, SDL_RenderFillRect, SDL_SetRenderDrawBlendMode,
    SDL_SetRenderDrawColorFloat,
};
use sdl3_sys::video::{
    SDL_DestroyWindow, SDL_SetWindowFullscreen, SDL_WINDOW_FULLSCREEN, SDL_WINDOW_RESIZABLE,
};
use std::path::Path;
use std::ptr::{null, null_mut};

use crate::math::RectF;

use super::texturestore::*;
use super::{Color, SdlError, SdlResult};
use sdl3_sys::{
    rect::SDL_Rect,
    render::{
        SDL_CreateWindowAndRenderer, SDL_GetRenderViewport, SDL_RenderClear, SDL_RenderPresent,
        SDL_Renderer, SDL_SetRenderVSync, SDL_SetRenderViewport,
    },
    video::SDL_Window,
};

pub struct Renderer {
    window: *mut SDL_Window,
    pub(super) renderer: *mut SDL_Renderer,
    texturestore: TextureStore,
    width: i32,
    height: i32,
    fullscreen: bool,
}

impl Drop for Renderer {
    fn drop(&mut self) {
        // Textures must go before the renderer that owns them
        self.texturestore.clear();
        unsafe {
            SDL_DestroyRenderer(self.renderer);
            SDL_DestroyWindow(self.window);
        }
    }
}

impl Renderer {
    pub fn create(fullscreen: bool) -> SdlResult<Self> {
        let mut window: *mut SDL_Window = null_mut();
        let mut renderer: *mut SDL_Renderer = null_mut();

        let mut flags = SDL_WINDOW_RESIZABLE;
        if fullscreen {
            flags |= SDL_WINDOW_FULLSCREEN;
        }

        if !unsafe {
            SDL_CreateWindowAndRenderer(
                c"Space Hell".as_ptr(),
                800,
                600,
                flags,
                &mut window,
                &mut renderer,
            )
        } {
            return Err(SdlError::get_error("Couldn't create renderer"));
        }

        if !unsafe { SDL_SetRenderVSync(renderer, 1) } {
            return Err(SdlError::get_error("Couldn't enable V-Sync"));
        }

        unsafe {
            SDL_SetRenderDrawBlendMode(renderer, SDL_BLENDMODE_BLEND);
        }

        Ok(Self {
            window,
            renderer,
            texturestore: TextureStore::new(),
            width: 800,
            height: 600,
            fullscreen,
        })
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        unsafe {
            SDL_SetWindowFullscreen(self.window, self.fullscreen);
        }
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn load_textures(&mut self, texture_config: &Path) -> Result<()> {
        if self.texture_store().count() > 0 {
            return Err(anyhow!("Textures already loaded"));
        }

        self.texturestore = TextureStore::load_from_toml(self, texture_config)?;
        Ok(())
    }

    pub fn texture_store(&self) -> &TextureStore {
        &self.texturestore
    }

    /// Re-read the window size after a resize event.
    pub fn reset_viewport(&mut self) -> SdlResult<()> {
        if !unsafe { SDL_SetRenderViewport(self.renderer, null()) } {
            return Err(SdlError::get_error("couldn't set viewport"));
        }

        let mut rect = SDL_Rect {
            x: 0,
            y: 0,
            w: 0,
            h: 0,
        };

        if !unsafe { SDL_GetRenderViewport(self.renderer, &mut rect) } {
            return Err(SdlError::get_error("couldn't set viewport"));
        }

        self.width = rect.w;
        self.height = rect.h;

        Ok(())
    }

    pub fn clear(&self, color: &Color) {
        unsafe {
            SDL_SetRenderDrawColorFloat(self.renderer, color.r, color.g, color.b, color.a);
            SDL_RenderClear(self.renderer);
        }
    }

    pub fn draw_filled_rectangle(&self, rect: RectF, color: &Color) {
        unsafe {
            SDL_SetRenderDrawColorFloat(self.renderer, color.r, color.g, color.b, color.a);
            SDL_RenderFillRect(self.renderer, &rect.into());
        }
    }

    pub fn present(&self) {
        unsafe {
            SDL_RenderPresent(self.renderer);
        }
    }
}
