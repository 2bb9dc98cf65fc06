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
    collections::HashMap,
    path::{Path, PathBuf},
    ptr::null,
};

use crate::{fs::pathbuf_to_cstring, math::RectF};

use super::{Renderer, SdlError};
use anyhow::Result;
use sdl3_image_sys::image::IMG_LoadTexture;
use sdl3_sys::{
    blendmode::SDL_BLENDMODE_BLEND,
    render::{
        SDL_DestroyTexture, SDL_GetTextureSize, SDL_RenderTexture, SDL_SetTextureBlendMode,
        SDL_SetTextureScaleMode, SDL_Texture,
    },
    surface::{SDL_SCALEMODE_LINEAR, SDL_SCALEMODE_NEAREST},
};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct TextureConfig {
    #[serde(rename = "file")]
    filename: String,
    subrect: Option<(i32, i32, i32, i32)>, // use only a portion of the texture. (sprite sheet)
    scale: Option<TextureScaleMode>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub enum TextureScaleMode {
    Nearest,
    Linear,
}

pub struct Texture {
    tex: *mut SDL_Texture,
    width: f32,
    height: f32,
    subrect: RectF,
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { SDL_DestroyTexture(self.tex) };
    }
}

impl Clone for Texture {
    fn clone(&self) -> Self {
        unsafe { self.tex.as_mut() }.unwrap().refcount += 1;
        Self {
            tex: self.tex,
            width: self.width,
            height: self.height,
            subrect: self.subrect,
        }
    }
}

impl Texture {
    pub fn from_config(
        renderer: &Renderer,
        root: &Path,
        config: &TextureConfig,
        shared_textures: &mut HashMap<String, *mut SDL_Texture>,
    ) -> Result<Texture> {
        let mut tex = if shared_textures.contains_key(&config.filename) {
            let tex = Self::from_texture(shared_textures[&config.filename]);
            if let Ok(t) = &tex {
                unsafe { t.tex.as_mut().unwrap() }.refcount += 1;
            }
            tex
        } else {
            let tex = Self::from_file(
                renderer,
                [root, Path::new(&config.filename)].iter().collect(),
            );
            if let Ok(t) = &tex {
                shared_textures.insert(config.filename.clone(), t.tex);
            }
            tex
        }?;

        if let Some(sr) = config.subrect {
            tex.subrect = RectF::new(sr.0 as f32, sr.1 as f32, sr.2 as f32, sr.3 as f32);
            tex.width = tex.subrect.w();
            tex.height = tex.subrect.h();
        }

        if let Some(scale) = config.scale.as_ref() {
            tex.set_scalemode(*scale);
        }

        unsafe {
            SDL_SetTextureBlendMode(tex.tex, SDL_BLENDMODE_BLEND);
        }
        Ok(tex)
    }

    pub fn from_file(renderer: &Renderer, path: PathBuf) -> Result<Texture> {
        let path = pathbuf_to_cstring(path)?;
        let tex = unsafe { IMG_LoadTexture(renderer.renderer, path.as_ptr()) };

        Self::from_texture(tex)
    }

    fn from_texture(tex: *mut SDL_Texture) -> Result<Texture> {
        if tex.is_null() {
            return Err(SdlError::get_error("Couldn't convert image into texture").into());
        }

        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;

        if !unsafe { SDL_GetTextureSize(tex, &mut width, &mut height) } {
            return Err(SdlError::get_error("Couldn't get texture size").into());
        }

        Ok(Texture {
            tex,
            subrect: RectF::new(0.0, 0.0, width, height),
            width,
            height,
        })
    }

    pub fn set_scalemode(&mut self, mode: TextureScaleMode) {
        let mode = match mode {
            TextureScaleMode::Linear => SDL_SCALEMODE_LINEAR,
            TextureScaleMode::Nearest => SDL_SCALEMODE_NEAREST,
        };

        unsafe {
            SDL_SetTextureScaleMode(self.tex, mode);
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /**
     * Render this texture.
     *
     * The source rectangle (if any) is relative to this texture's subrect.
     * A draw failure is logged and the frame carries on without it.
     */
    pub fn render_simple(&self, renderer: &Renderer, source: Option<RectF>, dest: Option<RectF>) {
        let mut sr = self.subrect;
        if let Some(s) = source {
            sr = RectF::new(sr.x() + s.x(), sr.y() + s.y(), s.w(), s.h());
        }

        if !unsafe {
            SDL_RenderTexture(
                renderer.renderer,
                self.tex,
                &sr.0,
                match dest {
                    Some(ref r) => &r.0,
                    None => null(),
                },
            )
        } {
            SdlError::log("Texture render");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_manifest_parsing() {
        let manifest: HashMap<String, TextureConfig> = toml::from_str(
            r#"
            [stars]
            file = "stars.png"

            [bullet]
            file = "beams.png"
            subrect = [225, 0, 70, 90]
            scale = "Linear"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest["stars"].filename, "stars.png");
        assert!(manifest["stars"].subrect.is_none());
        assert_eq!(manifest["bullet"].subrect, Some((225, 0, 70, 90)));
        assert!(matches!(
            manifest["bullet"].scale,
            Some(TextureScaleMode::Linear)
        ));
    }
}
