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

use crate::gfx::{Renderer, TextureConfig};

use super::Texture;
use anyhow::{Result, anyhow};
use sdl3_sys::render::SDL_Texture;
use std::{collections::HashMap, fs, path::Path};

/**
 * Storage for shared textures that are kept loaded for the duration of the application run.
 */
pub struct TextureStore {
    textures: Vec<Texture>,
    name_map: HashMap<String, TextureId>,
}

/// A cheap handle to a texture in the store.
#[derive(Clone, Copy, Debug)]
pub struct TextureId {
    offset: u16,
}

impl TextureId {
    fn from(offset: usize) -> Self {
        debug_assert!(offset <= 0xffff);
        Self {
            offset: offset as u16,
        }
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: Vec::new(),
            name_map: HashMap::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.textures.len()
    }

    pub fn load_from_toml(renderer: &Renderer, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: HashMap<String, TextureConfig> = toml::from_str(&content)?;

        let mut store = Self::new();

        let root = path
            .parent()
            .expect("textures.toml should have a parent directory");

        // Entries that crop the same image file share one SDL texture
        let mut shared_textures: HashMap<String, *mut SDL_Texture> = HashMap::new();

        for (name, config) in config {
            store.add_texture(
                name,
                Texture::from_config(renderer, root, &config, &mut shared_textures)?,
            )?;
        }
        Ok(store)
    }

    pub fn add_texture(&mut self, name: String, texture: Texture) -> Result<TextureId> {
        if self.name_map.contains_key(&name) {
            return Err(anyhow!("Texture {} already added", name));
        }

        self.textures.push(texture);
        let id = TextureId::from(self.textures.len() - 1);
        self.name_map.insert(name, id);
        Ok(id)
    }

    pub fn find_texture(&self, name: &str) -> Result<TextureId> {
        self.name_map
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("Texture \"{}\" not found", name))
    }

    pub fn get_texture(&self, id: TextureId) -> &Texture {
        &self.textures[id.offset as usize]
    }

    /// Drop all loaded textures. Called before the renderer itself goes away.
    pub fn clear(&mut self) {
        self.textures.clear();
        self.name_map.clear();
    }
}
