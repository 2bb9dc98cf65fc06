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

use std::{fs::read_to_string, sync::RwLock};

use log::{error, warn};
use serde::Deserialize;

use crate::{fs::get_savefile_path, game::Keymap};

#[derive(Deserialize, Default, Clone)]
pub struct VideoConfig {
    #[serde(default)]
    pub fullscreen: bool,
}

#[derive(Deserialize, Default, Clone)]
pub struct UserConfig {
    #[serde(default)]
    pub video: VideoConfig,
    pub keymap: Option<Keymap>,
}

pub static GAME_CONFIG: RwLock<UserConfig> = RwLock::new(UserConfig {
    video: VideoConfig { fullscreen: false },
    keymap: None,
});

/**
 * Read settings.toml from the user's preferences directory.
 *
 * A missing or unreadable file is not an error: the game simply runs
 * with the default settings.
 */
pub fn load_user_config() {
    let filename = get_savefile_path("settings.toml");
    let content = match read_to_string(&filename) {
        Ok(c) => c,
        Err(e) => {
            warn!("Couldn't read user config file ({:?}): {}", filename, e);
            "".to_owned()
        }
    };

    let config = match toml::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            error!("Couldn't parse user config file ({:?}): {}", filename, e);
            Default::default()
        }
    };

    let mut w = GAME_CONFIG.write().unwrap();
    *w = config;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_settings_file() {
        let config: UserConfig = toml::from_str(
            r#"
            [video]
            fullscreen = true

            [keymap]
            up = 82
            down = 81
            left = 80
            right = 79
            fire = 224
            "#,
        )
        .unwrap();

        assert!(config.video.fullscreen);

        // Arrow keys and left control instead of WASD and space
        let keymap = config.keymap.unwrap();
        assert_eq!(keymap.up, 82);
        assert_eq!(keymap.down, 81);
        assert_eq!(keymap.left, 80);
        assert_eq!(keymap.right, 79);
        assert_eq!(keymap.fire, 224);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: UserConfig = toml::from_str("").unwrap();

        assert!(!config.video.fullscreen);
        assert!(config.keymap.is_none());
    }
}
