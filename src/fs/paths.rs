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
use sdl3_sys::filesystem::{SDL_GetBasePath, SDL_GetPrefPath};
use sdl3_sys::stdinc::SDL_free;
use std::ffi::{CStr, CString, c_void};
use std::path::PathBuf;

fn get_basepath() -> PathBuf {
    let bp = unsafe { SDL_GetBasePath() };
    if bp.is_null() {
        // shouldn't happen
        panic!("Couldn't find application base path!");
    }

    let bp = unsafe { CStr::from_ptr(bp) };
    let bp = bp.to_str().expect("basepath not utf-8 encoded!");

    bp.to_owned().into()
}

/**
 * Find the named datafile or directory under the data directory
 * next to the executable.
 *
 * Returns the full path to the file or directory if it exists
 */
pub fn find_datafile_path(path: &[&str]) -> Result<PathBuf> {
    let mut p = get_basepath();
    p.push("data");
    for pc in path {
        p.push(pc);
    }

    if p.exists() {
        return Ok(p);
    }

    Err(anyhow!("File not found: {:?}", path))
}

/**
 * Get the full path to a per-user file (such as the configuration file.)
 */
pub fn get_savefile_path(filename: &str) -> PathBuf {
    let bp =
        unsafe { SDL_GetPrefPath(c"io.github.callaa.spacehell".as_ptr(), c"spacehell".as_ptr()) };
    if bp.is_null() {
        // shouldn't happen
        panic!("Couldn't find preferences base path!");
    }

    let prefpath = unsafe { CStr::from_ptr(bp) };
    let prefpath = prefpath
        .to_str()
        .expect("preferences path not utf-8 encoded!");
    let prefpath = PathBuf::from(prefpath);

    unsafe {
        SDL_free(bp as *mut c_void);
    }

    prefpath.join(filename)
}

/**
 * SDL interop helper
 */
pub fn pathbuf_to_cstring(path: PathBuf) -> Result<CString> {
    let osstr = path.into_os_string();
    if let Ok(string) = osstr.into_string() {
        Ok(CString::new(string)?)
    } else {
        Err(anyhow!("Couldn't convert path to string"))
    }
}
