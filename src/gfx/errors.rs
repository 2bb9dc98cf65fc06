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

use std::{error::Error, ffi::CStr, fmt, result};

use log::error;
use sdl3_sys::error::SDL_GetError;

/// An error message paired with whatever SDL_GetError had to say about it.
#[derive(Debug)]
pub struct SdlError {
    message: String,
}

fn current_sdl_error() -> &'static str {
    let error = unsafe { CStr::from_ptr(SDL_GetError()) };
    error.to_str().unwrap_or("(unknown SDL error)")
}

impl SdlError {
    /// Log the current SDL error without constructing an error value.
    ///
    /// Used on the best-effort draw paths where a failed call shouldn't
    /// interrupt the frame.
    pub fn log(context: &str) {
        error!("{}: {}", context, current_sdl_error());
    }

    /// Capture the current SDL error.
    pub fn get_error(context: &str) -> SdlError {
        SdlError {
            message: format!("{}: {}", context, current_sdl_error()),
        }
    }
}

impl fmt::Display for SdlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SdlError {}

pub type SdlResult<T> = result::Result<T, SdlError>;
