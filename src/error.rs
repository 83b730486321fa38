// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised around the renderer.  The escape-time and color
//! functions themselves cannot fail; everything here comes from
//! configuration, threads, or the outside world.

use std::io;

/// Everything that can go wrong outside the numeric core.
#[derive(Debug, Fail)]
pub enum Error {
    /// The requested raster or iteration cap cannot be rendered.
    #[fail(display = "invalid configuration: {}", _0)]
    InvalidConfig(String),

    /// The window could not be created or refreshed.
    #[fail(display = "window error: {}", _0)]
    Window(String),

    /// Writing the rendered image failed.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),

    /// A render worker panicked before finishing its rows.
    #[fail(display = "render thread panicked")]
    RenderThread,
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result alias used across the crate.
pub type Result<T> = ::std::result::Result<T, Error>;
