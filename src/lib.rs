#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot viewer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring `z` and adding `c`, starting from
//! zero, never runs off to infinity.  The escape-time picture paints
//! every point outside the set by how quickly it leaves the circle of
//! radius two, and paints the set itself black.
//!
//! This crate renders one fixed view of the set into an RGB buffer,
//! once, and then hands that buffer to a window that shows it until
//! it is closed.  The numeric core (`escape`, `colors`, `planes`) is
//! pure; the renderer drives it over the raster, optionally on several
//! threads; `display` and `output` only ever read the finished buffer.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate minifb;
extern crate num;

pub mod buffer;
pub mod colors;
pub mod config;
pub mod display;
pub mod error;
pub mod escape;
pub mod output;
pub mod planes;
pub mod render;

pub use buffer::PixelBuffer;
pub use colors::{color, hsv_to_rgb, Color};
pub use config::Config;
pub use display::{show, Surface, Window};
pub use error::{Error, Result};
pub use escape::{escape_time, Escape};
pub use output::write_image;
pub use planes::{Pixel, ViewMapper};
pub use render::Renderer;
