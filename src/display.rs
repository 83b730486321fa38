// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Putting the finished image on screen.
//!
//! The renderer is done before any of this runs; the display only
//! ever reads the buffer.  Anything that can show a fixed-size RGB
//! raster can stand in for the window through the `Surface` trait.

use minifb::{Key, WindowOptions};

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Something that can present a rendered buffer, frame after frame.
pub trait Surface {
    /// False once the user has asked to close the surface.
    fn is_open(&self) -> bool;

    /// Shows the buffer for one frame.
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()>;
}

/// Re-presents the same buffer until the surface closes.  Returns the
/// number of frames shown.
pub fn show<S: Surface>(surface: &mut S, buffer: &PixelBuffer) -> Result<usize> {
    let mut frames = 0;
    while surface.is_open() {
        surface.present(buffer)?;
        frames += 1;
    }
    debug!("surface closed after {} frames", frames);
    Ok(frames)
}

/// A desktop window sized to the raster.
pub struct Window {
    window: minifb::Window,
    width: usize,
    height: usize,
}

impl Window {
    /// Opens a window of exactly `width` by `height` pixels.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = minifb::Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::Window(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Window {
            window,
            width,
            height,
        })
    }
}

impl Surface for Window {
    fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        if buffer.width() != self.width || buffer.height() != self.height {
            return Err(Error::Window(format!(
                "buffer is {}x{} but the window is {}x{}",
                buffer.width(),
                buffer.height(),
                self.width,
                self.height
            )));
        }
        let frame = buffer.to_u32_bottom_up();
        self.window
            .update_with_buffer(&frame, self.width, self.height)
            .map_err(|e| Error::Window(e.to_string()))
    }
}
