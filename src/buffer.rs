// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The rendered image: a row-major run of RGB triples, three bytes
//! per pixel.

use crate::colors::Color;

/// Bytes per pixel.
pub const CHANNELS: usize = 3;

/// A filled-in raster.  Produced once by the renderer and only read
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        PixelBuffer {
            width,
            height,
            data: vec![0 as u8; CHANNELS * width * height],
        }
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Length in bytes; always `3 * width * height`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the raster has no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        CHANNELS * self.width
    }

    /// The raw bytes, row 0 first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access for the renderer.
    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The color stored at `x, y`.
    pub fn get(&self, x: usize, y: usize) -> Color {
        let index = CHANNELS * (y * self.width + x);
        Color(self.data[index], self.data[index + 1], self.data[index + 2])
    }

    /// Stores a color at `x, y`.
    pub fn put(&mut self, x: usize, y: usize, color: Color) {
        let index = CHANNELS * (y * self.width + x);
        put_color(&mut self.data[index..index + CHANNELS], color);
    }

    /// Packs the buffer into `0x00RRGGBB` words with row 0 at the
    /// bottom, which is how a raster-position-at-lower-left display
    /// draws it.
    pub fn to_u32_bottom_up(&self) -> Vec<u32> {
        let mut words = Vec::with_capacity(self.width * self.height);
        if self.is_empty() {
            return words;
        }
        for row in self.data.chunks(self.stride()).rev() {
            words.extend(
                row.chunks(CHANNELS)
                    .map(|p| Color(p[0], p[1], p[2]).to_u32()),
            );
        }
        words
    }
}

/// Writes one color into a three-byte slot.
#[inline]
pub(crate) fn put_color(slot: &mut [u8], color: Color) {
    slot[0] = color.0;
    slot[1] = color.1;
    slot[2] = color.2;
}
