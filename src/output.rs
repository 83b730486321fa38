// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Saves a rendered buffer as a binary PPM.

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Encodes the buffer as a P6 pixmap, row 0 first.
pub fn encode_ppm<W: Write>(output: W, buffer: &PixelBuffer) -> Result<()> {
    let (width, height) = match (u32::try_from(buffer.width()), u32::try_from(buffer.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(Error::InvalidConfig(format!(
                "{}x{} is too large for a pixmap",
                buffer.width(),
                buffer.height()
            )))
        }
    };
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
    encoder.encode(buffer.as_bytes(), width, height, ColorType::RGB(8))?;
    Ok(())
}

/// Writes the buffer to `path` as a P6 pixmap.
pub fn write_image<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> Result<()> {
    let path = path.as_ref();
    let mut output = BufWriter::new(File::create(path)?);
    encode_ppm(&mut output, buffer)?;
    output.flush()?;
    info!("wrote {}", path.display());
    Ok(())
}
