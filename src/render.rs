// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! Walks every pixel of the raster, maps it onto the complex plane,
//! runs the escape-time test and stores the resulting color.  Each
//! pixel is independent of every other, so the same work can be
//! split across threads by handing out whole rows; the result does
//! not depend on which thread drew which row.

use itertools::iproduct;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::buffer::{put_color, PixelBuffer, CHANNELS};
use crate::colors::{color, Color};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::escape::escape_time;
use crate::planes::{Pixel, ViewMapper};

/// Holds the view and the iteration cap.  Once built it is never
/// mutated, so one renderer may be shared by any number of threads.
pub struct Renderer {
    plane: ViewMapper,
    limit: usize,
    threads: usize,
}

impl Renderer {
    /// Builds a renderer for a validated configuration.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        debug!(
            "renderer for {}x{} raster, {} iterations, {} threads",
            config.width, config.height, config.max_iter, config.threads
        );
        Ok(Renderer {
            plane: ViewMapper::new(config.width, config.height),
            limit: config.max_iter,
            threads: config.threads,
        })
    }

    /// Color of a single pixel.
    pub fn pixel_color(&self, pixel: &Pixel) -> Color {
        color(escape_time(self.plane.pixel_to_point(pixel), self.limit))
    }

    /// The single-threaded render.  Pixels are visited column by
    /// column and progress is reported as the share of columns done.
    pub fn render_single(&self) -> PixelBuffer {
        let (width, height) = (self.plane.integral_plane.0, self.plane.integral_plane.1);
        let mut buffer = PixelBuffer::new(width, height);
        let mut progress = Progress::new(width);
        for (column, row) in iproduct!(0..width, 0..height) {
            if row == 0 {
                progress.update(column);
            }
            let pixel = Pixel(column, row);
            let offset = CHANNELS * self.plane.pixel_to_offset(&pixel);
            put_color(
                &mut buffer.as_bytes_mut()[offset..offset + CHANNELS],
                self.pixel_color(&pixel),
            );
        }
        progress.finish();
        buffer
    }

    /// Renders one row into its slice of the buffer.
    fn render_row(&self, row: usize, slot: &mut [u8]) {
        for (column, pixel) in slot.chunks_mut(CHANNELS).enumerate() {
            put_color(pixel, self.pixel_color(&Pixel(column, row)));
        }
    }

    /// Renders on the configured number of threads.  With one thread
    /// this is `render_single`.
    pub fn render(&self) -> Result<PixelBuffer> {
        let threads = self.threads;
        if threads <= 1 {
            return Ok(self.render_single());
        }

        let (width, height) = (self.plane.integral_plane.0, self.plane.integral_plane.1);
        let mut buffer = PixelBuffer::new(width, height);
        let stride = buffer.stride();
        let done = AtomicUsize::new(0);
        debug!("rendering {} rows on {} threads", height, threads);

        {
            let rows = Mutex::new(buffer.as_bytes_mut().chunks_mut(stride).enumerate());
            let (rows, done) = (&rows, &done);
            crossbeam::scope(|spawner| {
                for _ in 0..threads {
                    spawner.spawn(move |_| loop {
                        let next = match rows.lock() {
                            Ok(mut rows) => rows.next(),
                            Err(_) => None,
                        };
                        match next {
                            Some((row, slot)) => {
                                self.render_row(row, slot);
                                let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
                                if finished * 10 / height != (finished - 1) * 10 / height {
                                    info!("{}% complete", finished * 100 / height);
                                }
                            }
                            None => {
                                break;
                            }
                        }
                    });
                }
            })
            .map_err(|_| Error::RenderThread)?;
        }

        if done.load(Ordering::SeqCst) != height {
            return Err(Error::RenderThread);
        }
        info!("Fractal computation complete.");
        Ok(buffer)
    }
}

/// Reports integer percent complete across the horizontal axis,
/// logging only when the figure changes.
struct Progress {
    total: usize,
    last: Option<usize>,
}

impl Progress {
    fn new(total: usize) -> Self {
        Progress { total, last: None }
    }

    fn update(&mut self, done: usize) {
        let percent = done * 100 / self.total;
        if self.last != Some(percent) {
            info!("{}% complete", percent);
            self.last = Some(percent);
        }
    }

    fn finish(&self) {
        info!("Fractal computation complete.");
    }
}
