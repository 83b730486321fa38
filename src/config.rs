// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render configuration.  The defaults reproduce the reference view:
//! a 1024x512 raster with an iteration cap of 1000, rendered on a
//! single thread.

use crate::buffer::CHANNELS;
use crate::error::{Error, Result};

/// Width of the reference raster.
pub const IMAGE_WIDTH: usize = 1024;
/// Height of the reference raster.
pub const IMAGE_HEIGHT: usize = IMAGE_WIDTH / 2;
/// Iteration cap of the reference raster.
pub const MAX_ITER: usize = 1000;

/// The fixed parameters of one render.  Built once at startup and
/// never changed afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Raster width in pixels.  Must be even.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
    /// Iteration cap; points still bounded after `max_iter - 1`
    /// steps are considered inside the set.
    pub max_iter: usize,
    /// Number of render threads.  One means the sequential render.
    pub threads: usize,
}

impl Config {
    /// A configuration with the reference aspect, where the height
    /// is half the width.
    pub fn new(width: usize, max_iter: usize) -> Self {
        Config {
            width,
            height: width / 2,
            max_iter,
            threads: 1,
        }
    }

    /// Overrides the raster height.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Overrides the thread count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Checks that the configuration can be rendered.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "raster {}x{} is empty",
                self.width, self.height
            )));
        }
        if self
            .width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .is_none()
        {
            return Err(Error::InvalidConfig(format!(
                "raster {}x{} does not fit in memory",
                self.width, self.height
            )));
        }
        if self.width % 2 != 0 {
            return Err(Error::InvalidConfig(format!(
                "raster width {} is not even",
                self.width
            )));
        }
        if self.max_iter < 2 {
            return Err(Error::InvalidConfig(format!(
                "iteration cap {} leaves no steps to run",
                self.max_iter
            )));
        }
        if self.threads == 0 {
            return Err(Error::InvalidConfig("thread count is zero".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(IMAGE_WIDTH, MAX_ITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_reference_view() {
        let config = Config::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 512);
        assert_eq!(config.max_iter, 1000);
        assert_eq!(config.threads, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn height_follows_width() {
        assert_eq!(Config::new(64, 50).height, 32);
        assert_eq!(Config::new(64, 50).with_height(10).height, 10);
    }

    #[test]
    fn validate_rejects_bad_shapes() {
        assert!(Config::new(0, 100).validate().is_err());
        assert!(Config::new(33, 100).with_height(16).validate().is_err());
        assert!(Config::new(32, 100).with_height(0).validate().is_err());
        assert!(Config::new(32, 1).validate().is_err());
        assert!(Config::new(32, 100).with_threads(0).validate().is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn validate_rejects_oversized_rasters() {
        let side = usize::max_value() / 2 + 1;
        assert!(Config::new(2, 100).with_height(side).validate().is_err());
        let big = Config::new(1 << 32, 10).with_height(1 << 32);
        match big.validate() {
            Err(Error::InvalidConfig(_)) => {}
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }
}
