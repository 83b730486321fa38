//! Contains the ViewMapper struct, which describes the relationship
//! between a raster with an origin at 0,0 and the fixed window onto
//! the complex plane that the viewer renders.
//!
//! The view is defined entirely by the raster width: both axes are
//! scaled by a quarter of the width, the real axis is offset by three
//! quarters of the width, and the imaginary axis by a quarter of the
//! width.  The height plays no part in the mapping, so a 2:1 raster
//! shows roughly -3..1 on the real axis and -1..1 on the imaginary
//! axis.
use num::Complex;

/// Describes the width and height of a raster that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the x, y of a pixel in the raster.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of a raster onto the fixed view of the complex plane.
#[derive(Debug)]
pub struct ViewMapper {
    /// The size of the raster.
    pub integral_plane: IntegralPlane,
    // Horizontal offset, in pixels, of the imaginary axis.
    origin_x: f64,
    // Vertical offset, in pixels, of the real axis.
    origin_y: f64,
    // Pixels per unit on both axes.
    scale: f64,
}

impl ViewMapper {
    /// Builds the mapper for a raster of the given size.
    pub fn new(width: usize, height: usize) -> ViewMapper {
        let w = width as f64;
        ViewMapper {
            integral_plane: IntegralPlane(width, height),
            origin_x: 0.75 * w,
            origin_y: w / 4.0,
            scale: w / 4.0,
        }
    }

    /// The total number of points in the raster.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the raster is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel of the raster, return the point on the complex
    /// plane it samples.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            (pixel.0 as f64 - self.origin_x) / self.scale,
            (pixel.1 as f64 - self.origin_y) / self.scale,
        )
    }

    /// The linear offset of a pixel from the root of a row-major
    /// buffer, in pixels.
    pub fn pixel_to_offset(&self, pixel: &Pixel) -> usize {
        pixel.1 * self.integral_plane.0 + pixel.0
    }
}
