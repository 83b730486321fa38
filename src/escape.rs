// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test.
//!
//! A point `c` belongs to the Mandelbrot set when repeatedly squaring
//! `z` and adding `c`, starting from zero, never carries `z` outside
//! the circle of radius two.  We cannot iterate forever, so we stop
//! after a fixed number of steps and call whatever is still inside
//! "bounded."  Points that leave are tagged with the step at which we
//! noticed, and that number is what the colorizer paints.

use num::Complex;

/// Squared escape radius.  Comparing `re² + im²` against this is the
/// same test as `|z| > 2` without the square root.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// The outcome of the escape-time test for a single point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Escape {
    /// `|z|` was seen above two at the start of this step.  Steps are
    /// counted from one, so the value lies in `1..max_iter`.
    Escaped(usize),
    /// The orbit stayed inside the radius for every step we ran.
    Bounded,
}

/// Iterates `z <- z² + c` from `z = 0` for steps `1..max_iter`,
/// checking the magnitude of `z` before each update.
///
/// Because the check comes first, step one always sees `z = 0` and
/// nothing can escape before step two.
pub fn escape_time(c: Complex<f64>, max_iter: usize) -> Escape {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 1..max_iter {
        if z.norm_sqr() > ESCAPE_RADIUS_SQUARED {
            return Escape::Escaped(i);
        }
        z = z * z + c;
    }
    Escape::Bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_points_escape_on_the_second_step() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 1000), Escape::Escaped(2));
        assert_eq!(escape_time(Complex::new(0.0, -2.5), 1000), Escape::Escaped(2));
        assert_eq!(escape_time(Complex::new(-100.0, 100.0), 10), Escape::Escaped(2));
    }

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 2), Escape::Bounded);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 1000), Escape::Bounded);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 100_000), Escape::Bounded);
    }

    #[test]
    fn radius_two_is_not_an_escape() {
        // c = -2 settles on z = 2 forever; the comparison is strict.
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 1000), Escape::Bounded);
    }

    #[test]
    fn step_count_follows_the_orbit() {
        // c = 1: z goes 0, 1, 2, 5.  |5| > 2 is seen at step four.
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 1000), Escape::Escaped(4));
    }

    #[test]
    fn cap_limits_the_steps() {
        // With a cap of four only steps 1..=3 run, so c = 1 is never
        // caught outside.
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 4), Escape::Bounded);
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 5), Escape::Escaped(4));
    }

    #[test]
    fn known_interior_points() {
        assert_eq!(escape_time(Complex::new(0.0, -0.5), 1000), Escape::Bounded);
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 1000), Escape::Bounded);
        assert_eq!(escape_time(Complex::new(0.25, 0.0), 1000), Escape::Bounded);
    }
}
