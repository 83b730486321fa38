// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns escape results into colors.
//!
//! Escaped points walk around the hue circle, one full turn every 255
//! steps, starting from a blue at 0.6.  Saturation and value are
//! fixed, so every escaped pixel is a half-bright pure hue.  Points
//! inside the set are black.
//!
//! The arithmetic is done in single precision and channels are
//! truncated rather than rounded; both matter for reproducing the
//! reference image bit for bit.

use crate::escape::Escape;

/// Hue of a point that escapes at step zero.
pub const BASE_HUE: f32 = 0.6;
/// Steps per full turn of the hue circle.
pub const HUE_PERIOD: f32 = 255.0;
/// Saturation of every escaped pixel.
pub const SATURATION: f32 = 1.0;
/// Value (brightness) of every escaped pixel.
pub const VALUE: f32 = 0.5;

/// An 8-bit RGB triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// The color of points inside the set.
    pub const BLACK: Color = Color(0, 0, 0);

    /// Scales unit-range channels to bytes, truncating.
    pub fn from_unit(r: f32, g: f32, b: f32) -> Color {
        Color((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
    }

    /// Packs the color as `0x00RRGGBB`.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }
}

/// Standard six-sector HSV to RGB conversion.  All inputs and outputs
/// are in `[0, 1]`; a hue of exactly one wraps to sector zero.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let scaled = h * 6.0;
    let floor = scaled.floor();
    let f = scaled - floor;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    match (floor as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Hue for a point that escaped at step `iteration`, wrapped into
/// `[0, 1)`.
pub fn hue(iteration: usize) -> f32 {
    (BASE_HUE + iteration as f32 / HUE_PERIOD) % 1.0
}

/// Color of a point that escaped at step `iteration`.
pub fn escaped_color(iteration: usize) -> Color {
    let (r, g, b) = hsv_to_rgb(hue(iteration), SATURATION, VALUE);
    Color::from_unit(r, g, b)
}

/// Color for any escape result.
pub fn color(escape: Escape) -> Color {
    match escape {
        Escape::Bounded => Color::BLACK,
        Escape::Escaped(i) => escaped_color(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(hsv: (f32, f32, f32)) -> Color {
        let (r, g, b) = hsv_to_rgb(hsv.0, hsv.1, hsv.2);
        Color::from_unit(r, g, b)
    }

    #[test]
    fn red_at_half_value_truncates() {
        assert_eq!(bytes((0.0, 1.0, 0.5)), Color(127, 0, 0));
    }

    #[test]
    fn hue_of_one_wraps_to_red() {
        assert_eq!(bytes((1.0, 1.0, 0.5)), Color(127, 0, 0));
    }

    #[test]
    fn exact_sector_starts() {
        // 0.5 * 6 is exactly 3: sector three with f = 0 is (p, q, v).
        assert_eq!(bytes((0.5, 1.0, 0.5)), Color(0, 127, 127));
        assert_eq!(bytes((0.5, 1.0, 1.0)), Color(0, 255, 255));
    }

    #[test]
    fn sector_table_order() {
        // The middle of every sector has f = 0.5, so q = t = v / 2.
        let expected = [
            Color(255, 127, 0),
            Color(127, 255, 0),
            Color(0, 255, 127),
            Color(0, 127, 255),
            Color(127, 0, 255),
            Color(255, 0, 127),
        ];
        for (sector, want) in expected.iter().enumerate() {
            let h = (sector as f32 + 0.5) / 6.0;
            assert_eq!(bytes((h, 1.0, 1.0)), *want, "sector {}", sector);
        }
    }

    #[test]
    fn every_sector_boundary_hits_its_table_entry() {
        // At h = k/6 the fraction is zero (or one ulp below the next
        // sector), so the table entry reduces to a primary or secondary.
        let expected = [
            (1.0, 0.0, 0.0),
            (1.0, 1.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 1.0, 1.0),
            (0.0, 0.0, 1.0),
            (1.0, 0.0, 1.0),
        ];
        for (k, want) in expected.iter().enumerate() {
            let h = k as f32 / 6.0;
            let (r, g, b) = hsv_to_rgb(h, 1.0, 1.0);
            for (got, want) in [(r, want.0), (g, want.1), (b, want.2)].iter() {
                assert!((got - want).abs() < 1e-5, "k {}: {:?}", k, (r, g, b));
            }
        }
    }

    #[test]
    fn just_below_a_boundary_stays_in_the_lower_sector() {
        // Sector zero ends in yellow; sector one starts in yellow.
        let below = hsv_to_rgb(0.16, 1.0, 1.0);
        assert_eq!(below.0, 1.0);
        assert!(below.1 < 1.0);
        let above = hsv_to_rgb(0.17, 1.0, 1.0);
        assert!(above.0 < 1.0);
        assert_eq!(above.1, 1.0);
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(bytes((0.3, 0.0, 0.5)), Color(127, 127, 127));
    }

    #[test]
    fn hue_wraps_into_unit_range() {
        for i in 0..2000 {
            let h = hue(i);
            assert!(h >= 0.0 && h < 1.0, "hue({}) = {}", i, h);
        }
        assert!((hue(0) - 0.6).abs() < 1e-6);
        assert!((hue(51) - 0.8).abs() < 1e-5);
    }

    #[test]
    fn color_repeats_every_period() {
        for i in 1..600 {
            let a = escaped_color(i);
            let b = escaped_color(i + 255);
            for (x, y) in [(a.0, b.0), (a.1, b.1), (a.2, b.2)].iter() {
                assert!(
                    (i32::from(*x) - i32::from(*y)).abs() <= 1,
                    "step {}: {:?} vs {:?}",
                    i,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn bounded_is_black() {
        assert_eq!(color(Escape::Bounded), Color::BLACK);
    }

    #[test]
    fn escaped_colors_are_half_bright() {
        for i in 1..1000 {
            let c = color(Escape::Escaped(i));
            let max = c.0.max(c.1).max(c.2);
            let min = c.0.min(c.1).min(c.2);
            assert_eq!(max, 127, "step {}: {:?}", i, c);
            assert_eq!(min, 0, "step {}: {:?}", i, c);
        }
    }

    #[test]
    fn packs_for_the_window() {
        assert_eq!(Color(0x12, 0x34, 0x56).to_u32(), 0x0012_3456);
        assert_eq!(Color::BLACK.to_u32(), 0);
    }
}
