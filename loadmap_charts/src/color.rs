// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential color ramps.
//!
//! A [`ColorRamp`] is an ordered list of color stops sampled by piecewise
//! linear interpolation over a `[0, 1]` parameter. The two provided ramps are
//! the ColorBrewer sequential schemes conventionally used for ordered data:
//! light-to-dark blues for the choropleth fill, and yellow-to-red for line
//! intensity.

use peniko::Color;

/// ColorBrewer "Blues" (9-class), light to dark.
const BLUES: [Color; 9] = [
    Color::from_rgb8(0xf7, 0xfb, 0xff),
    Color::from_rgb8(0xde, 0xeb, 0xf7),
    Color::from_rgb8(0xc6, 0xdb, 0xef),
    Color::from_rgb8(0x9e, 0xca, 0xe1),
    Color::from_rgb8(0x6b, 0xae, 0xd6),
    Color::from_rgb8(0x42, 0x92, 0xc6),
    Color::from_rgb8(0x21, 0x71, 0xb5),
    Color::from_rgb8(0x08, 0x51, 0x9c),
    Color::from_rgb8(0x08, 0x30, 0x6b),
];

/// ColorBrewer "YlOrRd" (9-class), yellow to dark red.
const YL_OR_RD: [Color; 9] = [
    Color::from_rgb8(0xff, 0xff, 0xcc),
    Color::from_rgb8(0xff, 0xed, 0xa0),
    Color::from_rgb8(0xfe, 0xd9, 0x76),
    Color::from_rgb8(0xfe, 0xb2, 0x4c),
    Color::from_rgb8(0xfd, 0x8d, 0x3c),
    Color::from_rgb8(0xfc, 0x4e, 0x2a),
    Color::from_rgb8(0xe3, 0x1a, 0x1c),
    Color::from_rgb8(0xbd, 0x00, 0x26),
    Color::from_rgb8(0x80, 0x00, 0x26),
];

/// A sequential color ramp defined by ordered stops.
#[derive(Clone, Copy, Debug)]
pub struct ColorRamp {
    stops: &'static [Color],
}

impl ColorRamp {
    /// The light-to-dark blue ramp (choropleth fills).
    pub fn blues() -> Self {
        Self { stops: &BLUES }
    }

    /// The yellow-to-red ramp (network line intensity).
    pub fn yl_or_rd() -> Self {
        Self { stops: &YL_OR_RD }
    }

    /// Samples the ramp at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let n = self.stops.len();
        debug_assert!(n >= 2, "ramps carry at least two stops");

        let pos = t * (n - 1) as f64;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "pos is non-negative and bounded by the stop count"
        )]
        let i = (pos as usize).min(n - 2);
        let frac = pos - i as f64;
        lerp(self.stops[i], self.stops[i + 1], frac)
    }
}

fn lerp(a: Color, b: Color, t: f64) -> Color {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "t is in [0, 1]; f32 precision is plenty for color components"
    )]
    let t = t.clamp(0.0, 1.0) as f32;
    let mut components = [0.0_f32; 4];
    for (out, (&x, &y)) in components
        .iter_mut()
        .zip(a.components.iter().zip(b.components.iter()))
    {
        *out = x + (y - x) * t;
    }
    Color::new(components)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn endpoints_hit_first_and_last_stop() {
        let ramp = ColorRamp::blues();
        assert_eq!(ramp.sample(0.0).components, BLUES[0].components);
        assert_eq!(ramp.sample(1.0).components, BLUES[8].components);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let ramp = ColorRamp::yl_or_rd();
        assert_eq!(ramp.sample(-1.0).components, ramp.sample(0.0).components);
        assert_eq!(ramp.sample(2.0).components, ramp.sample(1.0).components);
    }

    #[test]
    fn midpoints_interpolate_between_adjacent_stops() {
        let ramp = ColorRamp::blues();
        // Halfway between the first two stops.
        let t = 0.5 / 8.0;
        let c = ramp.sample(t);
        for k in 0..4 {
            let expect = (BLUES[0].components[k] + BLUES[1].components[k]) * 0.5;
            assert!((c.components[k] - expect).abs() < 1e-6);
        }
    }
}
