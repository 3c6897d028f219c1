// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend generation for sequential color scales.
//!
//! A continuous scale is discretized into contiguous half-open buckets for
//! display. The representative swatch color is sampled strictly inside each
//! bucket (just above the lower bound) so the swatch never sits on an
//! interpolation boundary.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::scale::SequentialScale;

/// A half-open legend bucket `[from, to)`. The last bucket is open-ended
/// (`to == None`) and renders as `"{from}+"`.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendBucket {
    /// Inclusive lower bound.
    pub from: f64,
    /// Exclusive upper bound, or `None` for the open-ended last bucket.
    pub to: Option<f64>,
    /// Representative swatch color sampled from the scale.
    pub color: Color,
    /// Display label, with boundaries rounded to zero decimals.
    pub label: String,
}

/// Discretizes a sequential color scale into `k` contiguous buckets.
///
/// Buckets jointly cover the scale's domain: the first bucket starts at the
/// domain minimum, each bucket's `to` equals the next bucket's `from`, and
/// the last bucket is open-ended. Output is in ascending order for display.
///
/// Returns an empty list for `k == 0`.
pub fn color_legend(scale: &SequentialScale, k: usize) -> Vec<LegendBucket> {
    if k == 0 {
        return Vec::new();
    }
    let min = scale.domain_min();
    let max = scale.domain_max();
    let step = (max - min) / k as f64;
    // Sample just inside the lower bound of each bucket.
    let inset = step * 1e-4;

    (0..k)
        .map(|i| {
            let from = min + step * i as f64;
            let last = i == k - 1;
            let to = if last { None } else { Some(from + step) };
            let label = match to {
                Some(to) => format!("{from:.0}\u{2013}{to:.0}"),
                None => format!("{from:.0}+"),
            };
            LegendBucket {
                from,
                to,
                color: scale.map(from + inset),
                label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::color::ColorRamp;

    use super::*;

    fn scale() -> SequentialScale {
        SequentialScale::new((0.0, 3000.0), ColorRamp::blues())
    }

    #[test]
    fn buckets_are_contiguous_and_cover_the_domain() {
        let buckets = color_legend(&scale(), 5);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[0].from, 0.0);
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].to, Some(pair[1].from));
        }
        assert_eq!(buckets[4].to, None);
        assert_eq!(buckets[4].from, 2400.0);
    }

    #[test]
    fn labels_round_to_zero_decimals_and_mark_the_open_bucket() {
        let s = SequentialScale::new((0.4, 10.4), ColorRamp::blues());
        let buckets = color_legend(&s, 2);
        assert_eq!(buckets[0].label, "0\u{2013}5");
        assert_eq!(buckets[1].label, "5+");
    }

    #[test]
    fn swatches_sample_strictly_inside_each_bucket() {
        let buckets = color_legend(&scale(), 5);
        for bucket in &buckets {
            // Boundary color and bucket color must differ: the sample point is
            // strictly inside the half-open range.
            assert_ne!(
                bucket.color.components,
                scale().map(bucket.from).components
            );
        }
    }

    #[test]
    fn zero_buckets_yield_an_empty_legend() {
        assert!(color_legend(&scale(), 0).is_empty());
    }
}
