// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous and discrete scales.
//!
//! Scale domains are always inferred over the *entire* dataset's valid
//! metrics (see [`infer_domain`]), never over a ranked or filtered subset, so
//! that unselected features stay visually comparable to selected ones.
//!
//! A degenerate domain (`min == max`, e.g. a single feature or a constant
//! metric) maps every input to the midpoint of the output range rather than
//! dividing by zero.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use peniko::Color;

use crate::color::ColorRamp;
use crate::metric::Metric;

/// Infers a `(min, max)` domain from a dataset's derived metrics.
///
/// Invalid metrics are ignored. Returns `None` if no valid metric is present
/// (including the empty dataset); callers must short-circuit instead of
/// building a scale in that case.
pub fn infer_domain(metrics: &[Metric]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for metric in metrics {
        let Some(v) = metric.value() else {
            continue;
        };
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return (r0 + r1) * 0.5;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

/// A square-root magnitude mapping from a non-negative domain to a range.
///
/// Interpolation happens in sqrt space, which compresses the visual effect of
/// outlier-high values so low values remain distinguishable. Used for network
/// line widths, where raw traffic spans several orders of magnitude.
#[derive(Clone, Copy, Debug)]
pub struct ScaleSqrt {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleSqrt {
    /// Creates a new sqrt scale. Negative domain bounds are clamped to zero.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain: (domain.0.max(0.0), domain.1.max(0.0)),
            range,
        }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let s0 = d0.sqrt();
        let s1 = d1.sqrt();
        let denom = s1 - s0;
        if denom == 0.0 {
            return (r0 + r1) * 0.5;
        }
        let t = (x.max(0.0).sqrt() - s0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

/// A sequential color scale: a continuous domain mapped through a
/// [`ColorRamp`].
#[derive(Clone, Copy, Debug)]
pub struct SequentialScale {
    domain: (f64, f64),
    ramp: ColorRamp,
}

impl SequentialScale {
    /// Creates a new sequential color scale.
    pub fn new(domain: (f64, f64), ramp: ColorRamp) -> Self {
        Self { domain, ramp }
    }

    /// Maps a domain value to a ramp color.
    pub fn map(&self, x: f64) -> Color {
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        if denom == 0.0 {
            return self.ramp.sample(0.5);
        }
        self.ramp.sample((x - d0) / denom)
    }

    /// Returns the minimum of the configured domain.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

/// A discrete band scale for categorical chart rows.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the position of the leading edge of the band at `index`.
    pub fn position(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::metric::{InvalidMetric, per_capita_ratio};

    use super::*;

    #[test]
    fn linear_scale_maps_endpoints_to_range() {
        let s = ScaleLinear::new((0.0, 3000.0), (0.0, 600.0));
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(3000.0), 600.0);
        assert_eq!(s.map(1000.0), 200.0);
    }

    #[test]
    fn degenerate_domain_collapses_to_range_midpoint() {
        let s = ScaleLinear::new((5.0, 5.0), (0.0, 10.0));
        assert_eq!(s.map(5.0), 5.0);
        assert_eq!(s.map(123.0), 5.0);

        let s = ScaleSqrt::new((4.0, 4.0), (1.0, 9.0));
        assert_eq!(s.map(4.0), 5.0);
    }

    #[test]
    fn sqrt_scale_maps_endpoints_and_compresses_highs() {
        let s = ScaleSqrt::new((0.0, 160_000.0), (1.0, 8.0));
        assert!((s.map(0.0) - 1.0).abs() < 1e-9);
        assert!((s.map(160_000.0) - 8.0).abs() < 1e-9);
        // A quarter of the max already gets half the width span.
        assert!((s.map(40_000.0) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn domain_ignores_invalid_metrics() {
        let metrics = [
            per_capita_ratio(Some(100.0), Some(1000.0)),
            per_capita_ratio(Some(300.0), Some(1000.0)),
            per_capita_ratio(Some(0.0), Some(500.0)),
            per_capita_ratio(Some(100.0), Some(0.0)),
        ];
        assert!(matches!(
            metrics[3],
            Metric::Invalid(InvalidMetric::NonPositivePopulation)
        ));
        assert_eq!(infer_domain(&metrics), Some((0.0, 3000.0)));
    }

    #[test]
    fn empty_or_all_invalid_metrics_yield_no_domain() {
        assert_eq!(infer_domain(&[]), None);
        let metrics = [per_capita_ratio(None, None)];
        assert_eq!(infer_domain(&metrics), None);
    }

    #[test]
    fn band_positions_are_monotonic_and_padded() {
        let band = ScaleBand::new((0.0, 350.0), 10);
        assert!(band.position(0) > 0.0);
        let mut prev = band.position(0);
        for i in 1..10 {
            let p = band.position(i);
            assert!(p > prev + band.band_width(), "bands overlap at index {i}");
            prev = p;
        }
        assert!(prev + band.band_width() < 350.0);
    }

    #[test]
    fn sequential_scale_samples_ramp_extremes() {
        let ramp = ColorRamp::blues();
        let s = SequentialScale::new((0.0, 3000.0), ramp);
        assert_eq!(s.map(0.0).components, ramp.sample(0.0).components);
        assert_eq!(s.map(3000.0).components, ramp.sample(1.0).components);
    }
}
