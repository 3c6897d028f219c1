// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-feature style resolution.
//!
//! A [`Style`] is recomputed on every draw from the current metric and scale
//! state; it is never cached between frames. Resolution is pure: the same
//! metric and scales always produce the same descriptor.

use peniko::Color;

use crate::metric::Metric;
use crate::scale::{ScaleSqrt, SequentialScale};

/// Region outline color.
const REGION_STROKE: Color = Color::from_rgb8(0x33, 0x33, 0x33);
/// Region outline width in the base (non-highlighted) state.
const REGION_STROKE_WIDTH: f64 = 1.0;
/// Region fill opacity, so the base map stays readable underneath.
const REGION_FILL_OPACITY: f64 = 0.7;

/// A transient visual descriptor for one feature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Fill color (regions) or `None` for unfilled line features.
    pub fill: Option<Color>,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke / line width.
    pub stroke_width: f64,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
}

/// Resolves the choropleth style for a region.
///
/// The fill comes from the sequential color scale; stroke and opacity are
/// fixed. Returns `None` for an invalid metric, so features with an undefined
/// ratio are never silently painted.
pub fn region_style(metric: Metric, color: &SequentialScale) -> Option<Style> {
    let ratio = metric.value()?;
    Some(Style {
        fill: Some(color.map(ratio)),
        stroke: REGION_STROKE,
        stroke_width: REGION_STROKE_WIDTH,
        fill_opacity: REGION_FILL_OPACITY,
    })
}

/// Resolves the style for a network line segment.
///
/// The color and width scales are applied independently to the same load
/// metric and combined into one descriptor.
pub fn segment_style(metric: Metric, color: &SequentialScale, width: &ScaleSqrt) -> Option<Style> {
    let load = metric.value()?;
    Some(Style {
        fill: None,
        stroke: color.map(load),
        stroke_width: width.map(load),
        fill_opacity: 0.0,
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::color::ColorRamp;
    use crate::metric::{per_capita_ratio, raw_load};

    use super::*;

    #[test]
    fn region_style_is_referentially_transparent() {
        let scale = SequentialScale::new((0.0, 3000.0), ColorRamp::blues());
        let metric = per_capita_ratio(Some(300.0), Some(1000.0));
        assert_eq!(region_style(metric, &scale), region_style(metric, &scale));
    }

    #[test]
    fn region_style_fills_from_the_color_scale() {
        let scale = SequentialScale::new((0.0, 3000.0), ColorRamp::blues());
        let style = region_style(Metric::Valid(3000.0), &scale).unwrap();
        assert_eq!(style.fill.unwrap().components, scale.map(3000.0).components);
        assert_eq!(style.stroke_width, 1.0);
        assert_eq!(style.fill_opacity, 0.7);
    }

    #[test]
    fn invalid_metrics_resolve_to_no_style() {
        let scale = SequentialScale::new((0.0, 3000.0), ColorRamp::blues());
        let metric = per_capita_ratio(Some(300.0), Some(0.0));
        assert_eq!(region_style(metric, &scale), None);
    }

    #[test]
    fn segment_style_combines_color_and_width() {
        let color = SequentialScale::new((0.0, 160_000.0), ColorRamp::yl_or_rd());
        let width = ScaleSqrt::new((0.0, 160_000.0), (1.0, 8.0));
        let style = segment_style(raw_load(Some(160_000.0)), &color, &width).unwrap();
        assert_eq!(style.fill, None);
        assert_eq!(style.stroke.components, color.map(160_000.0).components);
        assert!((style.stroke_width - 8.0).abs() < 1e-9);
    }
}
