// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual encoding building blocks for traffic-load maps and charts.
//!
//! This crate covers the data-to-visual-encoding pipeline shared by a
//! per-capita choropleth, a weighted/colored network-line map, and a ranked
//! bar chart:
//! - **Metrics** derive a per-feature value (with explicit invalid tagging).
//! - **Scales** map metric values into colors, widths, and positions.
//! - **Styles** resolve one feature into a render-ready descriptor.
//! - **Legends** discretize a continuous color scale for display.
//! - **Hover state** tracks transient highlight overrides per feature.
//! - **Bar chart layout** places a ranking into band/linear positions.
//!
//! Actual shape/tile painting, dataset fetching, and text rendering are out
//! of scope; the outputs here are plain descriptors a rendering backend can
//! consume.

#![no_std]

extern crate alloc;

mod bar_chart;
mod color;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod hover;
mod legend;
mod metric;
mod rank;
mod scale;
mod style;

pub use bar_chart::{BarChartSpec, BarLayout, ChartMargins};
pub use color::ColorRamp;
pub use format::{format_count, format_ratio_tooltip};
pub use hover::{Highlight, HoverState, RegionEncoding, SegmentEncoding};
pub use legend::{LegendBucket, color_legend};
pub use metric::{InvalidMetric, Metric, per_capita_ratio, raw_load};
pub use rank::{RankEntry, max_by_metric, top_by_metric};
pub use scale::{ScaleBand, ScaleLinear, ScaleSqrt, SequentialScale, infer_domain};
pub use style::{Style, region_style, segment_style};
