// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranked bar chart layout.
//!
//! Converts a ranking into horizontal bar geometry: a discrete vertical band
//! position per entry and a linear horizontal extent proportional to the
//! entry's value. Each bar also carries its growth-transition endpoints
//! (`width_from = 0`, `width_to = extent`); transition duration and easing
//! are the rendering backend's concern, only the target values live here.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::rank::RankEntry;
use crate::scale::{ScaleBand, ScaleLinear};

/// Margins around the plot rectangle, in chart coordinate units.
///
/// The generous left margin leaves room for category labels, which the bar
/// chart draws to the left of each band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartMargins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin (value axis labels).
    pub bottom: f64,
    /// Left margin (category labels).
    pub left: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 140.0,
        }
    }
}

/// Layout inputs for the ranked bar chart: outer size, margins, band padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarChartSpec {
    /// Outer chart width.
    pub width: f64,
    /// Outer chart height.
    pub height: f64,
    /// Margins reserved around the plot rectangle.
    pub margins: ChartMargins,
    /// Inner/outer band padding in band units.
    pub band_padding: f64,
}

impl BarChartSpec {
    /// Creates a spec with default margins and padding.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: ChartMargins::default(),
            band_padding: 0.1,
        }
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Returns the plot rectangle (outer size inset by the margins).
    pub fn plot(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            (self.width - self.margins.right).max(self.margins.left),
            (self.height - self.margins.bottom).max(self.margins.top),
        )
    }

    /// Arranges a ranking into per-bar geometry.
    ///
    /// The value scale is linear with domain `[0, max(ranking)]` and range
    /// `[0, plot width]`; the band scale divides the plot height uniformly in
    /// ranking order. An empty ranking yields an empty layout.
    pub fn arrange(&self, ranking: &[RankEntry]) -> Vec<BarLayout> {
        if ranking.is_empty() {
            return Vec::new();
        }
        let plot = self.plot();
        let max = ranking.iter().fold(0.0_f64, |acc, e| acc.max(e.value));
        let value = ScaleLinear::new((0.0, max), (0.0, plot.width()));
        let band = ScaleBand::new((0.0, plot.height()), ranking.len())
            .with_padding(self.band_padding, self.band_padding);

        ranking
            .iter()
            .enumerate()
            .map(|(i, entry)| BarLayout {
                name: entry.name.clone(),
                x: plot.x0,
                y: plot.y0 + band.position(i),
                height: band.band_width(),
                width_from: 0.0,
                width_to: value.map(entry.value),
            })
            .collect()
    }
}

/// Geometry for one bar, in chart coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    /// Ranked feature identity (category label).
    pub name: String,
    /// Left edge of the bar (the plot's left edge).
    pub x: f64,
    /// Top edge of the bar's band.
    pub y: f64,
    /// Band height.
    pub height: f64,
    /// Initial bar extent for the growth transition.
    pub width_from: f64,
    /// Target bar extent, proportional to the entry's value.
    pub width_to: f64,
}
