// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient per-feature highlight state.
//!
//! Pointer-enter moves a feature to [`Highlight::Highlighted`] and applies an
//! emphasis override (wider stroke) on top of its data-driven style.
//! Pointer-leave moves it back to [`Highlight::Base`]; the restored style is
//! always recomputed from the *current* scales, never replayed from a cached
//! descriptor, so it reflects any metric or scale change that happened while
//! the feature was highlighted.
//!
//! Highlight slots are independent: hovering one feature never disturbs
//! another's state.

use alloc::string::String;

use hashbrown::HashMap;

use crate::metric::Metric;
use crate::scale::{ScaleSqrt, SequentialScale};
use crate::style::{Style, region_style, segment_style};

/// Stroke width applied while a feature is highlighted.
const EMPHASIS_STROKE_WIDTH: f64 = 3.0;

/// The two-state highlight machine for one feature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    /// The data-driven base style.
    #[default]
    Base,
    /// Pointer is over the feature; emphasis override is active.
    Highlighted,
}

/// The current choropleth encoding: the scale state styles are resolved
/// against.
///
/// Owning the scale in an explicit context (rather than capturing it in
/// callbacks) is what lets highlight resets pick up scale changes.
#[derive(Clone, Copy, Debug)]
pub struct RegionEncoding {
    /// Sequential fill color scale over the full dataset's ratio domain.
    pub color: SequentialScale,
}

impl RegionEncoding {
    /// Resolves the base style for a region metric.
    pub fn style(&self, metric: Metric) -> Option<Style> {
        region_style(metric, &self.color)
    }
}

/// The current network-line encoding: color and width scale state.
#[derive(Clone, Copy, Debug)]
pub struct SegmentEncoding {
    /// Sequential stroke color scale over the full load domain.
    pub color: SequentialScale,
    /// Square-root line width scale over the same domain.
    pub width: ScaleSqrt,
}

impl SegmentEncoding {
    /// Resolves the base style for a segment metric.
    pub fn style(&self, metric: Metric) -> Option<Style> {
        segment_style(metric, &self.color, &self.width)
    }
}

/// Per-feature highlight bookkeeping, keyed by feature identity.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
    states: HashMap<String, Highlight>,
}

impl HoverState {
    /// Creates an empty hover state (all features at base).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the highlight state for a feature.
    pub fn state(&self, name: &str) -> Highlight {
        self.states.get(name).copied().unwrap_or_default()
    }

    /// Handles pointer-enter for a feature.
    pub fn pointer_enter(&mut self, name: &str) {
        self.states.insert(String::from(name), Highlight::Highlighted);
    }

    /// Handles pointer-leave for a feature, resetting it to base.
    pub fn pointer_leave(&mut self, name: &str) {
        self.states.remove(name);
    }

    /// Resolves the effective style for a region under the current encoding.
    ///
    /// Base features get exactly what [`RegionEncoding::style`] produces;
    /// highlighted features get the same fill with the emphasis stroke width.
    pub fn resolve(&self, name: &str, metric: Metric, encoding: &RegionEncoding) -> Option<Style> {
        let base = encoding.style(metric)?;
        match self.state(name) {
            Highlight::Base => Some(base),
            Highlight::Highlighted => Some(Style {
                stroke_width: EMPHASIS_STROKE_WIDTH,
                ..base
            }),
        }
    }
}
