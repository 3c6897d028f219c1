// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loaded feature types.
//!
//! Features are immutable once loaded. Numeric attributes stay `Option`al:
//! a missing or non-numeric property surfaces as `None` rather than being
//! coerced to zero, so metric derivation can tag it as invalid explicitly.

use geojson::Geometry;

/// An administrative region with population and traffic load.
#[derive(Debug, Clone)]
pub struct Region {
    /// Region name (feature identity).
    pub name: String,
    /// Resident population; `None` when missing or non-numeric.
    pub population: Option<f64>,
    /// Average daily passenger traffic; `None` when missing or non-numeric.
    pub avg_daily_traffic: Option<f64>,
    /// Polygon geometry, opaque to the pipeline.
    pub geometry: Option<Geometry>,
}

/// A transport network line segment with traffic load.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Average daily passenger traffic; `None` when missing or non-numeric.
    pub avg_daily_traffic: Option<f64>,
    /// Line geometry, opaque to the pipeline.
    pub geometry: Option<Geometry>,
}
