// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset model and loader for the loadmap pipeline.
//!
//! Two GeoJSON feature collections feed the pipeline: administrative regions
//! (polygons with `name`, `population`, and `avg_daily_trafic` properties)
//! and a transport network's line segments (`avg_daily_trafic` only). Both
//! documents are loaded concurrently behind a join barrier: the pipeline only
//! continues when *both* loads succeed, and either failure aborts it with no
//! partial result.
//!
//! Geometries are carried opaquely for the rendering backend; nothing in the
//! pipeline interprets them.

mod config;
mod load;
mod types;

pub use config::{AppConfig, ChartConfig, ConfigError, InputConfig, MapConfig};
pub use load::{LoadError, load_datasets, parse_regions, parse_segments};
pub use types::{Region, Segment};
