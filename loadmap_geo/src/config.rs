// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Externally supplied configuration.
//!
//! All tunables here are inputs, never computed: the ranking size, the legend
//! bucket count, the bar chart geometry, and the initial map viewport (passed
//! through untouched to the external map backend).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}")]
    Io {
        /// The config path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML.
    #[error("failed to parse config file")]
    Toml(#[from] toml::de::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Source dataset locations.
    pub input: InputConfig,
    /// Number of entries in the ranked bar chart.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Number of legend buckets.
    #[serde(default = "default_legend_buckets")]
    pub legend_buckets: usize,
    /// Bar chart geometry.
    #[serde(default)]
    pub chart: ChartConfig,
    /// Initial map viewport for the external map backend.
    #[serde(default)]
    pub map: MapConfig,
}

/// Source dataset locations.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Region feature collection (polygons).
    pub regions: PathBuf,
    /// Network feature collection (lines).
    pub network: PathBuf,
}

/// Bar chart geometry: outer size and margins.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Outer chart width.
    pub width: f64,
    /// Outer chart height.
    pub height: f64,
    /// Top margin.
    pub margin_top: f64,
    /// Right margin.
    pub margin_right: f64,
    /// Bottom margin.
    pub margin_bottom: f64,
    /// Left margin (category labels).
    pub margin_left: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margin_top: 20.0,
            margin_right: 20.0,
            margin_bottom: 30.0,
            margin_left: 140.0,
        }
    }
}

/// Initial map viewport. Unused by the pipeline itself; carried for the map
/// rendering backend.
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    /// Initial center latitude.
    pub center_lat: f64,
    /// Initial center longitude.
    pub center_lon: f64,
    /// Initial zoom level.
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 46.8,
            center_lon: 8.3,
            zoom: 8,
        }
    }
}

fn default_top_n() -> usize {
    10
}

fn default_legend_buckets() -> usize {
    5
}

impl AppConfig {
    /// Loads the configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_the_documented_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [input]
            regions = "data/regions_average_daily_traffic.geojson"
            network = "data/network_average_daily_traffic.geojson"
            "#,
        )
        .unwrap();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.legend_buckets, 5);
        assert_eq!(config.chart.width, 600.0);
        assert_eq!(config.chart.margin_left, 140.0);
        assert_eq!(config.map.zoom, 8);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            top_n = 3
            legend_buckets = 7

            [input]
            regions = "a.geojson"
            network = "b.geojson"

            [chart]
            width = 800.0
            height = 500.0
            margin_top = 10.0
            margin_right = 10.0
            margin_bottom = 20.0
            margin_left = 100.0

            [map]
            center_lat = 47.0
            center_lon = 7.5
            zoom = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.legend_buckets, 7);
        assert_eq!(config.chart.width, 800.0);
        assert_eq!(config.map.zoom, 10);
    }
}
