// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GeoJSON loading and the two-dataset join barrier.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use geojson::{Feature, GeoJson};
use thiserror::Error;
use tracing::info;

use crate::types::{Region, Segment};

/// Property key for the region name.
const NAME_KEY: &str = "name";
/// Property key for the region population.
const POPULATION_KEY: &str = "population";
/// Property key for average daily traffic (spelling from the source data).
const TRAFFIC_KEY: &str = "avg_daily_trafic";

/// Errors raised while loading a dataset. Any of these aborts the whole
/// pipeline; there is no partial rendering.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A source document could not be read.
    #[error("failed to read {path}")]
    Io {
        /// The document path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A source document is not valid GeoJSON.
    #[error("failed to parse GeoJSON")]
    Parse(#[from] geojson::Error),
    /// The document parsed but is not a feature collection.
    #[error("expected a FeatureCollection document")]
    NotAFeatureCollection,
    /// A region feature is missing its identity property.
    #[error("region feature {index} has no 'name' property")]
    MissingName {
        /// Index of the offending feature in the collection.
        index: usize,
    },
}

fn feature_f64(feature: &Feature, key: &str) -> Option<f64> {
    match feature.properties.as_ref()?.get(key)? {
        serde_json::Value::Number(n) => n.as_f64(),
        // Anything non-numeric surfaces as missing, never as 0.
        _ => None,
    }
}

fn features(doc: &str) -> Result<Vec<Feature>, LoadError> {
    match GeoJson::from_str(doc)? {
        GeoJson::FeatureCollection(fc) => Ok(fc.features),
        _ => Err(LoadError::NotAFeatureCollection),
    }
}

/// Parses the region collection.
///
/// A feature without a `name` is malformed data and fails the load; missing
/// or non-numeric `population`/`avg_daily_trafic` values are carried as
/// `None` and handled at metric derivation instead.
pub fn parse_regions(doc: &str) -> Result<Vec<Region>, LoadError> {
    features(doc)?
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| props.get(NAME_KEY))
                .and_then(|value| value.as_str())
                .ok_or(LoadError::MissingName { index })?
                .to_owned();
            Ok(Region {
                name,
                population: feature_f64(&feature, POPULATION_KEY),
                avg_daily_traffic: feature_f64(&feature, TRAFFIC_KEY),
                geometry: feature.geometry,
            })
        })
        .collect()
}

/// Parses the network segment collection.
pub fn parse_segments(doc: &str) -> Result<Vec<Segment>, LoadError> {
    Ok(features(doc)?
        .into_iter()
        .map(|feature| Segment {
            avg_daily_traffic: feature_f64(&feature, TRAFFIC_KEY),
            geometry: feature.geometry,
        })
        .collect())
}

async fn read(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })
}

async fn load_regions(path: &Path) -> Result<Vec<Region>, LoadError> {
    parse_regions(&read(path).await?)
}

async fn load_segments(path: &Path) -> Result<Vec<Segment>, LoadError> {
    parse_segments(&read(path).await?)
}

/// Loads both source datasets concurrently behind a join barrier.
///
/// All-or-nothing: if either load fails, the first error is returned and no
/// partial result is produced. No timeout is applied; a hung read stalls the
/// pipeline (known limitation of the fetch join).
pub async fn load_datasets(
    regions_path: &Path,
    network_path: &Path,
) -> Result<(Vec<Region>, Vec<Segment>), LoadError> {
    let (regions, segments) =
        tokio::try_join!(load_regions(regions_path), load_segments(network_path))?;
    info!(
        regions = regions.len(),
        segments = segments.len(),
        "datasets loaded"
    );
    Ok((regions, segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGIONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "A", "population": 1000, "avg_daily_trafic": 100},
                "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}
            },
            {
                "type": "Feature",
                "properties": {"name": "B", "population": 0, "avg_daily_trafic": 300},
                "geometry": null
            },
            {
                "type": "Feature",
                "properties": {"name": "C", "avg_daily_trafic": "n/a"},
                "geometry": null
            }
        ]
    }"#;

    const NETWORK: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"avg_daily_trafic": 161000},
                "geometry": {"type": "LineString", "coordinates": [[0,0],[1,1]]}
            }
        ]
    }"#;

    #[test]
    fn regions_parse_with_missing_numerics_as_none() {
        let regions = parse_regions(REGIONS).unwrap();
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].name, "A");
        assert_eq!(regions[0].population, Some(1000.0));
        assert_eq!(regions[0].avg_daily_traffic, Some(100.0));
        assert!(regions[0].geometry.is_some());
        // Non-numeric and absent properties both surface as None, not 0.
        assert_eq!(regions[2].avg_daily_traffic, None);
        assert_eq!(regions[2].population, None);
    }

    #[test]
    fn a_region_without_a_name_is_malformed() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"population": 10}, "geometry": null}
            ]
        }"#;
        assert!(matches!(
            parse_regions(doc),
            Err(LoadError::MissingName { index: 0 })
        ));
    }

    #[test]
    fn non_collection_documents_are_rejected() {
        let doc = r#"{"type": "Point", "coordinates": [0, 0]}"#;
        assert!(matches!(
            parse_regions(doc),
            Err(LoadError::NotAFeatureCollection)
        ));
    }

    #[test]
    fn segments_parse_their_load() {
        let segments = parse_segments(NETWORK).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].avg_daily_traffic, Some(161_000.0));
    }

    #[tokio::test]
    async fn join_barrier_fails_when_either_read_fails() {
        let dir = std::env::temp_dir();
        let regions_path = dir.join("loadmap_join_regions.geojson");
        std::fs::write(&regions_path, REGIONS).unwrap();
        let missing = dir.join("loadmap_join_missing.geojson");

        let result = load_datasets(&regions_path, &missing).await;
        assert!(matches!(result, Err(LoadError::Io { .. })));

        std::fs::remove_file(&regions_path).ok();
    }

    #[tokio::test]
    async fn join_barrier_yields_both_datasets_on_success() {
        let dir = std::env::temp_dir();
        let regions_path = dir.join("loadmap_ok_regions.geojson");
        let network_path = dir.join("loadmap_ok_network.geojson");
        std::fs::write(&regions_path, REGIONS).unwrap();
        std::fs::write(&network_path, NETWORK).unwrap();

        let (regions, segments) = load_datasets(&regions_path, &network_path).await.unwrap();
        assert_eq!(regions.len(), 3);
        assert_eq!(segments.len(), 1);

        std::fs::remove_file(&regions_path).ok();
        std::fs::remove_file(&network_path).ok();
    }
}
