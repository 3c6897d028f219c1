// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranking of features by a derived metric.

use alloc::string::String;
use alloc::vec::Vec;

use crate::metric::Metric;

/// One ranked `(name, value)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct RankEntry {
    /// Feature identity.
    pub name: String,
    /// The derived metric value.
    pub value: f64,
}

/// Returns the top `n` features by metric, descending.
///
/// Invalid metrics are excluded before ranking. The sort is stable: equal
/// values keep their original dataset order. If fewer than `n` valid entries
/// exist, all of them are returned. The input is not consumed beyond reading.
pub fn top_by_metric<'a, I>(entries: I, n: usize) -> Vec<RankEntry>
where
    I: IntoIterator<Item = (&'a str, Metric)>,
{
    let mut ranked: Vec<RankEntry> = entries
        .into_iter()
        .filter_map(|(name, metric)| {
            metric.value().map(|value| RankEntry {
                name: String::from(name),
                value,
            })
        })
        .collect();
    // Stable sort, so ties break by original dataset order.
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(n);
    ranked
}

/// Returns the feature with the largest metric value, if any is valid.
///
/// Ties resolve to the earliest feature in dataset order.
pub fn max_by_metric<'a, I>(entries: I) -> Option<RankEntry>
where
    I: IntoIterator<Item = (&'a str, Metric)>,
{
    let mut best: Option<RankEntry> = None;
    for (name, metric) in entries {
        let Some(value) = metric.value() else {
            continue;
        };
        let replace = best.as_ref().is_none_or(|b| value > b.value);
        if replace {
            best = Some(RankEntry {
                name: String::from(name),
                value,
            });
        }
    }
    best
}
