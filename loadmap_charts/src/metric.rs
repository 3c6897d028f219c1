// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-feature metric derivation.
//!
//! Every downstream consumer (scales, rankings, styles) takes a [`Metric`]
//! rather than a bare `f64`, so an undefined ratio (zero population, missing
//! attribute) is handled explicitly instead of flowing into a scale domain as
//! `NaN`.

/// Why a metric could not be derived for a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMetric {
    /// The divisor attribute (population) is zero or negative.
    NonPositivePopulation,
    /// A required numeric attribute is missing from the feature.
    MissingAttribute,
    /// The computation produced a non-finite value.
    NonFinite,
}

/// A derived per-feature metric: either a finite value or an explicit
/// invalid marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metric {
    /// A finite derived value.
    Valid(f64),
    /// The metric is undefined for this feature.
    Invalid(InvalidMetric),
}

impl Metric {
    /// Returns the derived value, or `None` if the metric is invalid.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Valid(v) => Some(*v),
            Self::Invalid(_) => None,
        }
    }

    /// Returns `true` if the metric carries a finite value.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Derives the per-capita load ratio for a region:
/// `avg_daily_traffic / population * 10_000`.
///
/// A missing attribute, a zero or negative population, or a non-finite result
/// yields [`Metric::Invalid`]; the value is never coerced to zero or a
/// default.
pub fn per_capita_ratio(avg_daily_traffic: Option<f64>, population: Option<f64>) -> Metric {
    let (Some(traffic), Some(population)) = (avg_daily_traffic, population) else {
        return Metric::Invalid(InvalidMetric::MissingAttribute);
    };
    if !population.is_finite() || population <= 0.0 {
        return Metric::Invalid(InvalidMetric::NonPositivePopulation);
    }
    let ratio = traffic / population * 10_000.0;
    if ratio.is_finite() {
        Metric::Valid(ratio)
    } else {
        Metric::Invalid(InvalidMetric::NonFinite)
    }
}

/// Derives the raw load metric: the average daily traffic as-is.
///
/// This is the network segment metric, and also what absolute-load
/// comparisons between regions rank on.
pub fn raw_load(avg_daily_traffic: Option<f64>) -> Metric {
    match avg_daily_traffic {
        Some(v) if v.is_finite() => Metric::Valid(v),
        Some(_) => Metric::Invalid(InvalidMetric::NonFinite),
        None => Metric::Invalid(InvalidMetric::MissingAttribute),
    }
}
