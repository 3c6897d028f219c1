// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end pipeline demo.
//!
//! Loads the two traffic datasets, derives metrics, builds the scales over
//! the full datasets, and dumps the ranked bar chart and choropleth legend
//! as SVG files. The map rendering itself is left to an external backend;
//! this binary exercises everything up to the style/legend/layout outputs.

mod svg;

use std::path::Path;

use anyhow::{Context, Result, bail};
use loadmap_charts::{
    BarChartSpec, ChartMargins, ColorRamp, RegionEncoding, ScaleSqrt, SegmentEncoding,
    SequentialScale, color_legend, format_count, format_ratio_tooltip, infer_domain,
    max_by_metric, per_capita_ratio, raw_load, top_by_metric,
};
use loadmap_geo::{AppConfig, Region, Segment};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| String::from("config.toml"));
    let config = AppConfig::load_from_file(Path::new(&config_path))
        .with_context(|| format!("loading {config_path}"))?;

    // Join barrier: both fetches must succeed before anything downstream runs.
    let (regions, segments) =
        loadmap_geo::load_datasets(&config.input.regions, &config.input.network)
            .await
            .context("loading source datasets")?;

    run_pipeline(&config, &regions, &segments)
}

fn run_pipeline(config: &AppConfig, regions: &[Region], segments: &[Segment]) -> Result<()> {
    // Region with the largest absolute load, straight from the raw attribute.
    if let Some(max) = max_by_metric(
        regions
            .iter()
            .map(|r| (r.name.as_str(), raw_load(r.avg_daily_traffic))),
    ) {
        info!(region = %max.name, load = %format_count(max.value), "largest absolute load");
    }

    // Per-capita ratios over the full region dataset.
    let ratios: Vec<_> = regions
        .iter()
        .map(|r| per_capita_ratio(r.avg_daily_traffic, r.population))
        .collect();
    let Some(ratio_domain) = infer_domain(&ratios) else {
        bail!("no region has a valid per-capita ratio; nothing to encode");
    };
    let region_encoding = RegionEncoding {
        color: SequentialScale::new(ratio_domain, ColorRamp::blues()),
    };

    for (region, ratio) in regions.iter().zip(&ratios) {
        if let Some(value) = ratio.value() {
            println!("{}", format_ratio_tooltip(&region.name, value));
        }
    }

    // Network line encoding: color and width over [0, max load].
    let loads: Vec<_> = segments
        .iter()
        .map(|s| raw_load(s.avg_daily_traffic))
        .collect();
    let Some((_, load_max)) = infer_domain(&loads) else {
        bail!("no network segment has a valid load; nothing to encode");
    };
    let segment_encoding = SegmentEncoding {
        color: SequentialScale::new((0.0, load_max), ColorRamp::yl_or_rd()),
        width: ScaleSqrt::new((0.0, load_max), (1.0, 8.0)),
    };
    let styled_segments = loads
        .iter()
        .filter(|m| segment_encoding.style(**m).is_some())
        .count();
    info!(
        styled = styled_segments,
        total = segments.len(),
        "network segments styled"
    );

    // Legend for the choropleth scale.
    let legend = color_legend(&region_encoding.color, config.legend_buckets);
    std::fs::write("legend.svg", svg::legend_svg(&legend)).context("writing legend.svg")?;

    // Ranked bar chart of the highest per-capita ratios.
    let ranking = top_by_metric(
        regions
            .iter()
            .zip(&ratios)
            .map(|(r, m)| (r.name.as_str(), *m)),
        config.top_n,
    );
    let chart = BarChartSpec::new(config.chart.width, config.chart.height).with_margins(
        ChartMargins {
            top: config.chart.margin_top,
            right: config.chart.margin_right,
            bottom: config.chart.margin_bottom,
            left: config.chart.margin_left,
        },
    );
    let bars = chart.arrange(&ranking);
    std::fs::write("bar_chart.svg", svg::bar_chart_svg(&chart, &bars))
        .context("writing bar_chart.svg")?;

    info!(
        buckets = legend.len(),
        bars = bars.len(),
        "wrote legend.svg and bar_chart.svg"
    );
    Ok(())
}
