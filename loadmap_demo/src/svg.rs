// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `loadmap_demo`.
//!
//! This is a stand-in for a real rendering backend: it turns the layout and
//! legend descriptors into static SVG strings. Bars are drawn at their
//! transition *target* extents, since a static dump has no animation.

use loadmap_charts::{BarChartSpec, BarLayout, LegendBucket};
use peniko::Color;

/// Bar fill color for the ranked chart.
const BAR_FILL: Color = Color::from_rgb8(0x69, 0xb3, 0xa2);
/// Label font size for both dumps.
const FONT_SIZE: f64 = 11.0;

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn open_svg(out: &mut String, width: f64, height: f64) {
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
    ));
    out.push('\n');
}

/// Renders the ranked bar chart as an SVG string.
pub(crate) fn bar_chart_svg(spec: &BarChartSpec, bars: &[BarLayout]) -> String {
    let mut out = String::new();
    open_svg(&mut out, spec.width, spec.height);

    for bar in bars {
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            bar.x,
            bar.y,
            bar.width_to,
            bar.height,
            hex(BAR_FILL),
        ));
        out.push('\n');
        // Category label in the left margin, vertically centered on the band.
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{FONT_SIZE}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            bar.x - 6.0,
            bar.y + bar.height * 0.5,
            escape(&bar.name),
        ));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

/// Renders legend swatches and labels as an SVG string.
pub(crate) fn legend_svg(buckets: &[LegendBucket]) -> String {
    let swatch = 18.0;
    let gap = 6.0;
    let row = swatch + gap;
    let mut out = String::new();
    open_svg(&mut out, 160.0, row * buckets.len() as f64 + gap);

    for (i, bucket) in buckets.iter().enumerate() {
        let y = gap + row * i as f64;
        out.push_str(&format!(
            r#"<rect x="{gap}" y="{y}" width="{swatch}" height="{swatch}" fill="{}"/>"#,
            hex(bucket.color),
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{FONT_SIZE}" dominant-baseline="middle">{}</text>"#,
            gap + swatch + 8.0,
            y + swatch * 0.5,
            escape(&bucket.label),
        ));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
