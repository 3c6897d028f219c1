// Copyright 2025 the Loadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display formatting for tooltips.
//!
//! Derived values are rendered rounded to zero decimal places; the underlying
//! metrics stay full precision.

use alloc::format;
use alloc::string::String;

/// Formats a raw count (e.g. a segment's daily traffic) for display.
pub fn format_count(value: f64) -> String {
    format!("{value:.0}")
}

/// Formats a region tooltip line: name plus the per-capita ratio.
pub fn format_ratio_tooltip(name: &str, ratio: f64) -> String {
    format!("{name}: {ratio:.0} passengers / 10,000 inhabitants")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn values_render_with_zero_decimals() {
        assert_eq!(format_count(161_234.4), "161234");
        assert_eq!(format_count(0.6), "1");
        assert_eq!(
            format_ratio_tooltip("Bern", 1033.7),
            "Bern: 1034 passengers / 10,000 inhabitants"
        );
    }
}
