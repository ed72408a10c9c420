// Series builder - Raw records to base conversion-rate series
use crate::domain::record::RawRecord;
use crate::domain::series::{Series, SeriesSet};
use crate::domain::variation::VariationCatalog;
use chrono::{DateTime, NaiveDate};
use std::fmt::Write;

/// Build one series per catalog variation, in catalog order.
///
/// Records are taken in the order given; the caller guarantees they are
/// chronological. Variation ids missing from the catalog are ignored, and a
/// catalog variation a record does not mention scores zero for that day.
pub fn build_series(records: &[RawRecord], catalog: &VariationCatalog, label_format: &str) -> SeriesSet {
    let labels = records
        .iter()
        .map(|r| format_date_label(&r.date, label_format))
        .collect();

    let series = catalog
        .iter()
        .enumerate()
        .map(|(slot, variation)| {
            let points = records
                .iter()
                .map(|r| conversion_rate(r.visits_for(variation.id), r.conversions_for(variation.id)))
                .collect();
            Series::new(variation.name.clone(), slot, points)
        })
        .collect();

    SeriesSet::new(labels, series)
}

/// Percentage of visits that converted, one decimal place. Zero visits yields zero.
pub fn conversion_rate(visits: u64, conversions: u64) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    let rate = conversions as f64 / visits as f64 * 100.0;
    round_to_tenth(rate)
}

/// Nearest tenth of the exact binary value, ties away from zero.
///
/// A tie needs `value` to be a multiple of 0.25, where `value * 10` is exact;
/// every other value goes through fixed-precision formatting, which rounds
/// the exact expansion rather than a pre-scaled product.
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if (value * 4.0).fract() == 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Falls back to the raw string when the date or the pattern does not parse.
pub fn format_date_label(raw: &str, label_format: &str) -> String {
    let Some(date) = parse_date(raw) else {
        return raw.to_string();
    };

    let mut label = String::new();
    match write!(label, "{}", date.format(label_format)) {
        Ok(()) => label,
        Err(_) => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
