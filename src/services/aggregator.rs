//! Aggregation of raw samples into a dense daily series

use crate::types::{DayKey, RawPoint, SeriesPoint};
use std::collections::HashMap;
use tracing::warn;

/// Aggregator for collapsing raw samples into per-day values
pub struct Aggregator;

impl Aggregator {
    /// Group samples by UTC calendar day, keeping the maximum value per day
    pub fn daily_max(points: &[RawPoint]) -> HashMap<DayKey, i64> {
        let mut daily: HashMap<DayKey, i64> = HashMap::new();

        for point in points {
            match DayKey::from_timestamp_millis(point.timestamp_ms) {
                Some(date) => {
                    let value = daily.entry(date).or_insert(point.value);
                    if point.value > *value {
                        *value = point.value;
                    }
                }
                None => warn!(
                    "Skipping sample with out-of-range timestamp {}",
                    point.timestamp_ms
                ),
            }
        }

        daily
    }

    /// Expand aggregated days into a dense, ascending series
    ///
    /// Covers every day from the earliest to the latest key inclusive; days
    /// without a value are filled with 0. An empty map yields an empty series.
    pub fn dense_series(daily: &HashMap<DayKey, i64>) -> Vec<SeriesPoint> {
        let (min, max) = daily
            .keys()
            .fold((DayKey::MAX, DayKey::MIN), |(lo, hi), &date| {
                (lo.min(date), hi.max(date))
            });
        // The seeds only survive an empty map
        if min > max {
            return Vec::new();
        }

        let len = (max.number() - min.number() + 1) as usize;
        let mut series = Vec::with_capacity(len);
        for offset in 0..len as i32 {
            // Offsets stay within [min, max], so every add succeeds
            if let Some(date) = min.add_days(offset) {
                let value = daily.get(&date).copied().unwrap_or(0);
                series.push(SeriesPoint { date, value });
            }
        }
        series
    }
}
