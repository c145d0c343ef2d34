use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::entry::JournalEntry;

/// Width of the centered moving-average window, in days present in the series.
const MOVING_AVERAGE_WINDOW: usize = 3;

/// Mean mood for one calendar date. Doubles as a heatmap cell.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyMood {
    pub date: NaiveDate,
    pub mood: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyMoodPoint {
    pub date: NaiveDate,
    pub mood: f64,
    pub moving_average: f64,
}

/// Groups entries by their calendar date and averages the mood scores.
/// Only dates present in the input produce a point; output is ascending by date
/// regardless of input order.
pub fn daily_moods(entries: &[JournalEntry]) -> Vec<DailyMood> {
    let mut groups: BTreeMap<NaiveDate, (i64, usize)> = BTreeMap::new();
    for entry in entries {
        let (sum, count) = groups.entry(entry.date).or_insert((0, 0));
        *sum += i64::from(entry.mood_score);
        *count += 1;
    }

    groups
        .into_iter()
        .map(|(date, (sum, count))| DailyMood {
            date,
            mood: sum as f64 / count as f64,
        })
        .collect()
}

/// Adds a centered moving average to each daily point.
///
/// The window for index `i` is `[max(0, i - 1), min(len, start + 3))`: it is
/// truncated at the end of the series and never wraps.
pub fn mood_trend(daily: &[DailyMood]) -> Vec<DailyMoodPoint> {
    let len = daily.len();
    daily
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let start = i.saturating_sub(MOVING_AVERAGE_WINDOW / 2);
            let end = len.min(start + MOVING_AVERAGE_WINDOW);
            let window = &daily[start..end];
            let moving_average = window.iter().map(|p| p.mood).sum::<f64>() / window.len() as f64;
            DailyMoodPoint {
                date: point.date,
                mood: point.mood,
                moving_average,
            }
        })
        .collect()
}
