use serde::Serialize;

use crate::analytics::emotions::{emotion_frequency, EmotionFrequency};
use crate::analytics::range::AnalyticsRange;
use crate::analytics::summary::{summarize, weekly_insights, SummaryStats};
use crate::analytics::trend::{daily_moods, mood_trend, DailyMood, DailyMoodPoint};
use crate::models::entry::JournalEntry;

/// Everything the insights dashboard renders for one range.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub range: AnalyticsRange,
    pub mood_trend: Vec<DailyMoodPoint>,
    pub emotion_frequency: Vec<EmotionFrequency>,
    pub heatmap_data: Vec<DailyMood>,
    pub stats: SummaryStats,
    pub weekly_insights: Vec<String>,
}

/// Builds the full aggregate for a range-filtered entry window.
///
/// `streak` is computed separately over the full history and passed in.
pub fn build_report(
    entries: &[JournalEntry],
    range: AnalyticsRange,
    streak: u32,
) -> AnalyticsReport {
    let mut ordered = entries.to_vec();
    ordered.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));

    let daily = daily_moods(&ordered);
    let trend = mood_trend(&daily);
    let emotions = emotion_frequency(&ordered);
    let stats = summarize(&ordered, streak);
    let insights = weekly_insights(range, &stats, &emotions);

    AnalyticsReport {
        range,
        mood_trend: trend,
        emotion_frequency: emotions,
        heatmap_data: daily,
        stats,
        weekly_insights: insights,
    }
}
