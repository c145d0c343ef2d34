use serde::Serialize;

use crate::analytics::emotions::EmotionFrequency;
use crate::analytics::range::AnalyticsRange;
use crate::models::entry::JournalEntry;

/// Entries per comparison block for mood improvement. Counts entries, not days.
const IMPROVEMENT_BLOCK: usize = 7;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub average_mood: f64,
    pub total_entries: usize,
    pub streak: u32,
    pub mood_improvement: f64,
}

/// Summary statistics for a date-ordered entry window.
pub fn summarize(entries: &[JournalEntry], streak: u32) -> SummaryStats {
    SummaryStats {
        average_mood: mean_score(entries),
        total_entries: entries.len(),
        streak,
        mood_improvement: mood_improvement(entries),
    }
}

/// Percentage change between the mean of the last 7 entries and the 7 before them.
/// Zero when the earlier block is empty.
pub fn mood_improvement(entries: &[JournalEntry]) -> f64 {
    let len = entries.len();
    let recent = &entries[len.saturating_sub(IMPROVEMENT_BLOCK)..];
    let older = &entries
        [len.saturating_sub(2 * IMPROVEMENT_BLOCK)..len.saturating_sub(IMPROVEMENT_BLOCK)];

    let recent_avg = mean_score(recent);
    let older_avg = mean_score(older);
    if older_avg > 0.0 {
        (recent_avg - older_avg) / older_avg * 100.0
    } else {
        0.0
    }
}

fn mean_score(entries: &[JournalEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: i64 = entries.iter().map(|e| i64::from(e.mood_score)).sum();
    total as f64 / entries.len() as f64
}

/// Templated sentences for the insights panel.
pub fn weekly_insights(
    range: AnalyticsRange,
    stats: &SummaryStats,
    emotions: &[EmotionFrequency],
) -> Vec<String> {
    let top_emotion = emotions.first().map(|f| f.emotion.as_str()).unwrap_or("joy");

    let mut insights = vec![
        format!(
            "Your average mood this {} was {:.1}/10",
            range.label(),
            stats.average_mood
        ),
        format!(
            "You logged {} mood entries, showing great consistency!",
            stats.total_entries
        ),
        format!("{top_emotion} was your most frequent emotion"),
    ];

    if stats.mood_improvement > 0.0 {
        insights.push(format!(
            "Your mood improved by {:.1}% compared to last week",
            stats.mood_improvement
        ));
    }

    insights
}
