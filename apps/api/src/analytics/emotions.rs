use std::collections::HashMap;

use serde::Serialize;

use crate::models::entry::JournalEntry;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmotionFrequency {
    pub emotion: String,
    /// Number of entries listing this emotion (repeats within one entry count twice).
    pub count: u32,
    /// `count / total entries * 100`; can exceed 100 in sum across emotions.
    pub percentage: f64,
}

/// Counts emotion labels across entries, sorted by count descending.
/// Ties keep first-encountered order.
pub fn emotion_frequency(entries: &[JournalEntry]) -> Vec<EmotionFrequency> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u32)> = Vec::new();

    for emotion in entries.iter().flat_map(|e| e.emotions.iter()) {
        match index.get(emotion.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(emotion.as_str(), counts.len());
                counts.push((emotion.as_str(), 1));
            }
        }
    }

    let total = entries.len();
    let mut frequencies: Vec<EmotionFrequency> = counts
        .into_iter()
        .map(|(emotion, count)| EmotionFrequency {
            emotion: emotion.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect();

    // sort_by is stable
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

fn percentage(count: u32, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(count) / total as f64 * 100.0
}
