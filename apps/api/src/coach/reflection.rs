use rand::seq::SliceRandom;
use rand::Rng;

const LOW_AFFIRMATIONS: &[&str] = &[
    "You are stronger than you know, and this difficult moment will pass.",
    "Your feelings are valid, and you deserve compassion, especially from yourself.",
    "Every small step forward is progress worth celebrating.",
    "You have come through hard times before, and you can get through this one too.",
];

const MEDIUM_AFFIRMATIONS: &[&str] = &[
    "You are exactly where you need to be on your path of growth.",
    "Noticing your emotions is a sign of real self-awareness.",
    "You get to choose how you respond to what today brings.",
    "Showing up for yourself each day takes courage.",
];

const HIGH_AFFIRMATIONS: &[&str] = &[
    "Your positive energy is a gift to you and the people around you.",
    "You are building a life full of meaning and joy.",
    "Your resilience and optimism keep carrying you forward.",
    "You have what it takes to turn your hopes into reality.",
];

pub const DEFAULT_INSIGHT: &str =
    "Every emotion you experience is valuable information about your inner world and needs.";

/// Picks an affirmation from the band matching `mood` (≤4 low, ≥7 high, else medium).
pub fn affirmation<R: Rng + ?Sized>(mood: i32, rng: &mut R) -> &'static str {
    let band = if mood <= 4 {
        LOW_AFFIRMATIONS
    } else if mood >= 7 {
        HIGH_AFFIRMATIONS
    } else {
        MEDIUM_AFFIRMATIONS
    };
    band.choose(rng).copied().unwrap_or(DEFAULT_INSIGHT)
}

/// Candidate observations about a chronological mood series and its emotions.
pub fn insight_candidates(moods: &[i32], emotions: &[String]) -> Vec<&'static str> {
    let mut candidates = Vec::new();
    if moods.is_empty() {
        return candidates;
    }

    let avg = moods.iter().map(|&m| f64::from(m)).sum::<f64>() / moods.len() as f64;
    if avg >= 7.0 {
        candidates.push("You've been keeping a positive mood lately, and that's wonderful!");
    } else if avg <= 4.0 {
        candidates.push(
            "It looks like you've been going through a challenging time. Reaching out for support is a sign of strength.",
        );
    }

    let trend = match (moods.first(), moods.last()) {
        (Some(first), Some(last)) if moods.len() > 1 => last - first,
        _ => 0,
    };
    if trend > 1 {
        candidates.push(
            "Your mood has been trending upward, which shows your resilience and the positive steps you're taking.",
        );
    } else if trend < -1 {
        candidates.push(
            "Your mood has been dipping. This could be a good moment to focus on self-care and think about what support you need.",
        );
    }

    let has = |label: &str| emotions.iter().any(|e| e == label);
    if has("Anxious") || has("Fear") {
        candidates.push(
            "Anxiety has been showing up often. It usually tries to protect us, even when it feels uncomfortable.",
        );
    }
    if has("Grateful") || has("Joy") {
        candidates.push(
            "Gratitude and joy appear in your entries. Those feelings can be strong anchors on harder days.",
        );
    }

    candidates
}

pub fn insight<R: Rng + ?Sized>(moods: &[i32], emotions: &[String], rng: &mut R) -> &'static str {
    insight_candidates(moods, emotions)
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT_INSIGHT)
}
