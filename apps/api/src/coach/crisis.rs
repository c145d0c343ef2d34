/// Phrases that trigger the crisis-support message. Matched case-insensitively as substrings.
const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "hopeless",
    "can't go on",
    "worthless",
    "better off dead",
    "want to die",
    "no point",
    "give up",
];

pub const CRISIS_SUPPORT_MESSAGE: &str = "It sounds like you're carrying something really heavy right now, \
    and I'm glad you reached out. You deserve support from a real person: if you are in immediate danger, \
    please call your local emergency number. You can also call or text 988 (Suicide & Crisis Lifeline, US) \
    or find a local helpline at https://findahelpline.com. I'm here to keep talking with you too.";

pub fn detect_crisis(text: &str) -> bool {
    let lower = text.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|k| lower.contains(k))
}
