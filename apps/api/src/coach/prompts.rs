use serde::Deserialize;

use crate::analytics::emotions::emotion_frequency;
use crate::models::entry::JournalEntry;

/// Number of prior chat messages included as conversation context.
pub const HISTORY_WINDOW: usize = 5;
const CONTEXT_EMOTIONS: usize = 3;

pub const COACH_SYSTEM_PROMPT: &str = "\
You are Pulse Coach, a warm and empathetic companion inside a mood-journaling app. \
You offer emotional support, active listening and gentle guidance.

APPROACH:
- Be warm, non-judgmental and validating; acknowledge feelings before anything else
- Offer gentle reframing and at most one small, practical coping step
- Ask a thoughtful follow-up question to encourage reflection
- Keep replies conversational, usually 2-4 sentences and never more than 180 words
- Avoid clinical language

SAFETY:
- If the user mentions self-harm, suicidal thoughts or severe distress, take it seriously, \
express care, and encourage contacting a crisis line or emergency services right away
- You are not a therapist: never diagnose or give medical advice, and suggest professional \
help for persistent or severe struggles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Summary of the user's recent journal used to personalise the system prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachingContext {
    pub recent_moods: Vec<i32>,
    pub common_emotions: Vec<String>,
    pub stress_level: Option<f64>,
    pub sleep_quality: Option<f64>,
}

impl CoachingContext {
    /// `None` when there are no entries to summarise.
    pub fn from_entries(entries: &[JournalEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            recent_moods: entries.iter().map(|e| e.mood_score).collect(),
            common_emotions: emotion_frequency(entries)
                .into_iter()
                .take(CONTEXT_EMOTIONS)
                .map(|f| f.emotion)
                .collect(),
            stress_level: mean(entries.iter().filter_map(|e| e.stress_level)),
            sleep_quality: mean(entries.iter().filter_map(|e| e.sleep_quality)),
        })
    }
}

fn mean(values: impl Iterator<Item = i32>) -> Option<f64> {
    let (sum, count) = values.fold((0i64, 0usize), |(s, c), v| (s + i64::from(v), c + 1));
    (count > 0).then(|| sum as f64 / count as f64)
}

fn fmt_score(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.1}"))
}

pub fn build_system_prompt(context: Option<&CoachingContext>) -> String {
    let mut prompt = COACH_SYSTEM_PROMPT.to_string();
    if let Some(ctx) = context {
        let mood_avg = mean(ctx.recent_moods.iter().copied());
        let emotions = if ctx.common_emotions.is_empty() {
            "N/A".to_string()
        } else {
            ctx.common_emotions.join(", ")
        };
        prompt.push_str(&format!(
            "\n\nUSER CONTEXT:\n\
             - Recent mood average: {}/10\n\
             - Common emotions: {}\n\
             - Stress level: {}/10\n\
             - Sleep quality: {}/10\n\n\
             Use this context to personalise your support, but don't quote these numbers unless relevant.",
            fmt_score(mood_avg),
            emotions,
            fmt_score(ctx.stress_level),
            fmt_score(ctx.sleep_quality),
        ));
    }
    prompt
}

/// Renders the latest history messages followed by the current message.
pub fn build_prompt(message: &str, history: &[ChatMessage]) -> String {
    let recent = &history[history.len().saturating_sub(HISTORY_WINDOW)..];
    if recent.is_empty() {
        return format!("User message: {message}\n\nPlease respond as Pulse Coach:");
    }

    let transcript = recent
        .iter()
        .map(|m| {
            let speaker = match m.role {
                ChatRole::User => "User",
                ChatRole::Assistant => "Assistant",
            };
            format!("{speaker}: {}", m.content)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Previous conversation context:\n{transcript}\n\nCurrent user message: {message}\n\nPlease respond as Pulse Coach:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::fixtures::entry;

    fn msg(role: ChatRole, content: &str) -> ChatMessage {
        ChatMessage {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_prompt_without_history() {
        assert_eq!(
            build_prompt("I slept badly", &[]),
            "User message: I slept badly\n\nPlease respond as Pulse Coach:"
        );
    }

    #[test]
    fn test_prompt_keeps_last_five_messages() {
        let history: Vec<_> = (0..7)
            .map(|i| {
                let role = if i % 2 == 0 { ChatRole::User } else { ChatRole::Assistant };
                msg(role, &format!("m{i}"))
            })
            .collect();
        let prompt = build_prompt("now", &history);
        assert!(!prompt.contains("m1"));
        assert!(prompt.contains("User: m2\nAssistant: m3\nUser: m4\nAssistant: m5\nUser: m6"));
        assert!(prompt.contains("Current user message: now"));
    }

    #[test]
    fn test_system_prompt_without_context() {
        assert_eq!(build_system_prompt(None), COACH_SYSTEM_PROMPT);
    }

    #[test]
    fn test_context_from_entries() {
        let mut a = entry("2024-01-01", 4, &["Anxious", "Tired"]);
        a.stress_level = Some(8);
        let mut b = entry("2024-01-02", 6, &["Anxious"]);
        b.stress_level = Some(6);
        let ctx = CoachingContext::from_entries(&[a, b]).unwrap();
        assert_eq!(ctx.recent_moods, vec![4, 6]);
        assert_eq!(ctx.common_emotions, vec!["Anxious", "Tired"]);
        assert_eq!(ctx.stress_level, Some(7.0));
        assert_eq!(ctx.sleep_quality, None);

        let prompt = build_system_prompt(Some(&ctx));
        assert!(prompt.contains("Recent mood average: 5.0/10"));
        assert!(prompt.contains("Common emotions: Anxious, Tired"));
        assert!(prompt.contains("Stress level: 7.0/10"));
        assert!(prompt.contains("Sleep quality: N/A/10"));
    }

    #[test]
    fn test_no_context_without_entries() {
        assert!(CoachingContext::from_entries(&[]).is_none());
    }

    #[test]
    fn test_roles_deserialize_lowercase() {
        let m: ChatMessage =
            serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
        assert_eq!(m.role, ChatRole::Assistant);
    }
}
