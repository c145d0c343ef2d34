use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::entry::NewJournalEntry;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub user_id: Uuid,
    pub mood_score: i32,
    pub primary_emotion: Option<String>,
    #[serde(default)]
    pub secondary_emotions: Vec<String>,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub energy_level: Option<i32>,
    pub stress_level: Option<i32>,
    pub sleep_quality: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub steps: Option<i32>,
    pub date: NaiveDate,
}

/// Checks ranges and folds primary + secondary emotions into one ordered list.
pub fn validate_entry(req: CreateEntryRequest) -> Result<NewJournalEntry, AppError> {
    check_scale("moodScore", Some(req.mood_score))?;
    check_scale("energyLevel", req.energy_level)?;
    check_scale("stressLevel", req.stress_level)?;
    check_scale("sleepQuality", req.sleep_quality)?;

    if req.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    if let Some(hours) = req.sleep_hours {
        if !(0.0..=24.0).contains(&hours) {
            return Err(AppError::Validation(
                "sleepHours must be between 0 and 24".to_string(),
            ));
        }
    }
    if matches!(req.steps, Some(s) if s < 0) {
        return Err(AppError::Validation("steps cannot be negative".to_string()));
    }

    let emotions = req
        .primary_emotion
        .into_iter()
        .chain(req.secondary_emotions)
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect();

    Ok(NewJournalEntry {
        user_id: req.user_id,
        date: req.date,
        mood_score: req.mood_score,
        emotions,
        text: req.text,
        tags: req.tags,
        energy_level: req.energy_level,
        stress_level: req.stress_level,
        sleep_quality: req.sleep_quality,
        sleep_hours: req.sleep_hours,
        steps: req.steps,
    })
}

fn check_scale(field: &str, value: Option<i32>) -> Result<(), AppError> {
    match value {
        Some(v) if !(1..=10).contains(&v) => Err(AppError::Validation(format!(
            "{field} must be between 1 and 10"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateEntryRequest {
        CreateEntryRequest {
            user_id: Uuid::nil(),
            mood_score: 7,
            primary_emotion: Some("Joy".to_string()),
            secondary_emotions: vec!["Grateful".to_string(), " ".to_string()],
            text: "Good walk by the river".to_string(),
            tags: vec!["outdoors".to_string()],
            energy_level: Some(6),
            stress_level: None,
            sleep_quality: Some(8),
            sleep_hours: Some(7.5),
            steps: Some(9000),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    fn rejected(req: CreateEntryRequest) -> String {
        match validate_entry(req) {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request_orders_emotions() {
        let entry = validate_entry(request()).unwrap();
        assert_eq!(entry.emotions, vec!["Joy", "Grateful"]);
        assert_eq!(entry.mood_score, 7);
    }

    #[test]
    fn test_secondary_only() {
        let mut req = request();
        req.primary_emotion = None;
        let entry = validate_entry(req).unwrap();
        assert_eq!(entry.emotions, vec!["Grateful"]);
    }

    #[test]
    fn test_mood_out_of_range() {
        let mut req = request();
        req.mood_score = 11;
        assert!(rejected(req).contains("moodScore"));

        let mut req = request();
        req.mood_score = 0;
        assert!(rejected(req).contains("moodScore"));
    }

    #[test]
    fn test_blank_text() {
        let mut req = request();
        req.text = "   ".to_string();
        assert!(rejected(req).contains("text"));
    }

    #[test]
    fn test_optional_scales_and_sleep() {
        let mut req = request();
        req.stress_level = Some(12);
        assert!(rejected(req).contains("stressLevel"));

        let mut req = request();
        req.sleep_hours = Some(25.0);
        assert!(rejected(req).contains("sleepHours"));

        let mut req = request();
        req.steps = Some(-1);
        assert!(rejected(req).contains("steps"));
    }

    #[test]
    fn test_deserializes_camel_case_with_defaults() {
        let req: CreateEntryRequest = serde_json::from_value(serde_json::json!({
            "userId": Uuid::nil(),
            "moodScore": 5,
            "text": "ok",
            "date": "2024-05-01"
        }))
        .unwrap();
        assert!(req.secondary_emotions.is_empty());
        assert!(req.tags.is_empty());
        assert!(validate_entry(req).unwrap().emotions.is_empty());
    }
}
