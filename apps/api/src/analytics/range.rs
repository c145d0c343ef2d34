use serde::Serialize;

/// Lookback window selecting which entries feed the aggregators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsRange {
    Week,
    Month,
    Quarter,
}

impl AnalyticsRange {
    /// `week` → 7 days, `month`, empty or absent → 30 days, anything else → 90 days.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.filter(|p| !p.is_empty()) {
            Some("week") => AnalyticsRange::Week,
            Some("month") | None => AnalyticsRange::Month,
            Some(_) => AnalyticsRange::Quarter,
        }
    }

    pub fn days(self) -> i64 {
        match self {
            AnalyticsRange::Week => 7,
            AnalyticsRange::Month => 30,
            AnalyticsRange::Quarter => 90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalyticsRange::Week => "week",
            AnalyticsRange::Month => "month",
            AnalyticsRange::Quarter => "quarter",
        }
    }
}
