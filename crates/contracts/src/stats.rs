use serde::{Deserialize, Serialize};

/// Overall counters for the dashboard header cards (`GET /api/stats/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotStats {
    pub total_users: u64,
    pub premium_users: u64,
    pub active_today: u64,
    pub translations_today: u64,
}

/// One day of activity (`GET /api/stats/daily?days=N`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStat {
    /// "YYYY-MM-DD"
    pub date: String,
    pub translations: u64,
    pub users: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStatsResponse {
    #[serde(default)]
    pub stats: Vec<DailyStat>,
}

/// Language usage counter; `lang` is an ISO code or "auto".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LangCount {
    pub lang: String,
    pub count: u64,
}

/// `GET /api/stats/languages` — top source/target languages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageStats {
    #[serde(default)]
    pub source_languages: Vec<LangCount>,
    #[serde(default)]
    pub target_languages: Vec<LangCount>,
}

/// Average processing durations in milliseconds. `None` when the backend
/// has no samples for the bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingTimes {
    pub overall: Option<f64>,
    pub voice: Option<f64>,
    pub text: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDay {
    pub date: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayPerformance {
    pub average_time: Option<f64>,
    pub total: u64,
    pub success_rate: f64,
}

/// `GET /api/stats/performance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub average_processing_time: ProcessingTimes,
    pub success_rate: f64,
    pub total_translations: u64,
    pub successful_translations: u64,
    #[serde(default)]
    pub errors_by_day: Vec<ErrorDay>,
    /// Sent by the backend but not shown in the panel.
    pub today: Option<TodayPerformance>,
}
