use crate::shared::api::{get_json, ApiError};
use contracts::stats::{BotStats, DailyStatsResponse, LanguageStats, PerformanceStats};

/// Overall counters for the header cards.
pub async fn fetch_stats() -> Result<BotStats, ApiError> {
    get_json("/api/stats/").await
}

/// Per-day activity for the last `days` days.
pub async fn fetch_daily(days: u32) -> Result<DailyStatsResponse, ApiError> {
    get_json(&format!("/api/stats/daily?days={}", days)).await
}

/// Top source/target languages.
pub async fn fetch_languages() -> Result<LanguageStats, ApiError> {
    get_json("/api/stats/languages").await
}

/// Processing times, success rate and recent errors.
pub async fn fetch_performance() -> Result<PerformanceStats, ApiError> {
    get_json("/api/stats/performance").await
}
