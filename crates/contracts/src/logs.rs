use serde::{Deserialize, Serialize};

/// Entry of `GET /api/logs/translations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationLog {
    pub username: Option<String>,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    #[serde(default)]
    pub is_voice: bool,
    pub source_text: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationLogsResponse {
    #[serde(default)]
    pub logs: Vec<TranslationLog>,
}
