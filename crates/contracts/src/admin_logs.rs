use serde::{Deserialize, Serialize};

/// Entry of `GET /api/admin-logs` — an audit record of an admin action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLogEntry {
    pub admin_user_id: i64,
    pub admin_username: Option<String>,
    pub admin_name: Option<String>,
    /// Machine name like "grant_premium" or "update_feedback".
    pub action: String,
    pub target_user_id: Option<i64>,
    pub target_username: Option<String>,
    pub target_name: Option<String>,
    /// Free-form object with action-specific fields.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLogsResponse {
    #[serde(default)]
    pub logs: Vec<AdminLogEntry>,
}
