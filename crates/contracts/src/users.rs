use serde::{Deserialize, Serialize};

/// Bot user as listed by `GET /api/users/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub total_translations: u64,
    pub created_at: Option<String>,
}

impl User {
    /// Name the panel shows: display name, else username, else "User".
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref())
            .or_else(|| non_empty(self.username.as_deref()))
            .unwrap_or("User")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty() && *s != "N/A")
}

/// One page of the user list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersPage {
    #[serde(default)]
    pub users: Vec<User>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

/// Entry of `GET /api/users/{id}/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    #[serde(default)]
    pub is_voice: bool,
    pub source_text: Option<String>,
    pub translation: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryItem>,
}

/// Body of `POST /api/users/{id}/send-message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// `{ success, message }` acknowledgement returned by user actions
/// (premium, block, unblock, send-message).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>, username: Option<&str>) -> User {
        User {
            id: 1,
            name: name.map(str::to_string),
            username: username.map(str::to_string),
            is_premium: false,
            is_blocked: false,
            total_translations: 0,
            created_at: None,
        }
    }

    #[test]
    fn display_name_prefers_name() {
        assert_eq!(user(Some("Alice"), Some("alice42")).display_name(), "Alice");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        assert_eq!(user(None, Some("alice42")).display_name(), "alice42");
        assert_eq!(user(Some(""), Some("alice42")).display_name(), "alice42");
        assert_eq!(user(Some("N/A"), Some("alice42")).display_name(), "alice42");
    }

    #[test]
    fn display_name_last_resort() {
        assert_eq!(user(None, None).display_name(), "User");
    }
}
