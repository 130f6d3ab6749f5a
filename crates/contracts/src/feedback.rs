use serde::{Deserialize, Serialize};

/// Review workflow state of a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    New,
    Reviewed,
    Resolved,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::New => "new",
            FeedbackStatus::Reviewed => "reviewed",
            FeedbackStatus::Resolved => "resolved",
        }
    }

    /// Next step in the review workflow; resolved is terminal.
    pub fn next(&self) -> Option<FeedbackStatus> {
        match self {
            FeedbackStatus::New => Some(FeedbackStatus::Reviewed),
            FeedbackStatus::Reviewed => Some(FeedbackStatus::Resolved),
            FeedbackStatus::Resolved => None,
        }
    }
}

/// Entry of `GET /api/feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub username: Option<String>,
    pub user_name: Option<String>,
    pub status: FeedbackStatus,
    pub message: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    #[serde(default)]
    pub feedback: Vec<Feedback>,
    #[serde(default)]
    pub total: u64,
}

/// Body of `POST /api/feedback/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFeedbackStatusRequest {
    pub status: FeedbackStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_order() {
        assert_eq!(FeedbackStatus::New.next(), Some(FeedbackStatus::Reviewed));
        assert_eq!(
            FeedbackStatus::Reviewed.next(),
            Some(FeedbackStatus::Resolved)
        );
        assert_eq!(FeedbackStatus::Resolved.next(), None);
    }

    #[test]
    fn wire_names_are_lowercase() {
        let json = serde_json::to_string(&FeedbackStatus::Reviewed).unwrap();
        assert_eq!(json, "\"reviewed\"");
    }
}
