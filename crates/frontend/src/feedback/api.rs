use crate::shared::api::{get_json, post_json, ApiError};
use contracts::feedback::{FeedbackResponse, FeedbackStatus, UpdateFeedbackStatusRequest};

/// Query path for the feedback list; `status` is "" or a workflow state.
pub fn feedback_query(limit: u32, status: &str) -> String {
    let mut path = format!("/api/feedback?limit={}", limit);
    if !status.is_empty() {
        path.push_str(&format!("&status={}", status));
    }
    path
}

pub async fn fetch_feedback(status: &str) -> Result<FeedbackResponse, ApiError> {
    get_json(&feedback_query(100, status)).await
}

pub async fn update_status(
    feedback_id: i64,
    status: FeedbackStatus,
) -> Result<serde_json::Value, ApiError> {
    post_json(
        &format!("/api/feedback/{}/status", feedback_id),
        &UpdateFeedbackStatusRequest { status },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_with_and_without_status() {
        assert_eq!(feedback_query(100, ""), "/api/feedback?limit=100");
        assert_eq!(
            feedback_query(100, "new"),
            "/api/feedback?limit=100&status=new"
        );
    }
}
