use crate::shared::api::{get_json, post_empty, post_json, ApiError};
use contracts::users::{ActionResponse, HistoryResponse, SendMessageRequest, UsersPage};

/// Query path for the paged user list.
pub fn users_query(page: u32, per_page: u32, search: &str, premium_only: bool) -> String {
    let mut path = format!("/api/users/?page={}&per_page={}", page, per_page);
    if !search.is_empty() {
        path.push_str(&format!("&search={}", urlencoding::encode(search)));
    }
    if premium_only {
        path.push_str("&premium_only=true");
    }
    path
}

pub async fn fetch_users(
    page: u32,
    per_page: u32,
    search: &str,
    premium_only: bool,
) -> Result<UsersPage, ApiError> {
    get_json(&users_query(page, per_page, search, premium_only)).await
}

pub async fn fetch_history(user_id: i64, limit: u32) -> Result<HistoryResponse, ApiError> {
    get_json(&format!("/api/users/{}/history?limit={}", user_id, limit)).await
}

pub async fn grant_premium(user_id: i64) -> Result<ActionResponse, ApiError> {
    post_empty(&format!("/api/users/{}/premium", user_id)).await
}

pub async fn block_user(user_id: i64) -> Result<ActionResponse, ApiError> {
    post_empty(&format!("/api/users/{}/block", user_id)).await
}

pub async fn unblock_user(user_id: i64) -> Result<ActionResponse, ApiError> {
    post_empty(&format!("/api/users/{}/unblock", user_id)).await
}

pub async fn send_message(user_id: i64, message: String) -> Result<ActionResponse, ApiError> {
    post_json(
        &format!("/api/users/{}/send-message", user_id),
        &SendMessageRequest { message },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_without_filters() {
        assert_eq!(
            users_query(1, 20, "", false),
            "/api/users/?page=1&per_page=20"
        );
    }

    #[test]
    fn query_encodes_search_term() {
        assert_eq!(
            users_query(2, 20, "иван и", false),
            "/api/users/?page=2&per_page=20&search=%D0%B8%D0%B2%D0%B0%D0%BD%20%D0%B8"
        );
    }

    #[test]
    fn query_with_premium_filter() {
        assert_eq!(
            users_query(1, 20, "", true),
            "/api/users/?page=1&per_page=20&premium_only=true"
        );
    }
}
