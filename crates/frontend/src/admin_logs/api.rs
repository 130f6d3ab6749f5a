use crate::shared::api::{get_json, ApiError};
use contracts::admin_logs::AdminLogsResponse;

/// Query path for the admin audit log; both filters are optional.
pub fn admin_logs_query(limit: u32, admin_user_id: &str, action: &str) -> String {
    let mut path = format!("/api/admin-logs?limit={}", limit);
    if !admin_user_id.is_empty() {
        path.push_str(&format!("&admin_user_id={}", admin_user_id));
    }
    if !action.is_empty() {
        path.push_str(&format!("&action={}", action));
    }
    path
}

pub async fn fetch_admin_logs(
    admin_user_id: &str,
    action: &str,
) -> Result<AdminLogsResponse, ApiError> {
    get_json(&admin_logs_query(100, admin_user_id, action)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_are_optional() {
        assert_eq!(admin_logs_query(100, "", ""), "/api/admin-logs?limit=100");
        assert_eq!(
            admin_logs_query(100, "42", "ban_user"),
            "/api/admin-logs?limit=100&admin_user_id=42&action=ban_user"
        );
    }
}
