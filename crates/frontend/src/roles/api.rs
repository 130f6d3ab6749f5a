use crate::shared::api::{delete_json, get_json, post_json, ApiError};
use contracts::roles::{AssignRoleRequest, Role, RolesResponse};

pub async fn fetch_roles() -> Result<RolesResponse, ApiError> {
    get_json("/api/admin-roles").await
}

pub async fn assign_role(user_id: i64, role: Role) -> Result<serde_json::Value, ApiError> {
    post_json("/api/admin-roles", &AssignRoleRequest { user_id, role }).await
}

pub async fn remove_role(user_id: i64) -> Result<serde_json::Value, ApiError> {
    delete_json(&format!("/api/admin-roles/{}", user_id)).await
}
