use serde::{Deserialize, Serialize};

/// Permission tier of an admin user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    Analyst,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::Analyst => "analyst",
        }
    }

    pub fn from_str(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "moderator" => Some(Role::Moderator),
            "analyst" => Some(Role::Analyst),
            _ => None,
        }
    }

    pub fn all() -> [Role; 3] {
        [Role::Admin, Role::Moderator, Role::Analyst]
    }
}

/// Entry of `GET /api/admin-roles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRole {
    pub user_id: i64,
    pub role: Role,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// The caller's own role, echoed alongside the admin list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: i64,
    pub role: Role,
    #[serde(default)]
    pub permissions: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesResponse {
    #[serde(default)]
    pub admins: Vec<AdminRole>,
    #[serde(default)]
    pub total: u64,
    pub current_user: Option<CurrentUser>,
}

/// Body of `POST /api/admin-roles` (assign or change a role).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRoleRequest {
    pub user_id: i64,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip_names() {
        for role in Role::all() {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_str("owner"), None);
    }
}
