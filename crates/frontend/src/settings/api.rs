use crate::shared::api::{delete_json, get_json, post_json, ApiError};
use contracts::settings::{BulkUpdateRequest, SettingUpdate, SettingsAck, SettingsResponse};

pub fn settings_query(category: &str) -> String {
    if category.is_empty() || category == "all" {
        "/api/settings".to_string()
    } else {
        format!("/api/settings?category={}", category)
    }
}

pub async fn fetch_settings(category: &str) -> Result<SettingsResponse, ApiError> {
    get_json(&settings_query(category)).await
}

pub async fn bulk_update(updates: Vec<SettingUpdate>) -> Result<SettingsAck, ApiError> {
    post_json("/api/settings/bulk", &BulkUpdateRequest { settings: updates }).await
}

/// Reset one key to its .env default.
pub async fn reset_setting(key: &str) -> Result<SettingsAck, ApiError> {
    delete_json(&format!("/api/settings/{}", key)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_category_has_no_filter() {
        assert_eq!(settings_query("all"), "/api/settings");
        assert_eq!(settings_query(""), "/api/settings");
        assert_eq!(settings_query("voice"), "/api/settings?category=voice");
    }
}
