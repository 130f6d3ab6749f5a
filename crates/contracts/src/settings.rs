use serde::{Deserialize, Serialize};

/// How a setting's raw string value should be edited and typed on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Integer,
    Float,
    Boolean,
    Json,
    Secret,
    /// Plain text; also the catch-all for value types this panel version
    /// does not know yet.
    #[serde(other)]
    String,
}

/// Entry of `GET /api/settings`. Values always travel as strings; the
/// `value_type` tells the editor how to interpret them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub value_type: ValueType,
    pub category: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub settings: Vec<Setting>,
}

/// One changed setting inside `POST /api/settings/bulk`. The value is
/// typed per `ValueType` (bool / integer / float / string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingUpdate {
    pub key: String,
    pub value: serde_json::Value,
    pub category: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkUpdateRequest {
    pub settings: Vec<SettingUpdate>,
}

/// `{ success, message }` acknowledgement from settings mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsAck {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_value_type_becomes_string() {
        let parsed: ValueType = serde_json::from_str("\"color\"").unwrap();
        assert_eq!(parsed, ValueType::String);
    }
}
