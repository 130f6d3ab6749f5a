//! Baseline diff for the settings editor: the bulk update carries only
//! keys whose value actually changed since the last fetch.

use contracts::settings::{Setting, SettingUpdate, ValueType};
use serde_json::Value;
use std::collections::HashMap;

/// Backend stores booleans as "true"/"1".
pub fn parse_bool(raw: &str) -> bool {
    raw == "true" || raw == "1"
}

/// Initial editor text for a setting (booleans normalized to
/// "true"/"false" so checkbox state round-trips).
pub fn editor_value(setting: &Setting) -> String {
    match setting.value_type {
        ValueType::Boolean => {
            if parse_bool(&setting.value) {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        _ => setting.value.clone(),
    }
}

fn value_changed(setting: &Setting, raw: &str) -> bool {
    match setting.value_type {
        ValueType::Boolean => parse_bool(&setting.value) != parse_bool(raw),
        // Numbers compare by value so "10" == "010" and "0.10" == "0.1".
        ValueType::Integer => match (setting.value.parse::<i64>(), raw.parse::<i64>()) {
            (Ok(a), Ok(b)) => a != b,
            _ => setting.value != raw,
        },
        ValueType::Float => match (setting.value.parse::<f64>(), raw.parse::<f64>()) {
            (Ok(a), Ok(b)) => a != b,
            _ => setting.value != raw,
        },
        _ => setting.value != raw,
    }
}

/// JSON value for the bulk payload, typed per `value_type`; unparseable
/// numbers fall back to the raw string so the backend can reject them.
pub fn typed_value(value_type: ValueType, raw: &str) -> Value {
    match value_type {
        ValueType::Boolean => Value::Bool(parse_bool(raw)),
        ValueType::Integer => raw
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(raw.to_string())),
        ValueType::Float => raw
            .parse::<f64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(raw.to_string())),
        _ => Value::String(raw.to_string()),
    }
}

/// Build the bulk-update payload: one entry per edited key whose value
/// differs from the fetched baseline, nothing else.
pub fn collect_updates(
    baseline: &[Setting],
    edited: &HashMap<String, String>,
) -> Vec<SettingUpdate> {
    baseline
        .iter()
        .filter_map(|setting| {
            let raw = edited.get(&setting.key)?;
            if !value_changed(setting, raw) {
                return None;
            }
            Some(SettingUpdate {
                key: setting.key.clone(),
                value: typed_value(setting.value_type, raw),
                category: setting.category.clone(),
                description: setting.description.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setting(key: &str, value: &str, value_type: ValueType) -> Setting {
        Setting {
            key: key.to_string(),
            value: value.to_string(),
            value_type,
            category: "limits".to_string(),
            description: Some("test".to_string()),
        }
    }

    #[test]
    fn untouched_settings_are_not_sent() {
        let baseline = vec![
            setting("a", "10", ValueType::Integer),
            setting("b", "hello", ValueType::String),
        ];
        let edited = HashMap::new();
        assert!(collect_updates(&baseline, &edited).is_empty());
    }

    #[test]
    fn only_changed_keys_are_sent() {
        let baseline = vec![
            setting("a", "10", ValueType::Integer),
            setting("b", "hello", ValueType::String),
            setting("c", "0.5", ValueType::Float),
        ];
        let mut edited = HashMap::new();
        edited.insert("a".to_string(), "10".to_string()); // reverted
        edited.insert("b".to_string(), "world".to_string()); // changed
        edited.insert("c".to_string(), "0.50".to_string()); // same value, new spelling

        let updates = collect_updates(&baseline, &edited);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].key, "b");
        assert_eq!(updates[0].value, Value::String("world".to_string()));
    }

    #[test]
    fn values_are_typed_per_value_type() {
        let baseline = vec![
            setting("flag", "1", ValueType::Boolean),
            setting("count", "10", ValueType::Integer),
            setting("ratio", "0.5", ValueType::Float),
        ];
        let mut edited = HashMap::new();
        edited.insert("flag".to_string(), "false".to_string());
        edited.insert("count".to_string(), "25".to_string());
        edited.insert("ratio".to_string(), "0.75".to_string());

        let updates = collect_updates(&baseline, &edited);
        assert_eq!(updates.len(), 3);
        let by_key: HashMap<_, _> = updates.into_iter().map(|u| (u.key.clone(), u)).collect();
        assert_eq!(by_key["flag"].value, Value::Bool(false));
        assert_eq!(by_key["count"].value, Value::from(25i64));
        assert_eq!(by_key["ratio"].value, Value::from(0.75f64));
    }

    #[test]
    fn boolean_normalization_prevents_false_diffs() {
        let baseline = vec![setting("flag", "1", ValueType::Boolean)];
        let mut edited = HashMap::new();
        edited.insert("flag".to_string(), "true".to_string());
        assert!(collect_updates(&baseline, &edited).is_empty());
    }

    #[test]
    fn unparseable_number_falls_back_to_string() {
        assert_eq!(
            typed_value(ValueType::Integer, "abc"),
            Value::String("abc".to_string())
        );
    }
}
