use crate::shared::api::{get_json, ApiError};
use contracts::logs::TranslationLogsResponse;

/// Query path for the translation log list; `filter` is "", "voice" or
/// "text".
pub fn logs_query(per_page: u32, filter: &str, search: &str) -> String {
    let mut path = format!("/api/logs/translations?per_page={}", per_page);
    if !filter.is_empty() {
        path.push_str(&format!("&filter={}", filter));
    }
    if !search.is_empty() {
        path.push_str(&format!("&search={}", urlencoding::encode(search)));
    }
    path
}

pub async fn fetch_logs(filter: &str, search: &str) -> Result<TranslationLogsResponse, ApiError> {
    get_json(&logs_query(20, filter, search)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_query() {
        assert_eq!(logs_query(20, "", ""), "/api/logs/translations?per_page=20");
    }

    #[test]
    fn filter_and_search_are_appended() {
        assert_eq!(
            logs_query(20, "voice", "hello world"),
            "/api/logs/translations?per_page=20&filter=voice&search=hello%20world"
        );
    }
}
