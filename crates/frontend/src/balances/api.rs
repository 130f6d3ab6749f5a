use crate::shared::api::{get_json, ApiError};
use contracts::balances::BalancesResponse;

pub async fn fetch_balances() -> Result<BalancesResponse, ApiError> {
    get_json("/api/balances").await
}
