use contracts::domain::work_contracts::WorkContract;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the contracts the given user is a party to
pub async fn fetch_my_contracts(user_id: i64) -> Result<Vec<WorkContract>, String> {
    let response = Request::get(&api_url(&format!("/api/my-contracts?user_id={}", user_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch contracts: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
