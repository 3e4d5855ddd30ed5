use contracts::domain::listings::Listing;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the listings owned by the given user
pub async fn fetch_user_listings(user_id: i64) -> Result<Vec<Listing>, String> {
    let response = Request::get(&api_url(&format!("/listings/user/{}", user_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch listings: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
