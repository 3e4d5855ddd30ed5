use contracts::domain::messages::MessagesResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch both message directions for the given user
pub async fn fetch_messages(user_id: i64) -> Result<MessagesResponse, String> {
    let response = Request::get(&api_url(&format!("/messages/{}", user_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch messages: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
