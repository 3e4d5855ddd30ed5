use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Clear the server-side session cookie.
pub async fn logout() -> Result<(), String> {
    let response = Request::get(&api_url("/logout"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}
