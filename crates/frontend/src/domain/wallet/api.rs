use contracts::domain::wallet::WalletBalance;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the wallet balance of the given user
pub async fn fetch_balance(user_id: i64) -> Result<WalletBalance, String> {
    let response = Request::get(&api_url(&format!("/api/wallet/balance/{}", user_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch wallet balance: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
