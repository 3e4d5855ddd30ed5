use contracts::system::stats::{AdminStats, WorkerDashboardStats};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the platform-wide counters for the admin dashboard
pub async fn fetch_admin_stats(admin_id: i64) -> Result<AdminStats, String> {
    let response = Request::get(&api_url(&format!("/api/admin/stats?admin_id={}", admin_id)))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch stats: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the per-worker dashboard summary
pub async fn fetch_worker_stats(user_id: i64) -> Result<WorkerDashboardStats, String> {
    let response = Request::get(&api_url(&format!(
        "/api/worker-dashboard-stats?user_id={}",
        user_id
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch worker stats: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
