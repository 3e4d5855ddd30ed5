use contracts::domain::jobs::DirectoryQuery;
use contracts::domain::workers::WorkerProfile;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the workers directory, optionally filtered and sorted
pub async fn fetch_workers(query: &DirectoryQuery) -> Result<Vec<WorkerProfile>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    let url = if qs.is_empty() {
        api_url("/api/workers/list")
    } else {
        format!("{}?{}", api_url("/api/workers/list"), qs)
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch workers: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one worker profile. The endpoint also serves HTML, so the JSON
/// representation has to be asked for explicitly.
pub async fn fetch_worker(id: i64) -> Result<WorkerProfile, String> {
    let response = Request::get(&api_url(&format!("/workers/{}", id)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch worker: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
