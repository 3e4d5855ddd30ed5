use contracts::domain::jobs::{ApplyRequest, DirectoryQuery, Job, JobApplication};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the public jobs directory, optionally filtered and sorted
pub async fn fetch_jobs(query: &DirectoryQuery) -> Result<Vec<Job>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    let url = if qs.is_empty() {
        api_url("/api/jobs/list")
    } else {
        format!("{}?{}", api_url("/api/jobs/list"), qs)
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch jobs: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one job posting by id
pub async fn fetch_job(id: i64) -> Result<Job, String> {
    let response = Request::get(&api_url(&format!("/api/jobs/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch job: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the jobs posted by the given employer
pub async fn fetch_my_jobs(user_id: i64) -> Result<Vec<Job>, String> {
    let response = Request::get(&api_url(&format!("/api/my-jobs?user_id={}", user_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch my jobs: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Apply for a job. The cover letter is validated before any request goes out.
pub async fn apply_for_job(job_id: i64, request: ApplyRequest) -> Result<(), String> {
    contracts::domain::jobs::validate_cover_letter(&request.cover_letter)?;

    let response = Request::post(&api_url(&format!("/api/jobs/{}/apply", job_id)))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to apply: {}", response.status()));
    }

    Ok(())
}

/// Fetch the applications on a job; only its employer may ask.
pub async fn fetch_applications(job_id: i64, employer_id: i64) -> Result<Vec<JobApplication>, String> {
    let response = Request::get(&api_url(&format!(
        "/api/jobs/{}/applications?employer_id={}",
        job_id, employer_id
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch applications: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
