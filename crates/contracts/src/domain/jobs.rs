use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job posting as returned by the jobs endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    #[serde(default)]
    pub employer_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Query string for `GET /api/jobs/list` (and the workers directory, which
/// shares the shape).
#[derive(Debug, Clone, Default, Serialize)]
pub struct DirectoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

/// Body for `POST /api/jobs/{id}/apply`.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyRequest {
    pub user_id: i64,
    pub cover_letter: String,
}

/// One application row from `GET /api/jobs/{id}/applications`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: i64,
    #[serde(default)]
    pub job_id: i64,
    #[serde(default)]
    pub applicant_id: i64,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Client-side gate for the apply flow.
pub fn validate_cover_letter(cover_letter: &str) -> Result<(), String> {
    if cover_letter.trim().is_empty() {
        return Err("Cover letter is required".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cover_letter_is_rejected() {
        assert!(validate_cover_letter("").is_err());
        assert!(validate_cover_letter("  \n").is_err());
        assert!(validate_cover_letter("I have five seasons of experience.").is_ok());
    }
}
