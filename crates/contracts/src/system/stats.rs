use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `GET /api/admin/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminStats {
    #[serde(default)]
    pub users: i64,
    #[serde(default)]
    pub jobs: i64,
    #[serde(default)]
    pub listings: i64,
    #[serde(default)]
    pub pending_verifications: i64,
    #[serde(default)]
    pub total_revenue: f64,
}

/// Response of `GET /api/worker-dashboard-stats`.
///
/// The endpoint predates the snake_case convention and still speaks camelCase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerDashboardStats {
    #[serde(rename = "jobsCompleted", default)]
    pub jobs_completed: i64,
    #[serde(rename = "totalEarnings", default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "recentApplications", default)]
    pub recent_applications: Vec<RecentApplication>,
}

/// One row of the worker dashboard's recent applications widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentApplication {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_stats_camel_case_wire_names() {
        let raw = r#"{"jobsCompleted":12,"totalEarnings":85000.5,"rating":4.6,"recentApplications":[]}"#;
        let stats: WorkerDashboardStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.jobs_completed, 12);
        assert_eq!(stats.total_earnings, 85000.5);
        assert!(stats.recent_applications.is_empty());
    }
}
