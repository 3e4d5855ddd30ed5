use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Personal to-do status. Exactly two states; anything else on the wire is a
/// server bug and fails the parse loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// The opposite state; there are only two.
    pub fn toggled(&self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

/// Per-user task from `GET /api/tasks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /api/tasks`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskRequest {
    pub user_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Body for `PUT /api/tasks/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTaskRequest {
    pub status: TaskStatus,
}

/// Client-side gate for task creation: an empty or whitespace title never
/// reaches the network.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_two_states() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
        assert_eq!(TaskStatus::Pending.toggled().toggled(), TaskStatus::Pending);
    }

    #[test]
    fn test_empty_title_is_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title("\t\n").is_err());
        assert!(validate_title("Fix fence").is_ok());
    }

    #[test]
    fn test_status_wire_format() {
        let task: Task =
            serde_json::from_str(r#"{"id":1,"title":"Water crops","status":"completed"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Completed);

        let body = serde_json::to_value(UpdateTaskRequest {
            status: TaskStatus::Pending,
        })
        .unwrap();
        assert_eq!(body["status"], "pending");
    }
}
