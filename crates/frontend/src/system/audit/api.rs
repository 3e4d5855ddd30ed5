use contracts::system::audit::{AuditLogEntry, AuditLogQuery, MarkReadRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch audit log entries, newest first, with optional filters
pub async fn fetch_audit_logs(query: &AuditLogQuery) -> Result<Vec<AuditLogEntry>, String> {
    let response = Request::post(&api_url("/admin/audit-logs"))
        .json(query)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to load audit logs: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Mark entries read, either an explicit id list or all of them
pub async fn mark_read(request: &MarkReadRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/admin/audit-logs/mark-read"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to mark logs read: {}", response.status()));
    }

    Ok(())
}
