use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One administrative action record from `/admin/audit-logs`.
///
/// Older server builds emitted the read state under several names (`unread`,
/// `is_unread`, inverted `seen`, inverted `read`). All of them are accepted on
/// the wire and collapse into the single canonical [`AuditLogEntry::is_unread`]
/// at the ingestion boundary; nothing downstream looks at the raw flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: i64,
    #[serde(default)]
    pub admin_id: i64,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub target_id: Option<i64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    // Legacy read-state flags, any one of which may be present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_unread: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

impl AuditLogEntry {
    /// Canonical unread test: logical OR across every legacy flag shape.
    pub fn is_unread(&self) -> bool {
        self.unread == Some(true)
            || self.is_unread == Some(true)
            || self.seen == Some(false)
            || self.read == Some(false)
    }

    /// Flip the entry to read, clearing every legacy representation so that
    /// [`is_unread`](Self::is_unread) holds `false` afterwards.
    pub fn mark_read(&mut self) {
        self.unread = Some(false);
        self.is_unread = Some(false);
        self.seen = Some(true);
        self.read = Some(true);
    }
}

/// Count of entries whose unread condition holds.
pub fn unread_count(entries: &[AuditLogEntry]) -> usize {
    entries.iter().filter(|e| e.is_unread()).count()
}

/// Ids of the currently-unread entries, in feed order.
pub fn unread_ids(entries: &[AuditLogEntry]) -> Vec<i64> {
    entries
        .iter()
        .filter(|e| e.is_unread())
        .map(|e| e.id)
        .collect()
}

/// Body for `POST /admin/audit-logs`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditLogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_admin_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Body for `POST /admin/audit-logs/mark-read`.
///
/// Either an explicit id list or `mark_all: true`, never both.
#[derive(Debug, Clone, Serialize)]
pub struct MarkReadRequest {
    pub admin_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_all: Option<bool>,
}

impl MarkReadRequest {
    pub fn for_ids(admin_id: i64, ids: Vec<i64>) -> Self {
        Self {
            admin_id,
            ids: Some(ids),
            mark_all: None,
        }
    }

    pub fn for_all(admin_id: i64) -> Self {
        Self {
            admin_id,
            ids: None,
            mark_all: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64) -> AuditLogEntry {
        AuditLogEntry {
            id,
            admin_id: 1,
            action: "ban_user".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unread_accepts_all_flag_shapes() {
        let mut a = entry(1);
        a.unread = Some(true);
        let mut b = entry(2);
        b.is_unread = Some(true);
        let mut c = entry(3);
        c.seen = Some(false);
        let mut d = entry(4);
        d.read = Some(false);

        for e in [&a, &b, &c, &d] {
            assert!(e.is_unread(), "entry {} should count as unread", e.id);
        }
    }

    #[test]
    fn test_read_entries_are_not_unread() {
        let mut a = entry(1);
        a.read = Some(true);
        let mut b = entry(2);
        b.seen = Some(true);
        let c = entry(3); // no flags at all

        assert!(!a.is_unread());
        assert!(!b.is_unread());
        assert!(!c.is_unread());
    }

    #[test]
    fn test_unread_count_matches_or_condition() {
        let mut unread_a = entry(1);
        unread_a.unread = Some(true);
        let mut unread_b = entry(2);
        unread_b.seen = Some(false);
        let mut read = entry(3);
        read.read = Some(true);
        let bare = entry(4);

        let logs = vec![unread_a, read, unread_b, bare];
        assert_eq!(unread_count(&logs), 2);
        assert_eq!(unread_ids(&logs), vec![1, 2]);
    }

    #[test]
    fn test_mark_read_clears_every_representation() {
        let mut e = entry(9);
        e.is_unread = Some(true);
        e.seen = Some(false);
        assert!(e.is_unread());

        e.mark_read();
        assert!(!e.is_unread());
    }

    #[test]
    fn test_mark_read_request_bodies() {
        let by_ids = serde_json::to_value(MarkReadRequest::for_ids(5, vec![1, 2])).unwrap();
        assert_eq!(by_ids["admin_id"], 5);
        assert_eq!(by_ids["ids"], serde_json::json!([1, 2]));
        assert!(by_ids.get("mark_all").is_none());

        let all = serde_json::to_value(MarkReadRequest::for_all(5)).unwrap();
        assert_eq!(all["mark_all"], true);
        assert!(all.get("ids").is_none());
    }

    #[test]
    fn test_wire_parse_with_legacy_flags() {
        let raw = r#"[
            {"id":1,"admin_id":2,"action":"ban_user","unread":true},
            {"id":2,"admin_id":2,"action":"hide_listing","seen":true}
        ]"#;
        let logs: Vec<AuditLogEntry> = serde_json::from_str(raw).unwrap();
        assert_eq!(unread_count(&logs), 1);
    }
}
