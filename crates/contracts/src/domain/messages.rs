use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label shown when a counterpart has no usable display name.
pub const UNKNOWN_PARTNER: &str = "Unknown";

/// One direct message as returned by `GET /messages/{user_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub sender_picture: Option<String>,
    #[serde(default)]
    pub recipient_picture: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
}

/// Response of `GET /messages/{user_id}`: both directions, unmerged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub sent: Vec<Message>,
    #[serde(default)]
    pub received: Vec<Message>,
}

/// Most recent exchange with one counterpart, derived client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationPreview {
    pub partner_id: i64,
    pub partner_name: String,
    pub partner_picture: Option<String>,
    pub last_message: String,
    pub time: DateTime<Utc>,
}

impl ConversationPreview {
    /// Merge sent/received streams into at most `limit` previews, one per
    /// distinct partner, most recent first.
    ///
    /// The combined list is sorted descending by timestamp and scanned in
    /// order; the first occurrence of a partner wins, so each preview carries
    /// that partner's most recent message. The sort is stable, which makes
    /// insertion order (sent before received) the tie-break for equal
    /// timestamps.
    pub fn aggregate(
        viewer_id: i64,
        sent: &[Message],
        received: &[Message],
        limit: usize,
    ) -> Vec<ConversationPreview> {
        let mut combined: Vec<&Message> = sent.iter().chain(received.iter()).collect();
        combined.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut previews: Vec<ConversationPreview> = Vec::new();
        for msg in combined {
            if previews.len() == limit {
                break;
            }
            let partner_id = msg.partner_id(viewer_id);
            if previews.iter().any(|p| p.partner_id == partner_id) {
                continue;
            }
            previews.push(ConversationPreview {
                partner_id,
                partner_name: msg.partner_name(viewer_id),
                partner_picture: msg.partner_picture(viewer_id),
                last_message: msg.content.clone(),
                time: msg.created_at,
            });
        }
        previews
    }
}

impl Message {
    /// The counterpart of `viewer_id` on this message.
    pub fn partner_id(&self, viewer_id: i64) -> i64 {
        if self.sender_id == viewer_id {
            self.recipient_id
        } else {
            self.sender_id
        }
    }

    fn partner_name(&self, viewer_id: i64) -> String {
        let name = if self.sender_id == viewer_id {
            self.recipient_name.as_deref()
        } else {
            self.sender_name.as_deref()
        };
        match name {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => UNKNOWN_PARTNER.to_string(),
        }
    }

    fn partner_picture(&self, viewer_id: i64) -> Option<String> {
        if self.sender_id == viewer_id {
            self.recipient_picture.clone()
        } else {
            self.sender_picture.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn msg(sender: i64, recipient: i64, content: &str, secs: i64) -> Message {
        Message {
            sender_id: sender,
            recipient_id: recipient,
            content: content.into(),
            created_at: at(secs),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_partner_keeps_most_recent_direction() {
        // Viewer 1 sent "hi" later than partner 2's "yo": the sent message wins.
        let sent = vec![msg(1, 2, "hi", 20)];
        let received = vec![msg(2, 1, "yo", 10)];

        let previews = ConversationPreview::aggregate(1, &sent, &received, 3);
        assert_eq!(previews.len(), 1);
        assert_eq!(previews[0].partner_id, 2);
        assert_eq!(previews[0].last_message, "hi");
        assert_eq!(previews[0].time, at(20));
    }

    #[test]
    fn test_partner_ids_are_unique_and_bounded() {
        let sent = vec![
            msg(1, 2, "a", 5),
            msg(1, 3, "b", 4),
            msg(1, 4, "c", 3),
            msg(1, 5, "d", 2),
        ];
        let received = vec![msg(2, 1, "e", 1), msg(3, 1, "f", 0)];

        let previews = ConversationPreview::aggregate(1, &sent, &received, 3);
        assert_eq!(previews.len(), 3);
        let mut ids: Vec<i64> = previews.iter().map(|p| p.partner_id).collect();
        ids.dedup();
        assert_eq!(ids, vec![2, 3, 4], "most-recent-first, no duplicates");
    }

    #[test]
    fn test_preview_order_is_most_recent_first_across_partners() {
        let sent = vec![msg(1, 9, "old", 1)];
        let received = vec![msg(7, 1, "newest", 30), msg(9, 1, "mid", 15)];

        let previews = ConversationPreview::aggregate(1, &sent, &received, 3);
        assert_eq!(previews.len(), 2);
        assert_eq!(previews[0].partner_id, 7);
        assert_eq!(previews[1].partner_id, 9);
        assert_eq!(previews[1].last_message, "mid");
    }

    #[test]
    fn test_equal_timestamps_tie_break_on_insertion_order() {
        // Same instant in both directions: sent is concatenated first and the
        // stable sort preserves that, so the sent message wins.
        let sent = vec![msg(1, 2, "from me", 10)];
        let received = vec![msg(2, 1, "from them", 10)];

        let previews = ConversationPreview::aggregate(1, &sent, &received, 3);
        assert_eq!(previews[0].last_message, "from me");
    }

    #[test]
    fn test_missing_partner_name_falls_back() {
        let received = vec![msg(2, 1, "hello", 1)];
        let previews = ConversationPreview::aggregate(1, &[], &received, 3);
        assert_eq!(previews[0].partner_name, UNKNOWN_PARTNER);

        let mut named = msg(3, 1, "hey", 2);
        named.sender_name = Some("Bola".into());
        let previews = ConversationPreview::aggregate(1, &[], &[named], 3);
        assert_eq!(previews[0].partner_name, "Bola");
    }

    #[test]
    fn test_empty_inputs_yield_empty_projection() {
        let previews = ConversationPreview::aggregate(1, &[], &[], 3);
        assert!(previews.is_empty());
    }
}
