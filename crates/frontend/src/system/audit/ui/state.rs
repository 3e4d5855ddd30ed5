use contracts::system::audit::AuditLogEntry;
use leptos::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct AuditLogListState {
    pub logs: Vec<AuditLogEntry>,
    pub selected: Vec<i64>,
    pub is_loaded: bool,
}

impl AuditLogListState {
    pub fn toggle_selected(&mut self, id: i64) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    /// Flip the given entries to read, clearing any legacy unread flag.
    pub fn patch_read(&mut self, ids: &[i64]) {
        for entry in self.logs.iter_mut().filter(|e| ids.contains(&e.id)) {
            entry.mark_read();
        }
    }
}

pub fn create_state() -> RwSignal<AuditLogListState> {
    RwSignal::new(AuditLogListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, unread: bool) -> AuditLogEntry {
        AuditLogEntry {
            id,
            unread: Some(unread),
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_selected() {
        let mut state = AuditLogListState::default();
        state.toggle_selected(3);
        assert_eq!(state.selected, vec![3]);
        state.toggle_selected(5);
        state.toggle_selected(3);
        assert_eq!(state.selected, vec![5]);
    }

    #[test]
    fn test_patch_read_only_touches_matching_ids() {
        let mut state = AuditLogListState {
            logs: vec![entry(1, true), entry(2, true), entry(3, false)],
            ..Default::default()
        };
        state.patch_read(&[1]);
        assert!(!state.logs[0].is_unread());
        assert!(state.logs[1].is_unread());
        assert!(!state.logs[2].is_unread());
    }
}
