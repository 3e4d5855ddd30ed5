use serde::{Deserialize, Serialize};

/// Worker profile from the workers directory and detail endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerProfile {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location_area: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<i64>,
}

impl WorkerProfile {
    /// Combined "area, state" display string; either part may be absent.
    pub fn display_location(&self) -> String {
        match (self.location_area.as_deref(), self.location_state.as_deref()) {
            (Some(area), Some(state)) => format!("{}, {}", area, state),
            (Some(area), None) => area.to_string(),
            (None, Some(state)) => state.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_location_joins_available_parts() {
        let mut w = WorkerProfile::default();
        assert_eq!(w.display_location(), "");

        w.location_state = Some("Ogun".into());
        assert_eq!(w.display_location(), "Ogun");

        w.location_area = Some("Abeokuta".into());
        assert_eq!(w.display_location(), "Abeokuta, Ogun");
    }
}
