use crate::types::{LabId, ProjectId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project: unit of work under a lab.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub lab_id: LabId,
    pub name: String,
    pub description: Option<String>,
    pub code: Option<String>,
    pub is_active: bool,
    pub is_flagged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names_are_camel_case() {
        let project = Project {
            id: 7,
            lab_id: 3,
            name: "Outreach".to_string(),
            description: None,
            code: Some("OUT-1".to_string()),
            is_active: true,
            is_flagged: false,
        };

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["labId"], 3);
        assert_eq!(json["isActive"], true);
        assert_eq!(json["isFlagged"], false);
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["code"], "OUT-1");
    }

    #[test]
    fn test_optional_presence_survives_round_trip() {
        let project = Project {
            id: 1,
            lab_id: 1,
            name: "Assembly".to_string(),
            description: None,
            code: None,
            is_active: false,
            is_flagged: true,
        };

        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();

        // Absent stays absent, not coerced to an empty string
        assert_eq!(back.description, None);
        assert_eq!(back.code, None);
        assert!(!back.is_active);
        assert!(back.is_flagged);
    }
}
