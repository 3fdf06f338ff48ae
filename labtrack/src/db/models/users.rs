use crate::types::{LabId, LabRoleId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person record under a lab.
///
/// The contact id columns are self-referential links to other user rows.
/// They are informational only; no cycle checking happens on read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub lab_id: LabId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub badge: Option<String>,
    pub pin: Option<String>,
    pub full_legal_name: Option<String>,
    pub contact_id: Option<UserId>,
    pub primary_contact_id: Option<UserId>,
    pub secondary_contact_id: Option<UserId>,
    pub third_contact_id: Option<UserId>,
    pub tour_role_id: Option<i32>,
    pub lab_role_id: Option<LabRoleId>,
    pub is_active: bool,
}

impl User {
    /// Strip stray whitespace the legacy entry forms leave around the legal
    /// name. Applied to every row as it is read; idempotent.
    pub(crate) fn normalized(mut self) -> Self {
        if let Some(name) = self.full_legal_name.take() {
            self.full_legal_name = Some(name.trim().to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 12,
            lab_id: 3,
            first_name: "Ada".to_string(),
            last_name: None,
            badge: Some("B-104".to_string()),
            pin: None,
            full_legal_name: Some("  Ada Lovelace \t".to_string()),
            contact_id: None,
            primary_contact_id: Some(4),
            secondary_contact_id: None,
            third_contact_id: None,
            tour_role_id: None,
            lab_role_id: Some(2),
            is_active: true,
        }
    }

    #[test]
    fn test_legal_name_trimming_is_idempotent() {
        let once = sample_user().normalized();
        assert_eq!(once.full_legal_name.as_deref(), Some("Ada Lovelace"));

        let twice = once.clone().normalized();
        assert_eq!(twice.full_legal_name, once.full_legal_name);
    }

    #[test]
    fn test_normalized_keeps_absent_name_absent() {
        let mut user = sample_user();
        user.full_legal_name = None;
        assert_eq!(user.normalized().full_legal_name, None);
    }

    #[test]
    fn test_optional_presence_survives_round_trip() {
        let user = sample_user().normalized();
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();

        assert_eq!(back.last_name, None);
        assert_eq!(back.pin, None);
        assert_eq!(back.badge.as_deref(), Some("B-104"));
        assert_eq!(back.primary_contact_id, Some(4));
        assert_eq!(back.secondary_contact_id, None);
    }

    #[test]
    fn test_json_field_names_are_camel_case() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("fullLegalName").is_some());
        assert!(json.get("labRoleId").is_some());
        assert_eq!(json["lastName"], serde_json::Value::Null);
    }
}
