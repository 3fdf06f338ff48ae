use crate::types::LabId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A lab: top-level organizational unit owning projects and users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Lab {
    pub id: LabId,
    pub name: String,
}
