use crate::types::{ProjectId, TaskId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task: unit of work under a project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub code: Option<String>,
    pub is_active: bool,
}
