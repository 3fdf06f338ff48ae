//! Database repository for tasks.

use crate::db::{
    errors::{DbError, Result},
    models::Task,
};
use crate::types::{ProjectId, TaskId};
use sqlx::PgPool;
use tracing::instrument;

/// Filter for listing tasks. Unlike projects, the project id is mandatory:
/// there is no "all projects" sentinel for tasks.
#[derive(Debug, Clone)]
pub struct TaskFilter {
    pub project: ProjectId,
    pub active_only: bool,
}

pub struct Tasks<'p> {
    db: &'p PgPool,
}

impl<'p> Tasks<'p> {
    pub fn new(db: &'p PgPool) -> Self {
        Self { db }
    }

    #[instrument(skip(self), fields(project = filter.project, active_only = filter.active_only), err)]
    pub async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT t."TaskID" AS id,
                   t."ProjectID" AS project_id,
                   t."TaskName" AS name,
                   t."Description" AS description,
                   t."TaskCode" AS code,
                   t."Active" AS is_active
            FROM "Task" t
            WHERE t."ProjectID" = $1
                  AND (t."Active" = TRUE OR $2 = FALSE)
            "#,
        )
        .bind(filter.project)
        .bind(filter.active_only)
        .fetch_all(self.db)
        .await?;

        Ok(tasks)
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: TaskId) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT t."TaskID" AS id,
                   t."ProjectID" AS project_id,
                   t."TaskName" AS name,
                   t."Description" AS description,
                   t."TaskCode" AS code,
                   t."Active" AS is_active
            FROM "Task" t
            WHERE t."TaskID" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(task)
    }
}
