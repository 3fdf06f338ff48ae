//! Database repository for projects.

use crate::db::{
    errors::{DbError, Result},
    models::Project,
};
use crate::types::{LabId, ProjectId};
use sqlx::PgPool;
use tracing::instrument;

/// Filter for listing projects.
///
/// `active_only = false` includes inactive rows alongside active ones; there
/// is deliberately no way to request only inactive rows. That asymmetry is
/// observable behavior the select-list frontend depends on.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub lab: Option<LabId>,
    pub active_only: bool,
}

pub struct Projects<'p> {
    db: &'p PgPool,
}

impl<'p> Projects<'p> {
    pub fn new(db: &'p PgPool) -> Self {
        Self { db }
    }

    #[instrument(skip(self), fields(lab = ?filter.lab, active_only = filter.active_only), err)]
    pub async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT p."ProjectID" AS id,
                   p."LabID" AS lab_id,
                   p."ProjectName" AS name,
                   p."Description" AS description,
                   p."ProjectCode" AS code,
                   p."Active" AS is_active,
                   p."Flagged" AS is_flagged
            FROM "Project" p
            WHERE ($1::int4 IS NULL OR p."LabID" = $1)
                  AND (p."Active" = TRUE OR $2 = FALSE)
            "#,
        )
        .bind(filter.lab)
        .bind(filter.active_only)
        .fetch_all(self.db)
        .await?;

        Ok(projects)
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: ProjectId) -> Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT p."ProjectID" AS id,
                   p."LabID" AS lab_id,
                   p."ProjectName" AS name,
                   p."Description" AS description,
                   p."ProjectCode" AS code,
                   p."Active" AS is_active,
                   p."Flagged" AS is_flagged
            FROM "Project" p
            WHERE p."ProjectID" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(project)
    }
}
