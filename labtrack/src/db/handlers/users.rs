//! Database repository for users.

use crate::db::{
    errors::{DbError, Result},
    models::User,
};
use crate::types::{LabId, LabRoleId, UserId};
use sqlx::PgPool;
use tracing::instrument;

/// Filter for listing users.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub lab: Option<LabId>,
    pub active_only: bool,
    pub lab_role: Option<LabRoleId>,
}

pub struct Users<'p> {
    db: &'p PgPool,
}

const USER_COLUMNS: &str = r#"
    u."UserID" AS id,
    u."LabID" AS lab_id,
    u."FirstName" AS first_name,
    u."LastName" AS last_name,
    u."Badge" AS badge,
    u."Pin" AS pin,
    u."FullLegalName" AS full_legal_name,
    u."ContactID" AS contact_id,
    u."PrimaryContactID" AS primary_contact_id,
    u."SecondaryContactID" AS secondary_contact_id,
    u."ThirdContactID" AS third_contact_id,
    u."TourRoleID" AS tour_role_id,
    u."LabRoleID" AS lab_role_id,
    u."Active" AS is_active
"#;

impl<'p> Users<'p> {
    pub fn new(db: &'p PgPool) -> Self {
        Self { db }
    }

    #[instrument(
        skip(self),
        fields(lab = ?filter.lab, active_only = filter.active_only, lab_role = ?filter.lab_role),
        err
    )]
    pub async fn list(&self, filter: &UserFilter) -> Result<Vec<User>> {
        let query = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM "User" u
            WHERE ($1::int4 IS NULL OR u."LabID" = $1)
                  AND (u."Active" = TRUE OR $2 = FALSE)
                  AND ($3::int4 IS NULL OR u."LabRoleID" = $3)
            "#
        );

        let users = sqlx::query_as::<_, User>(&query)
            .bind(filter.lab)
            .bind(filter.active_only)
            .bind(filter.lab_role)
            .fetch_all(self.db)
            .await?;

        Ok(users.into_iter().map(User::normalized).collect())
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: UserId) -> Result<User> {
        let query = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM "User" u
            WHERE u."UserID" = $1
            "#
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(self.db)
            .await?
            .ok_or(DbError::NotFound)?;

        Ok(user.normalized())
    }
}
