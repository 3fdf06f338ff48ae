//! Database repository for labs.

use crate::db::{errors::Result, models::Lab};
use sqlx::PgPool;
use tracing::instrument;

pub struct Labs<'p> {
    db: &'p PgPool,
}

impl<'p> Labs<'p> {
    pub fn new(db: &'p PgPool) -> Self {
        Self { db }
    }

    /// List every lab, in storage order.
    #[instrument(skip(self), err)]
    pub async fn list(&self) -> Result<Vec<Lab>> {
        let labs = sqlx::query_as::<_, Lab>(
            r#"
            SELECT l."LabID" AS id,
                   l."LabName" AS name
            FROM "Lab" l
            "#,
        )
        .fetch_all(self.db)
        .await?;

        Ok(labs)
    }
}
