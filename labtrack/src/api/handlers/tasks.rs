use crate::AppState;
use crate::api::render;
use crate::db::handlers::{TaskFilter, Tasks};
use crate::db::models::Task;
use crate::errors::Error;
use crate::types::{ProjectId, TaskId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};
use serde::Deserialize;

// Query parameters for filtering tasks
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksQuery {
    #[serde(default, deserialize_with = "super::lenient_id_filter")]
    pub(crate) project_id: Option<ProjectId>,
    #[serde(default, deserialize_with = "super::lenient_bool")]
    pub(crate) active_only: bool,
}

// GET /tasks - List tasks under a project. The project id is mandatory;
// there is no "all projects" sentinel for tasks.
pub async fn list_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TasksQuery>,
) -> Result<Response, Error> {
    let project = query.project_id.ok_or_else(|| Error::BadRequest {
        message: "projectId is required".to_string(),
    })?;

    let filter = TaskFilter {
        project,
        active_only: query.active_only,
    };
    let tasks = Tasks::new(&state.db).list(&filter).await?;
    Ok(render::negotiate(&headers, tasks))
}

// GET /task/{id} - Get a specific task
pub async fn get_task(State(state): State<AppState>, Path(id): Path<TaskId>) -> Result<Json<Task>, Error> {
    let task = Tasks::new(&state.db)
        .get(id)
        .await
        .map_err(|err| Error::from_lookup("Task", id, err))?;
    Ok(Json(task))
}
