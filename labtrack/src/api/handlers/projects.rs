use crate::AppState;
use crate::api::render;
use crate::db::handlers::{ProjectFilter, Projects};
use crate::db::models::Project;
use crate::errors::Error;
use crate::types::{LabId, ProjectId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};
use serde::Deserialize;

// Query parameters for filtering projects
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsQuery {
    #[serde(default, deserialize_with = "super::lenient_id_filter")]
    pub(crate) lab_id: Option<LabId>,
    #[serde(default, deserialize_with = "super::lenient_bool")]
    pub(crate) active_only: bool,
}

// GET /projects - List projects, optionally scoped to a lab
pub async fn list_projects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ProjectsQuery>,
) -> Result<Response, Error> {
    let filter = ProjectFilter {
        lab: query.lab_id,
        active_only: query.active_only,
    };
    let projects = Projects::new(&state.db).list(&filter).await?;
    Ok(render::negotiate(&headers, projects))
}

// GET /project/{id} - Get a specific project
pub async fn get_project(State(state): State<AppState>, Path(id): Path<ProjectId>) -> Result<Json<Project>, Error> {
    let project = Projects::new(&state.db)
        .get(id)
        .await
        .map_err(|err| Error::from_lookup("Project", id, err))?;
    Ok(Json(project))
}
