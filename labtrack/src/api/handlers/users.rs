use crate::AppState;
use crate::api::render;
use crate::db::handlers::{UserFilter, Users};
use crate::db::models::User;
use crate::errors::Error;
use crate::types::{LabId, LabRoleId, UserId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};
use serde::Deserialize;

// Query parameters for filtering users
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersQuery {
    #[serde(default, deserialize_with = "super::lenient_id_filter")]
    pub(crate) lab_id: Option<LabId>,
    #[serde(default, deserialize_with = "super::lenient_bool")]
    pub(crate) active_only: bool,
    #[serde(default, deserialize_with = "super::lenient_id_filter")]
    pub(crate) lab_role_id: Option<LabRoleId>,
}

// GET /users - List users, optionally scoped to a lab and lab role
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UsersQuery>,
) -> Result<Response, Error> {
    let filter = UserFilter {
        lab: query.lab_id,
        active_only: query.active_only,
        lab_role: query.lab_role_id,
    };
    let users = Users::new(&state.db).list(&filter).await?;
    Ok(render::negotiate(&headers, users))
}

// GET /user/{id} - Get a specific user
pub async fn get_user(State(state): State<AppState>, Path(id): Path<UserId>) -> Result<Json<User>, Error> {
    let user = Users::new(&state.db)
        .get(id)
        .await
        .map_err(|err| Error::from_lookup("User", id, err))?;
    Ok(Json(user))
}
