use crate::AppState;
use crate::api::render;
use crate::db::handlers::Labs;
use crate::errors::Error;
use axum::{extract::State, http::HeaderMap, response::Response};

// GET /labs - List all labs
pub async fn list_labs(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, Error> {
    let labs = Labs::new(&state.db).list().await?;
    Ok(render::negotiate(&headers, labs))
}
