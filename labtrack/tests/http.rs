//! HTTP-level tests for routing, parameter validation, and error mapping.
//!
//! These run against the real router with a lazy pool pointed at a closed
//! port, so handlers that reach the database fail with a connection error
//! instead of hanging. Query results themselves are covered by the unit
//! tests beside the repositories and renderers.

use axum::http::StatusCode;
use axum_test::TestServer;
use labtrack::{AppState, Config, build_router};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::time::Duration;

fn test_server() -> TestServer {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("labtrack")
        .database("labtrack");

    let db = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy_with(options);

    let state = AppState {
        db,
        config: Config::default(),
    };

    TestServer::new(build_router(state)).expect("Failed to create test server")
}

#[test_log::test(tokio::test)]
async fn test_unknown_route_is_404() {
    let server = test_server();

    let response = server.get("/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_non_numeric_path_id_is_rejected() {
    let server = test_server();

    let response = server.get("/project/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server.get("/user/12x").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server.get("/task/").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_tasks_require_a_project_id() {
    let server = test_server();

    let response = server.get("/tasks").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "projectId is required");

    // The zero sentinel means "no filter", which tasks don't allow
    let response = server.get("/tasks?projectId=0").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn test_database_failure_is_a_complete_500_response() {
    let server = test_server();

    let response = server.get("/labs").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Database error occurred");
}

#[test_log::test(tokio::test)]
async fn test_database_failure_is_500_for_html_requests_too() {
    let server = test_server();

    let response = server.get("/users").add_header("accept", "text/html").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[test_log::test(tokio::test)]
async fn test_lenient_query_params_reach_the_handler() {
    let server = test_server();

    // Garbage labId degrades to "no filter" rather than rejecting; the
    // request then fails at the (unreachable) database, not at parsing.
    let response = server.get("/projects?labId=abc&activeOnly=yes").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
