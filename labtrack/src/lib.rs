//! # labtrack: Lab Directory Read API
//!
//! `labtrack` is a thin read-only HTTP facade over the lab timekeeping
//! database. It exposes labs, projects, tasks, and users as JSON, and - for
//! the select-list frontend - as bare HTML `<option>` fragments selected via
//! the `Accept: text/html` header.
//!
//! ## Architecture
//!
//! The service is built on [Axum](https://github.com/tokio-rs/axum) for the
//! HTTP layer and SQLx/PostgreSQL for data access. Every endpoint is one
//! parameterized query, one row-to-struct scan, and one serialization
//! branch; there is no caching, no pagination, and no write surface.
//!
//! The **API layer** ([`api`]) holds the route handlers and the content
//! negotiation logic. The **database layer** ([`db`]) follows the repository
//! pattern: one repository per table, injected into handlers through
//! [`AppState`] rather than ambient global state.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use labtrack::{Application, Config, config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     labtrack::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod telemetry;
mod types;

pub use config::Config;
pub use types::{LabId, LabRoleId, ProjectId, TaskId, UserId};

use crate::api::handlers::{labs, projects, tasks, users};
use anyhow::Context;
use axum::{Router, routing::get};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::future::IntoFuture;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info};

/// How long in-flight requests get to finish after a shutdown signal before
/// the process forces an exit.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Application state shared across all request handlers.
///
/// Constructed once at startup and injected into the router; handlers build
/// repositories from the pool per request.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Build the service router: the five directory routes plus the task routes,
/// all GET, with request logging (method, path, status, latency) layered on.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/labs", get(labs::list_labs))
        .route("/projects", get(projects::list_projects))
        .route("/project/{id}", get(projects::get_project))
        .route("/tasks", get(tasks::list_tasks))
        .route("/task/{id}", get(tasks::get_task))
        .route("/users", get(users::list_users))
        .route("/user/{id}", get(users::get_user))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// The running service: pool, router, and lifecycle management.
///
/// 1. **Create**: [`Application::new`] loads the pool and verifies the
///    database is reachable - a bad connection string is fatal here, before
///    the listener ever binds.
/// 2. **Serve**: [`Application::serve`] binds the TCP port and handles
///    requests until the shutdown future resolves.
/// 3. **Drain**: after the signal, in-flight requests get [`SHUTDOWN_GRACE`]
///    to finish; exceeding it is a fatal shutdown-timeout error.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting directory service with configuration: {:#?}", config);

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(config.database.connect_options())
            .await
            .context("Unable to connect to database")?;

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Directory service listening on http://{}", bind_addr);

        // The drain channel fires when the shutdown signal arrives, which
        // starts the grace-period clock for in-flight requests.
        let (drain_tx, drain_rx) = tokio::sync::oneshot::channel::<()>();
        let server = axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("Shutdown signal received, draining in-flight requests...");
                let _ = drain_tx.send(());
            })
            .into_future();

        tokio::select! {
            result = server => result?,
            _ = async {
                // Pending until the signal actually arrives, so the grace
                // clock never runs while serving normally.
                let _ = drain_rx.await;
                tokio::time::sleep(SHUTDOWN_GRACE).await;
            } => {
                anyhow::bail!("Graceful shutdown timed out after {:?}, forcing exit", SHUTDOWN_GRACE);
            }
        }

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutdown complete, goodbye");
        Ok(())
    }
}
