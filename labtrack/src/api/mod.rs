//! API layer for HTTP request handling.
//!
//! - **[`handlers`]**: Axum route handlers for all endpoints
//! - **[`render`]**: Content negotiation between JSON and the `<option>`
//!   fragment format the select-list frontend consumes
//!
//! Every route is a GET; the service is a read facade with no write surface.

pub mod handlers;
pub mod render;
