//! Database layer for read-only data access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the repository pattern: one repository per table, each issuing
//! parameterized queries and mapping rows into the record types in
//! [`models`].
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries & filters)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! Every operation is a single read; there are no writes and therefore no
//! transactions. Repositories borrow the shared [`sqlx::PgPool`] rather than
//! owning connections, so they are cheap to construct per request.
//!
//! The queries use the runtime `query_as` API (not the compile-time macros):
//! the crate has to build without a reachable database or an offline query
//! cache, and every query here is a fixed-shape select.

pub mod errors;
pub mod handlers;
pub mod models;
