//! Repository implementations for database access.
//!
//! One repository per table, each wrapping a borrowed [`sqlx::PgPool`] and
//! exposing the read operations the API needs. Collection reads take a
//! filter struct; by-id reads return [`crate::db::errors::DbError::NotFound`]
//! when zero rows match, never a partially populated record.
//!
//! The optional id filters carry `Option`s end to end. The wire-level
//! sentinel (`labId=0` meaning "all labs") is normalized to `None` before a
//! filter is constructed, so a legitimate id value can never collide with
//! "no filter" down here.
//!
//! # Available Repositories
//!
//! - [`Labs`]: the lab list
//! - [`Projects`]: projects, filterable by lab and active state
//! - [`Tasks`]: tasks under a project
//! - [`Users`]: users, filterable by lab, active state, and lab role

pub mod labs;
pub mod projects;
pub mod tasks;
pub mod users;

pub use labs::Labs;
pub use projects::{ProjectFilter, Projects};
pub use tasks::{TaskFilter, Tasks};
pub use users::{UserFilter, Users};
