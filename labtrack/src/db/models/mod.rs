//! Database record structures matching the upstream table schemas.
//!
//! Every record serializes to JSON with camelCase field names, which is the
//! wire format the select-list frontend consumes. Nullable columns are
//! `Option`s and serialize as `null`, never as an empty string or zero, so
//! absence stays distinguishable after a round-trip.

pub mod labs;
pub mod projects;
pub mod tasks;
pub mod users;

pub use labs::Lab;
pub use projects::Project;
pub use tasks::Task;
pub use users::User;
