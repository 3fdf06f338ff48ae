//! Identifier types shared across the api and db layers.
//!
//! The upstream tables key everything with 32-bit integer identity columns,
//! so these are plain aliases rather than newtypes. Filters over these ids
//! are `Option`s: the wire-level convention that `0` means "no filter" is
//! normalized to `None` at the API boundary and never reaches SQL.

pub type LabId = i32;
pub type ProjectId = i32;
pub type TaskId = i32;
pub type UserId = i32;
pub type LabRoleId = i32;
