//! Axum route handlers for all endpoints.
//!
//! Query parameters keep the lenient semantics of the legacy frontend
//! contract: an id filter that is absent, unparseable, or `0` means "no
//! filter", and `activeOnly` is only true for the case-insensitive literal
//! `true`. The custom deserializers here implement that leniency so a bad
//! `labId=abc` degrades to the unfiltered list instead of a 400, which is
//! what the select-list frontend has always relied on.
//!
//! Path ids are different: `/project/{id}` with a non-numeric id is a
//! malformed request and rejects with 400 via axum's `Path` extractor.

use serde::{Deserialize, Deserializer};

pub mod labs;
pub mod projects;
pub mod tasks;
pub mod users;

/// Deserialize an optional id filter: absent, unparseable, or `0` all mean
/// "no filter".
pub(crate) fn lenient_id_filter<'de, D>(de: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.and_then(|s| s.parse::<i32>().ok()).filter(|id| *id != 0))
}

/// Deserialize the `activeOnly` flag: true only for the case-insensitive
/// literal `true`.
pub(crate) fn lenient_bool<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.is_some_and(|s| s.eq_ignore_ascii_case("true")))
}
