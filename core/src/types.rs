//! Domain DTOs for the TODO API.
//!
//! # Design
//! `Task` mirrors the wire object field for field, with camelCase keys.
//! The public API emits numeric `userId` / `id` values while the client
//! models them as strings, so decoding accepts either and normalizes to a
//! string. Encoding always writes strings.

use serde::{Deserialize, Deserializer, Serialize};

/// A single TODO item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(deserialize_with = "string_or_integer")]
    pub user_id: String,
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a task. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(deserialize_with = "string_or_integer")]
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTask {
    pub fn new(user_id: impl Into<String>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            completed,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInteger {
    String(String),
    Unsigned(u64),
    Signed(i64),
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrInteger::deserialize(deserializer)? {
        StringOrInteger::String(s) => s,
        StringOrInteger::Unsigned(n) => n.to_string(),
        StringOrInteger::Signed(n) => n.to_string(),
    })
}
