//! Job records as returned by the scheduling API.

use serde::{Deserialize, Deserializer, Serialize};

/// Job type of the entries the selector works on.
pub const TEACHING_JOB_TYPE: &str = "Teaching";

/// A single job assigned to an assistant.
///
/// Field names on the wire are the API's PascalCase keys. Any field may be
/// missing or `null` depending on the job type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Session {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "StartDate", deserialize_with = "null_as_default")]
    pub start_timestamp: String,
    #[serde(rename = "EndDate", deserialize_with = "null_as_default")]
    pub end_timestamp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub job_type: String,
    #[serde(rename = "ClassTransactionDetailId", deserialize_with = "null_as_default")]
    pub external_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub campus: String,
    #[serde(deserialize_with = "null_as_default")]
    pub class: String,
    #[serde(deserialize_with = "null_as_default")]
    pub day: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub realization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub room: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shift: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subject: String,
}

impl Session {
    /// Case-insensitive check against [`TEACHING_JOB_TYPE`].
    pub fn is_teaching(&self) -> bool {
        self.job_type.eq_ignore_ascii_case(TEACHING_JOB_TYPE)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
