//! Errors reported inside otherwise successful responses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An error the service attached to a result, at transaction, record or
/// datasource level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceError {
    /// Numeric error code, as sent (e.g. `"1001"`)
    #[serde(deserialize_with = "code_as_string")]
    pub code: String,
    /// Human-readable description
    #[serde(deserialize_with = "crate::nullable")]
    pub message: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ServiceError {}

/// Codes arrive as strings from some hosts and numbers from others.
fn code_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Code>::deserialize(deserializer)? {
        Some(Code::Text(text)) => text,
        Some(Code::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
