//! Typed bindings for the Trulioo v1 API.
//!
//! Each endpoint is a request struct implementing
//! [`ApiRequest`](trulioo_common::ApiRequest), grouped by the service it
//! lives under. Models follow the service's PascalCase JSON, including its
//! acronyms (`TransactionID`, `ISOLatin1Name`, `POBox`).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

pub mod configuration;
pub mod connection;
pub mod data_fields;
pub mod errors;
pub mod verification;

pub use data_fields::DataFields;
pub use errors::ServiceError;

/// Treat an explicit `null` like a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parse the service's `UploadedDt` timestamps.
///
/// Both RFC 3339 and offset-less timestamps are sent; the latter are UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
