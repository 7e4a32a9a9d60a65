//! Verification submission and transaction lookups: `/verifications/v1/`.

pub mod get_document_download;
pub mod get_transaction_record;
pub mod get_transaction_record_address;
pub mod get_transaction_record_document;
pub mod get_transaction_record_verbose;
pub mod get_transaction_status;
pub mod verify;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ServiceError;

pub use verify::VerifyRequest;

/// Result of a verification submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct VerifyResult {
    #[serde(
        rename = "TransactionID",
        alias = "TransactionId",
        deserialize_with = "crate::nullable"
    )]
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_dt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(deserialize_with = "crate::nullable")]
    pub record: Record,
    #[serde(
        rename = "CustomerReferenceID",
        alias = "CustomerReferenceId",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_reference_id: Option<String>,
    #[serde(deserialize_with = "crate::nullable")]
    pub errors: Vec<ServiceError>,
}

impl VerifyResult {
    /// `UploadedDt` as a timestamp, when present and parseable.
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.uploaded_dt.as_deref().and_then(crate::parse_timestamp)
    }
}

/// A stored transaction record: the submitted input plus its results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransactionRecordResult {
    #[serde(
        rename = "TransactionID",
        alias = "TransactionId",
        deserialize_with = "crate::nullable"
    )]
    pub transaction_id: String,
    #[serde(deserialize_with = "crate::nullable")]
    pub input_fields: Vec<DataField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_dt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(deserialize_with = "crate::nullable")]
    pub record: Record,
    #[serde(
        rename = "CustomerReferenceID",
        alias = "CustomerReferenceId",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_reference_id: Option<String>,
    #[serde(deserialize_with = "crate::nullable")]
    pub errors: Vec<ServiceError>,
}

impl TransactionRecordResult {
    /// `UploadedDt` as a timestamp, when present and parseable.
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.uploaded_dt.as_deref().and_then(crate::parse_timestamp)
    }

    /// Value submitted for the named input field.
    pub fn input_value(&self, field_name: &str) -> Option<&str> {
        self.input_fields
            .iter()
            .find(|field| field.field_name == field_name)
            .map(|field| field.value.as_str())
    }
}

/// One submitted field as echoed back by the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataField {
    #[serde(deserialize_with = "crate::nullable")]
    pub field_name: String,
    #[serde(deserialize_with = "crate::nullable")]
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Record {
    #[serde(
        rename = "TransactionRecordID",
        alias = "TransactionRecordId",
        deserialize_with = "crate::nullable"
    )]
    pub transaction_record_id: String,
    /// `"match"` or `"nomatch"`
    #[serde(deserialize_with = "crate::nullable")]
    pub record_status: String,
    #[serde(deserialize_with = "crate::nullable")]
    pub datasource_results: Vec<DatasourceResult>,
    #[serde(deserialize_with = "crate::nullable")]
    pub errors: Vec<ServiceError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RecordRule>,
}

impl Record {
    /// Whether the record as a whole matched.
    pub fn is_match(&self) -> bool {
        self.record_status.eq_ignore_ascii_case("match")
    }

    /// Result from the named datasource.
    pub fn datasource(&self, name: &str) -> Option<&DatasourceResult> {
        self.datasource_results
            .iter()
            .find(|result| result.datasource_name == name)
    }
}

/// Rule that decided the record status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct RecordRule {
    #[serde(deserialize_with = "crate::nullable")]
    pub rule_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Outcome of checking the submitted data against one datasource.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct DatasourceResult {
    #[serde(deserialize_with = "crate::nullable")]
    pub datasource_name: String,
    #[serde(deserialize_with = "crate::nullable")]
    pub datasource_fields: Vec<DatasourceField>,
    #[serde(deserialize_with = "crate::nullable")]
    pub appended_fields: Vec<AppendedField>,
    #[serde(deserialize_with = "crate::nullable")]
    pub errors: Vec<ServiceError>,
    #[serde(deserialize_with = "crate::nullable")]
    pub field_groups: Vec<String>,
}

impl DatasourceResult {
    /// Status reported for the named field (`"match"`, `"nomatch"`, `"missing"`).
    pub fn field_status(&self, field_name: &str) -> Option<&str> {
        self.datasource_fields
            .iter()
            .find(|field| field.field_name == field_name)
            .map(|field| field.status.as_str())
    }

    /// Data the datasource appended under the given name.
    pub fn appended(&self, field_name: &str) -> Option<&AppendedData> {
        self.appended_fields
            .iter()
            .find(|field| field.field_name == field_name)
            .map(|field| &field.data)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct DatasourceField {
    #[serde(deserialize_with = "crate::nullable")]
    pub field_name: String,
    #[serde(deserialize_with = "crate::nullable")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_group: Option<String>,
}

/// Extra data a datasource returned, e.g. a cleansed address or watch-list hits.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppendedField {
    #[serde(deserialize_with = "crate::nullable")]
    pub field_name: String,
    pub data: AppendedData,
}

/// Appended data is usually a string, but some datasources (watch lists)
/// return structured JSON in the same slot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AppendedData {
    /// Plain value
    Text(String),
    /// Anything else, kept as raw JSON
    Structured(serde_json::Value),
}

impl Default for AppendedData {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl AppendedData {
    /// The plain value, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) => None,
        }
    }

    /// The structured value, if this is one.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Text(_) => None,
            Self::Structured(value) => Some(value),
        }
    }
}

/// Processing state of a (possibly asynchronous) transaction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransactionStatus {
    #[serde(deserialize_with = "crate::nullable")]
    pub transaction_id: String,
    #[serde(deserialize_with = "crate::nullable")]
    pub transaction_record_id: String,
    /// e.g. `"InProgress"`, `"Completed"`
    #[serde(deserialize_with = "crate::nullable")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_dt: Option<String>,
    #[serde(deserialize_with = "crate::nullable")]
    pub is_timed_out: bool,
}

impl TransactionStatus {
    /// Whether the service has finished processing the transaction.
    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case("completed")
    }

    /// `UploadedDt` as a timestamp, when present and parseable.
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.uploaded_dt.as_deref().and_then(crate::parse_timestamp)
    }
}
