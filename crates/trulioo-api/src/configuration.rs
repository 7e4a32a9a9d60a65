//! Account configuration lookups: `/configuration/v1/`.
//!
//! Most endpoints are scoped by a configuration name (the product, e.g.
//! `"Identity Verification"`) and an ISO 3166-1 alpha-2 country code.

pub mod get_consents;
pub mod get_country_codes;
pub mod get_country_subdivisions;
pub mod get_datasources;
pub mod get_detailed_consents;
pub mod get_document_types;
pub mod get_fields;
pub mod get_recommended_fields;
pub mod get_test_entities;

use serde::{Deserialize, Serialize};

/// Configuration name used by most identity verification accounts.
pub const IDENTITY_VERIFICATION: &str = "Identity Verification";

/// A consent the end user must give before a datasource can be queried.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Consent {
    /// Datasource name, as passed in `ConsentForDataSources`
    #[serde(deserialize_with = "crate::nullable")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A state, province or similar region of a country.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct CountrySubdivision {
    #[serde(deserialize_with = "crate::nullable")]
    pub name: String,
    #[serde(deserialize_with = "crate::nullable")]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
}

/// A datasource group available for a country, with its field requirements.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct NormalizedDatasourceGroupCountry {
    #[serde(deserialize_with = "crate::nullable")]
    pub group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "crate::nullable")]
    pub required_fields: Vec<NormalizedDatasourceField>,
    #[serde(deserialize_with = "crate::nullable")]
    pub optional_fields: Vec<NormalizedDatasourceField>,
    #[serde(deserialize_with = "crate::nullable")]
    pub appended_fields: Vec<NormalizedDatasourceField>,
    #[serde(deserialize_with = "crate::nullable")]
    pub output_fields: Vec<NormalizedDatasourceField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct NormalizedDatasourceField {
    #[serde(deserialize_with = "crate::nullable")]
    pub field_name: String,
    #[serde(rename = "Type", deserialize_with = "crate::nullable")]
    pub field_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasource_group_tolerates_missing_and_null_lists() {
        let raw = r#"{
            "GroupName": "Credit Agency",
            "RequiredFields": [ { "FieldName": "FirstGivenName", "Type": "string" } ],
            "OptionalFields": null,
            "Coverage": "75%"
        }"#;
        let group: NormalizedDatasourceGroupCountry = serde_json::from_str(raw).unwrap();
        assert_eq!(group.group_name, "Credit Agency");
        assert_eq!(group.required_fields[0].field_type, "string");
        assert!(group.optional_fields.is_empty());
        assert!(group.output_fields.is_empty());
        assert_eq!(group.coverage.as_deref(), Some("75%"));
    }

    #[test]
    fn null_names_and_codes_decode_empty() {
        let consent: Consent = serde_json::from_str(r#"{ "Name": null }"#).unwrap();
        assert!(consent.name.is_empty());

        let subdivision: CountrySubdivision =
            serde_json::from_str(r#"{ "Name": "Ontario", "Code": null, "ParentCode": null }"#)
                .unwrap();
        assert_eq!(subdivision.name, "Ontario");
        assert!(subdivision.code.is_empty());
        assert!(subdivision.parent_code.is_none());

        let group: NormalizedDatasourceGroupCountry = serde_json::from_str(
            r#"{ "GroupName": null, "RequiredFields": [ { "FieldName": null, "Type": null } ] }"#,
        )
        .unwrap();
        assert!(group.group_name.is_empty());
        assert_eq!(group.required_fields[0], NormalizedDatasourceField::default());
    }
}
