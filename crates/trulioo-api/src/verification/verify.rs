//! Identity verification submission.

use serde::{Deserialize, Serialize};
use trulioo_common::endpoint::{ApiMethod, ApiRequest, JSON, Service, json_output};
use trulioo_common::error::{DecodeError, EncodeError};

use super::VerifyResult;
use crate::DataFields;

/// Submit a person's (or business's) data for verification in one country.
///
/// ```
/// use trulioo_api::data_fields::PersonInfo;
/// use trulioo_api::verification::VerifyRequest;
/// use trulioo_api::DataFields;
///
/// let request = VerifyRequest::new()
///     .accept_trulioo_terms_and_conditions(true)
///     .verbose_mode(true)
///     .configuration_name("Identity Verification")
///     .country_code("DE")
///     .data_fields(
///         DataFields::new()
///             .person_info(
///                 PersonInfo::new()
///                     .first_given_name("test")
///                     .first_sur_name("test")
///                     .year_of_birth(1980)
///                     .build(),
///             )
///             .build(),
///     )
///     .build();
/// assert_eq!(request.country_code, "DE");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyRequest {
    #[builder(default)]
    #[serde(default)]
    pub accept_trulioo_terms_and_conditions: bool,
    /// Run against test entities instead of live datasources
    #[builder(default)]
    #[serde(default)]
    pub demo: bool,
    /// Ask for extended diagnostic detail in the result
    #[builder(default)]
    #[serde(default)]
    pub verbose_mode: bool,
    /// Return the cleansed address in the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleansed_address: Option<bool>,
    /// Makes the call asynchronous; results are fetched by transaction id
    #[serde(rename = "CallBackUrl", default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub callback_url: Option<String>,
    /// Seconds the service may spend before timing the transaction out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[builder(into)]
    pub configuration_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_for_data_sources: Option<Vec<String>>,
    #[builder(into)]
    pub country_code: String,
    #[serde(
        rename = "CustomerReferenceID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[builder(into)]
    pub customer_reference_id: Option<String>,
    #[builder(default)]
    #[serde(default)]
    pub data_fields: DataFields,
}

impl ApiRequest for VerifyRequest {
    const SERVICE: Service = Service::Verifications;
    const METHOD: ApiMethod = ApiMethod::Post(JSON);
    type Output = VerifyResult;

    fn segments(&self) -> Vec<&str> {
        vec!["verify"]
    }

    fn encode_body(&self) -> Result<Option<Vec<u8>>, EncodeError> {
        Ok(Some(serde_json::to_vec(self)?))
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fields::PersonInfo;
    use serde_json::json;

    #[test]
    fn body_matches_service_schema() {
        let request = VerifyRequest::new()
            .accept_trulioo_terms_and_conditions(true)
            .verbose_mode(true)
            .configuration_name("Identity Verification")
            .country_code("DE")
            .consent_for_data_sources(vec!["Birth Registry".to_owned()])
            .customer_reference_id("ref-42")
            .data_fields(
                DataFields::new()
                    .person_info(
                        PersonInfo::new()
                            .first_given_name("test")
                            .first_sur_name("test")
                            .year_of_birth(1980)
                            .build(),
                    )
                    .build(),
            )
            .build();

        let body = request.encode_body().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "AcceptTruliooTermsAndConditions": true,
                "Demo": false,
                "VerboseMode": true,
                "ConfigurationName": "Identity Verification",
                "ConsentForDataSources": ["Birth Registry"],
                "CountryCode": "DE",
                "CustomerReferenceID": "ref-42",
                "DataFields": {
                    "PersonInfo": {
                        "FirstGivenName": "test",
                        "FirstSurName": "test",
                        "YearOfBirth": 1980
                    }
                }
            })
        );
    }

    #[test]
    fn async_submission_carries_callback() {
        let request = VerifyRequest::new()
            .configuration_name("Identity Verification")
            .country_code("CA")
            .callback_url("https://example.test/hook")
            .timeout(60)
            .build();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["CallBackUrl"], "https://example.test/hook");
        assert_eq!(value["Timeout"], 60);
        assert_eq!(value["DataFields"], json!({}));
    }
}
