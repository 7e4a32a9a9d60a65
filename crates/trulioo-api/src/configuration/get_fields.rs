//! Field schema accepted for a configuration and country.

use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, json_output};
use trulioo_common::error::DecodeError;

/// JSON schema describing which `DataFields` a country accepts.
///
/// Returned as raw JSON; the schema shape varies per country.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetFields {
    #[builder(into)]
    pub configuration_name: String,
    #[builder(into)]
    pub country_code: String,
}

impl ApiRequest for GetFields {
    const SERVICE: Service = Service::Configuration;
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = serde_json::Value;

    fn segments(&self) -> Vec<&str> {
        vec![
            "fields",
            self.configuration_name.as_str(),
            self.country_code.as_str(),
        ]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}
