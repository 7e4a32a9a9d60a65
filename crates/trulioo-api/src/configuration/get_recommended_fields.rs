//! Fields recommended for the best match rate.

use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, json_output};
use trulioo_common::error::DecodeError;

/// Recommended subset of the field schema, as raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetRecommendedFields {
    #[builder(into)]
    pub configuration_name: String,
    #[builder(into)]
    pub country_code: String,
}

impl ApiRequest for GetRecommendedFields {
    const SERVICE: Service = Service::Configuration;
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = serde_json::Value;

    fn segments(&self) -> Vec<&str> {
        vec![
            "recommendedfields",
            self.configuration_name.as_str(),
            self.country_code.as_str(),
        ]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}
