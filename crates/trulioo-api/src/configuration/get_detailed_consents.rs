use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, json_output};
use trulioo_common::error::DecodeError;

use super::Consent;

/// Consents with the text and link to show the end user.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetDetailedConsents {
    #[builder(into)]
    pub configuration_name: String,
    #[builder(into)]
    pub country_code: String,
}

impl ApiRequest for GetDetailedConsents {
    const SERVICE: Service = Service::Configuration;
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = Vec<Consent>;

    fn segments(&self) -> Vec<&str> {
        vec![
            "detailedConsents",
            self.configuration_name.as_str(),
            self.country_code.as_str(),
        ]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}
