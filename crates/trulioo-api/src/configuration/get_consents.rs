//! Datasources that need end-user consent.

use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, json_output};
use trulioo_common::error::DecodeError;

/// Names of the datasources needing consent, for `ConsentForDataSources`.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetConsents {
    #[builder(into)]
    pub configuration_name: String,
    #[builder(into)]
    pub country_code: String,
}

impl ApiRequest for GetConsents {
    const SERVICE: Service = Service::Configuration;
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = Vec<String>;

    fn segments(&self) -> Vec<&str> {
        vec![
            "consents",
            self.configuration_name.as_str(),
            self.country_code.as_str(),
        ]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}
