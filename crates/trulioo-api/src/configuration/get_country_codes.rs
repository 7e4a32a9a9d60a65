//! Countries enabled for a configuration.

use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, json_output};
use trulioo_common::error::DecodeError;

/// ISO 3166-1 alpha-2 codes of the countries the account may verify in.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetCountryCodes {
    #[builder(into)]
    pub configuration_name: String,
}

impl ApiRequest for GetCountryCodes {
    const SERVICE: Service = Service::Configuration;
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = Vec<String>;

    fn segments(&self) -> Vec<&str> {
        vec!["countrycodes", self.configuration_name.as_str()]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}
