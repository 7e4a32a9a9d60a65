use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, json_output};
use trulioo_common::error::DecodeError;

use super::CountrySubdivision;

/// States and provinces of a country, for `Location.StateProvinceCode`.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetCountrySubdivisions {
    #[builder(into)]
    pub country_code: String,
}

impl ApiRequest for GetCountrySubdivisions {
    const SERVICE: Service = Service::Configuration;
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = Vec<CountrySubdivision>;

    fn segments(&self) -> Vec<&str> {
        vec!["countrysubdivisions", self.country_code.as_str()]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}
