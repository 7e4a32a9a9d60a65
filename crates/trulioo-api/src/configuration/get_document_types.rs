//! Identity document types accepted per country.

use std::collections::BTreeMap;

use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, json_output};
use trulioo_common::error::DecodeError;

/// Country code to accepted document types (`"Passport"`, `"DrivingLicence"`, ...).
pub type DocumentTypes = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetDocumentTypes {
    #[builder(into)]
    pub country_code: String,
}

impl ApiRequest for GetDocumentTypes {
    const SERVICE: Service = Service::Configuration;
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = DocumentTypes;

    fn segments(&self) -> Vec<&str> {
        vec!["documenttypes", self.country_code.as_str()]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_country_map() {
        let types =
            GetDocumentTypes::decode_output(br#"{"CA":["DrivingLicence","Passport"]}"#).unwrap();
        assert_eq!(types["CA"], ["DrivingLicence", "Passport"]);
    }
}
