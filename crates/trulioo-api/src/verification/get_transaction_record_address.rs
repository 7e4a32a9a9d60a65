use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, json_output};
use trulioo_common::error::DecodeError;

use super::TransactionRecordResult;

/// Transaction record including the cleansed address, which datasources
/// report as appended fields.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetTransactionRecordAddress {
    #[builder(into)]
    pub transaction_record_id: String,
}

impl ApiRequest for GetTransactionRecordAddress {
    const SERVICE: Service = Service::Verifications;
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = TransactionRecordResult;

    fn segments(&self) -> Vec<&str> {
        vec![
            "transactionrecord",
            self.transaction_record_id.as_str(),
            "withaddress",
        ]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}
