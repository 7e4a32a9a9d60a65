use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, json_output};
use trulioo_common::error::DecodeError;

use super::TransactionStatus;

/// Processing status of a transaction, typically one submitted with a callback.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetTransactionStatus {
    #[builder(into)]
    pub transaction_id: String,
}

impl ApiRequest for GetTransactionStatus {
    const SERVICE: Service = Service::Verifications;
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = TransactionStatus;

    fn segments(&self) -> Vec<&str> {
        vec!["transaction", self.transaction_id.as_str(), "status"]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}
