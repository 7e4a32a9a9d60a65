//! Document image stored on a transaction record.

use bytes::Bytes;
use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service};
use trulioo_common::error::DecodeError;

/// One of the document images (e.g. `DocumentFrontImage`) submitted with a
/// transaction, as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetTransactionRecordDocument {
    #[builder(into)]
    pub transaction_record_id: String,
    #[builder(into)]
    pub document_field: String,
}

impl ApiRequest for GetTransactionRecordDocument {
    const SERVICE: Service = Service::Verifications;
    const METHOD: ApiMethod = ApiMethod::Get;
    const ACCEPT: &'static str = "*/*";
    type Output = Bytes;

    fn segments(&self) -> Vec<&str> {
        vec![
            "transactionrecord",
            self.transaction_record_id.as_str(),
            self.document_field.as_str(),
        ]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        Ok(Bytes::copy_from_slice(body))
    }
}
