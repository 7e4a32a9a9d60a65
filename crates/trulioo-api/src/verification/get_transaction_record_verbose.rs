//! Stored transaction record with verbose diagnostics.

use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, json_output};
use trulioo_common::error::DecodeError;

use super::TransactionRecordResult;

/// Like [`GetTransactionRecord`](super::get_transaction_record::GetTransactionRecord),
/// but every datasource reports its per-field statuses.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetTransactionRecordVerbose {
    #[builder(into)]
    pub transaction_record_id: String,
}

impl ApiRequest for GetTransactionRecordVerbose {
    const SERVICE: Service = Service::Verifications;
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = TransactionRecordResult;

    fn segments(&self) -> Vec<&str> {
        vec![
            "transactionrecord",
            self.transaction_record_id.as_str(),
            "verbose",
        ]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        json_output(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_ends_with_verbose() {
        let req = GetTransactionRecordVerbose::new()
            .transaction_record_id("rec-1")
            .build();
        assert_eq!(req.segments(), ["transactionrecord", "rec-1", "verbose"]);
    }
}
