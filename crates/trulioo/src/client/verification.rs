use trulioo_api::verification::{
    TransactionRecordResult, TransactionStatus, VerifyRequest, VerifyResult,
    get_document_download::{DownloadedDocument, GetDocumentDownload},
    get_transaction_record::GetTransactionRecord,
    get_transaction_record_address::GetTransactionRecordAddress,
    get_transaction_record_document::GetTransactionRecordDocument,
    get_transaction_record_verbose::GetTransactionRecordVerbose,
    get_transaction_status::GetTransactionStatus,
};
use trulioo_common::{error::TruliooResult, http_client::HttpClient};

use super::TruliooApiClient;

/// Verification submission and transaction lookups, under `/verifications/v1/`.
pub struct VerificationApi<'a, C: HttpClient> {
    client: &'a TruliooApiClient<C>,
}

impl<'a, C: HttpClient + Sync> VerificationApi<'a, C> {
    pub(crate) fn new(client: &'a TruliooApiClient<C>) -> Self {
        Self { client }
    }

    /// Submit data for verification.
    ///
    /// With a callback URL set the service answers immediately and the
    /// outcome is fetched later with [`get_transaction_status`](Self::get_transaction_status).
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(self, request), fields(country = %request.country_code, demo = request.demo)))]
    pub async fn verify(&self, request: &VerifyRequest) -> TruliooResult<VerifyResult> {
        let result = self.client.call(request).await?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            transaction_id = %result.transaction_id,
            record_status = %result.record.record_status,
            "verification completed"
        );
        Ok(result)
    }

    /// The stored record of a verification.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_transaction_record(
        &self,
        transaction_record_id: &str,
    ) -> TruliooResult<TransactionRecordResult> {
        let request = GetTransactionRecord::new()
            .transaction_record_id(transaction_record_id)
            .build();
        self.client.call(&request).await
    }

    /// The stored record with per-field datasource statuses.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_transaction_record_verbose(
        &self,
        transaction_record_id: &str,
    ) -> TruliooResult<TransactionRecordResult> {
        let request = GetTransactionRecordVerbose::new()
            .transaction_record_id(transaction_record_id)
            .build();
        self.client.call(&request).await
    }

    /// The stored record including the cleansed address.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_transaction_record_address(
        &self,
        transaction_record_id: &str,
    ) -> TruliooResult<TransactionRecordResult> {
        let request = GetTransactionRecordAddress::new()
            .transaction_record_id(transaction_record_id)
            .build();
        self.client.call(&request).await
    }

    /// A document image submitted with a record, e.g. `DocumentFrontImage`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_transaction_record_document(
        &self,
        transaction_record_id: &str,
        document_field: &str,
    ) -> TruliooResult<DownloadedDocument> {
        let request = GetTransactionRecordDocument::new()
            .transaction_record_id(transaction_record_id)
            .document_field(document_field)
            .build();
        let (bytes, content_type) = self.client.send(&request).await?.into_parts();
        Ok(DownloadedDocument::new(bytes, content_type))
    }

    /// Processing status of a transaction.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_transaction_status(
        &self,
        transaction_id: &str,
    ) -> TruliooResult<TransactionStatus> {
        let request = GetTransactionStatus::new()
            .transaction_id(transaction_id)
            .build();
        self.client.call(&request).await
    }

    /// Download a document attached to a record.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_document_download(
        &self,
        transaction_record_id: &str,
        field_name: &str,
    ) -> TruliooResult<DownloadedDocument> {
        let request = GetDocumentDownload::new()
            .transaction_record_id(transaction_record_id)
            .field_name(field_name)
            .build();
        let (bytes, content_type) = self.client.send(&request).await?.into_parts();
        Ok(DownloadedDocument::new(bytes, content_type))
    }
}
