//! Download of a document attached to a transaction record.

use bytes::Bytes;
use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service};
use trulioo_common::error::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetDocumentDownload {
    #[builder(into)]
    pub transaction_record_id: String,
    #[builder(into)]
    pub field_name: String,
}

impl ApiRequest for GetDocumentDownload {
    const SERVICE: Service = Service::Verifications;
    const METHOD: ApiMethod = ApiMethod::Get;
    const ACCEPT: &'static str = "*/*";
    type Output = Bytes;

    fn segments(&self) -> Vec<&str> {
        vec![
            "documentdownload",
            self.transaction_record_id.as_str(),
            self.field_name.as_str(),
        ]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        Ok(Bytes::copy_from_slice(body))
    }
}

/// A downloaded document and the media type the service reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedDocument {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl DownloadedDocument {
    /// Pair a body with its `Content-Type`.
    pub fn new(bytes: Bytes, content_type: Option<String>) -> Self {
        Self {
            content_type,
            bytes,
        }
    }

    /// Whether nothing was returned.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File extension matching the media type, when it is a known one.
    pub fn extension(&self) -> Option<&'static str> {
        let media = self.content_type.as_deref()?.split(';').next()?.trim();
        match media.to_ascii_lowercase().as_str() {
            "application/pdf" => Some("pdf"),
            "image/jpeg" | "image/jpg" => Some("jpg"),
            "image/png" => Some("png"),
            "image/tiff" => Some("tiff"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_follows_media_type() {
        let doc = DownloadedDocument::new(
            Bytes::from_static(b"%PDF-1.7"),
            Some("application/pdf; charset=binary".into()),
        );
        assert_eq!(doc.extension(), Some("pdf"));
        assert!(!doc.is_empty());
        assert_eq!(DownloadedDocument::new(Bytes::new(), None).extension(), None);
    }

    #[test]
    fn segments_are_unescaped() {
        let req = GetDocumentDownload::new()
            .transaction_record_id("rec-1")
            .field_name("Document Front")
            .build();
        assert_eq!(req.segments(), ["documentdownload", "rec-1", "Document Front"]);
    }
}
