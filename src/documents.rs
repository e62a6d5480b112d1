//! Document operations.
//!
//! This module provides the DocumentsApi for creating, reading, moving,
//! cancelling and downloading documents, and for inspecting their signatures.

use crate::client::{query_pairs, Client};
use crate::error::{Result, SignerError};
use crate::types::{
    ActionUrlRequest, ActionUrlResponse, BatchItemResultModel, CancelDocumentRequest,
    CreateDocumentRequest, CreateDocumentResult, DocumentAddVersionRequest,
    DocumentContentModel, DocumentDownloadTypes, DocumentListModel, DocumentModel,
    DocumentSignaturesInfoModel, ListDocumentsQuery, ListResponse, MoveDocumentBatchRequest,
    MoveDocumentRequest, NotifiedEmailsEditRequest, RefusalRequest, SignaturesInfoRequest,
    SignerModel, TicketModel,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Client for document operations.
///
/// Access via `client.documents()`.
pub struct DocumentsApi {
    client: Client,
}

impl DocumentsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create documents from previously uploaded files.
    ///
    /// The service creates one document per entry in `request.files` and
    /// answers with one result per document.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lacuna_signer::{Client, types::{CreateDocumentRequest, FileUploadModel}};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-app|xxxxxxxx")?;
    ///
    ///     let results = client.documents().create(CreateDocumentRequest {
    ///         files: vec![FileUploadModel {
    ///             id: "upload-id".to_string(),
    ///             name: "contract.pdf".to_string(),
    ///             content_type: "application/pdf".to_string(),
    ///             display_name: None,
    ///         }],
    ///         title: Some("Employment Contract".to_string()),
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     println!("Created document {}", results[0].document_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: CreateDocumentRequest) -> Result<Vec<CreateDocumentResult>> {
        self.client.post("/api/documents", &request).await
    }

    /// Get a document by ID.
    pub async fn get(&self, document_id: &str) -> Result<DocumentModel> {
        self.client
            .get(&format!("/api/documents/{}", urlencoding::encode(document_id)))
            .await
    }

    /// List documents, optionally filtered.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lacuna_signer::{Client, types::{DocumentStatus, ListDocumentsQuery}};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-app|xxxxxxxx")?;
    ///
    ///     let pending = client.documents().list(ListDocumentsQuery {
    ///         status: Some(DocumentStatus::Pending),
    ///         limit: Some(10),
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     for doc in pending.items() {
    ///         println!("{}: {:?}", doc.id, doc.name);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list(&self, query: ListDocumentsQuery) -> Result<ListResponse<DocumentListModel>> {
        self.client
            .get_with_query("/api/documents", query_pairs(&query)?)
            .await
    }

    /// Delete a document.
    pub async fn delete(&self, document_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/documents/{}", urlencoding::encode(document_id)))
            .await
    }

    /// Download the raw content of a document.
    pub async fn content(
        &self,
        document_id: &str,
        download_type: DocumentDownloadTypes,
    ) -> Result<Vec<u8>> {
        self.client
            .get_bytes(
                &format!("/api/documents/{}/content", urlencoding::encode(document_id)),
                query_pairs(&DownloadQuery { download_type })?,
            )
            .await
    }

    /// Download the content of a document, base64-encoded by the service.
    pub async fn content_b64(
        &self,
        document_id: &str,
        download_type: DocumentDownloadTypes,
    ) -> Result<DocumentContentModel> {
        self.client
            .get_with_query(
                &format!("/api/documents/{}/content-b64", urlencoding::encode(document_id)),
                query_pairs(&DownloadQuery { download_type })?,
            )
            .await
    }

    /// Get a temporary download location for a document.
    pub async fn ticket(
        &self,
        document_id: &str,
        download_type: DocumentDownloadTypes,
    ) -> Result<TicketModel> {
        self.client
            .get_with_query(
                &format!("/api/documents/{}/ticket", urlencoding::encode(document_id)),
                query_pairs(&DownloadQuery { download_type })?,
            )
            .await
    }

    /// Get details of the signatures on a document.
    pub async fn signatures_details(&self, document_id: &str) -> Result<DocumentSignaturesInfoModel> {
        self.client
            .get(&format!("/api/documents/{}/signatures-details", urlencoding::encode(document_id)))
            .await
    }

    /// Get the signatures of a document by its public verification key.
    pub async fn signatures_by_key(&self, key: &str) -> Result<DocumentSignaturesInfoModel> {
        self.client
            .get(&format!("/api/documents/keys/{}/signatures", urlencoding::encode(key)))
            .await
    }

    /// Validate the signatures of an uploaded file.
    pub async fn validate_signatures(&self, request: SignaturesInfoRequest) -> Result<Vec<SignerModel>> {
        self.client
            .post("/api/documents/validate-signatures", &request)
            .await
    }

    /// Get the URL a participant uses to act on a document.
    pub async fn action_url(
        &self,
        document_id: &str,
        request: ActionUrlRequest,
    ) -> Result<ActionUrlResponse> {
        self.client
            .post(&format!("/api/documents/{}/action-url", urlencoding::encode(document_id)), &request)
            .await
    }

    /// Move a document into a folder.
    pub async fn move_to_folder(&self, document_id: &str, request: MoveDocumentRequest) -> Result<()> {
        self.client
            .post_unit(&format!("/api/documents/{}/folder", urlencoding::encode(document_id)), &request)
            .await
    }

    /// Move several documents into a folder.
    pub async fn move_batch_to_folder(
        &self,
        request: MoveDocumentBatchRequest,
    ) -> Result<Vec<BatchItemResultModel>> {
        self.client
            .post("/api/documents/batch/folder", &request)
            .await
    }

    /// Cancel a document.
    ///
    /// **Warning:** A cancelled document cannot be signed anymore.
    pub async fn cancel(&self, document_id: &str, request: CancelDocumentRequest) -> Result<()> {
        self.client
            .post_unit(&format!("/api/documents/{}/cancellation", urlencoding::encode(document_id)), &request)
            .await
    }

    /// Refuse a document on behalf of the application.
    pub async fn refuse(&self, document_id: &str, request: RefusalRequest) -> Result<()> {
        self.client
            .post_unit(&format!("/api/documents/{}/refusal", urlencoding::encode(document_id)), &request)
            .await
    }

    /// Replace the addresses notified when the document is concluded.
    pub async fn update_notified_emails(
        &self,
        document_id: &str,
        request: NotifiedEmailsEditRequest,
    ) -> Result<()> {
        self.client
            .put_unit(&format!("/api/documents/{}/notified-emails", urlencoding::encode(document_id)), &request)
            .await
    }

    /// Add a new version of a document's file.
    pub async fn add_version(&self, document_id: &str, request: DocumentAddVersionRequest) -> Result<()> {
        self.client
            .post_unit(&format!("/api/documents/{}/versions", urlencoding::encode(document_id)), &request)
            .await
    }
}

#[derive(serde::Serialize)]
struct DownloadQuery {
    #[serde(rename = "type")]
    download_type: DocumentDownloadTypes,
}

impl DocumentContentModel {
    /// Decode the base64 content.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::UnexpectedResponse`] if the service sent no
    /// content and [`SignerError::Decode`] if it is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let encoded = self
            .bytes
            .as_deref()
            .ok_or_else(|| SignerError::UnexpectedResponse("document content is empty".to_string()))?;
        BASE64
            .decode(encoded)
            .map_err(|e| SignerError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_query() {
        let pairs = query_pairs(&DownloadQuery {
            download_type: DocumentDownloadTypes::PrinterFriendlyVersion,
        })
        .unwrap();
        assert_eq!(
            pairs,
            vec![("type".to_string(), "PrinterFriendlyVersion".to_string())]
        );
    }

    #[test]
    fn test_content_decode() {
        let content = DocumentContentModel {
            bytes: Some(BASE64.encode(b"%PDF-1.7")),
        };
        assert_eq!(content.decode().unwrap(), b"%PDF-1.7");

        let empty = DocumentContentModel { bytes: None };
        assert!(matches!(
            empty.decode(),
            Err(SignerError::UnexpectedResponse(_))
        ));
    }
}
