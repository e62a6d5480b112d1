//! High-level operations.
//!
//! [`SignerClient`] composes several gateway calls into the common end-to-end
//! tasks: upload a file and create a document from it, attach a signature
//! flow, or do all of it in one call with [`SignerClient::sign_document_simple`].
//!
//! Composed operations run their steps in order and stop at the first error,
//! which is returned unchanged. Nothing is rolled back: resources created by
//! earlier steps stay on the server, and a `warn!` event names them.

use crate::client::{Client, ClientConfig, API_KEY_ENV};
use crate::documents::DocumentsApi;
use crate::error::{Result, SignerError};
use crate::flows::FlowsApi;
use crate::folders::FoldersApi;
use crate::marks::MarksSessionsApi;
use crate::notifications::NotificationsApi;
use crate::orgs::OrganizationsApi;
use crate::transport::Transport;
use crate::types::{
    ActionUrlRequest, AuthenticationTypes, BatchItemResultModel, CreateDocumentRequest,
    CreateDocumentResult, DocumentDownloadTypes, DocumentFlowCreateRequest, DocumentFlowModel,
    DocumentListModel, DocumentModel, DocumentSignaturesInfoModel, DocumentStatus, DocumentTypes,
    EmailListNotificationRequest, FileUploadModel, FlowActionCreateModel, FlowActionReminderRequest,
    FlowActionType, FolderCreateRequest, FolderDeleteRequest, FolderInfoModel, ListDocumentsQuery,
    ListQuery, ListResponse, MoveDocumentBatchRequest, MoveDocumentRequest, OrganizationInfoModel,
    OrganizationUserModel, ParticipantUserModel, SignatureTypes, SignaturesInfoRequest, SignerModel,
};
use crate::uploads::UploadsApi;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Name used for uploads whose source has no file name.
pub const DEFAULT_UPLOAD_NAME: &str = "uploaded_file";

/// Content to upload.
#[derive(Debug, Clone)]
pub enum UploadSource {
    /// A local file. Must exist when the upload starts.
    Path(PathBuf),
    /// Content already in memory.
    Bytes {
        name: Option<String>,
        content: Vec<u8>,
    },
}

impl UploadSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        UploadSource::Path(path.into())
    }

    pub fn bytes(content: impl Into<Vec<u8>>, name: Option<String>) -> Self {
        UploadSource::Bytes {
            name,
            content: content.into(),
        }
    }

    /// Read an open stream to its end.
    pub fn from_reader<R: Read>(mut reader: R, name: Option<String>) -> Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Ok(UploadSource::Bytes { name, content })
    }
}

impl From<PathBuf> for UploadSource {
    fn from(path: PathBuf) -> Self {
        UploadSource::Path(path)
    }
}

impl From<&Path> for UploadSource {
    fn from(path: &Path) -> Self {
        UploadSource::Path(path.to_path_buf())
    }
}

/// Result of [`SignerClient::upload_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Upload identifier to reference from document requests.
    pub id: String,
    /// File name sent with the upload.
    pub name: String,
    /// MIME type guessed from the file name.
    pub content_type: String,
}

/// One participant of a signature flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignerDescriptor {
    pub name: String,
    pub email: String,
    /// National identifier (CPF).
    pub identifier: Option<String>,
    /// Defaults to [`SignatureTypes::Digital`].
    pub signature_type: Option<SignatureTypes>,
    /// Defaults to [`AuthenticationTypes::Email`].
    pub authentication_type: Option<AuthenticationTypes>,
}

impl SignerDescriptor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn signature_type(mut self, signature_type: SignatureTypes) -> Self {
        self.signature_type = Some(signature_type);
        self
    }

    pub fn authentication_type(mut self, authentication_type: AuthenticationTypes) -> Self {
        self.authentication_type = Some(authentication_type);
        self
    }
}

/// Metadata of a document created by [`SignerClient::create_document`].
#[derive(Debug, Clone, Default)]
pub struct NewDocument {
    pub title: String,
    pub description: Option<String>,
    pub document_type: Option<DocumentTypes>,
    pub folder_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub notified_emails: Option<Vec<String>>,
}

impl NewDocument {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Optional settings of [`SignerClient::create_signature_flow`].
#[derive(Debug, Clone, Default)]
pub struct FlowOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    /// ISO-8601 expiration date.
    pub expires_at: Option<String>,
}

/// Input of [`SignerClient::sign_document_simple`].
#[derive(Debug, Clone)]
pub struct SimpleSignRequest {
    pub source: UploadSource,
    pub title: String,
    /// Signers, in signing order.
    pub signers: Vec<SignerDescriptor>,
    /// When set, a folder with this name is created and the document placed in it.
    pub folder_name: Option<String>,
}

/// Output of [`SignerClient::sign_document_simple`].
#[derive(Debug, Clone)]
pub struct SignedDocument {
    pub document: CreateDocumentResult,
    pub flow: DocumentFlowModel,
    pub folder_id: Option<String>,
}

/// Output of [`SignerClient::get_document_status`].
#[derive(Debug, Clone)]
pub struct DocumentStatusReport {
    pub document: DocumentModel,
    pub signatures: DocumentSignaturesInfoModel,
    pub status: Option<DocumentStatus>,
    pub is_concluded: bool,
}

/// Build one signer flow action per descriptor.
///
/// Steps follow input order starting at 1. The list is neither re-sorted nor
/// deduplicated.
pub fn build_flow_actions(signers: &[SignerDescriptor]) -> Vec<FlowActionCreateModel> {
    signers
        .iter()
        .zip(1u32..)
        .map(|(signer, step)| FlowActionCreateModel {
            action_type: FlowActionType::Signer,
            step,
            user: Some(ParticipantUserModel {
                name: signer.name.clone(),
                email: signer.email.clone(),
                identifier: signer.identifier.clone(),
                phone: None,
            }),
            signature_type: Some(signer.signature_type.unwrap_or_default()),
            authentication_type: Some(signer.authentication_type.unwrap_or_default()),
            ..Default::default()
        })
        .collect()
}

/// Guess a MIME type from a file name.
pub fn content_type_for(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("xml") => "application/xml",
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

/// High-level Signer client.
///
/// Owns the transport: dropping the client, or calling
/// [`close`](SignerClient::close), releases it exactly once. Gateway handles
/// obtained from this client stop working once it is released.
///
/// # Example
///
/// ```rust,no_run
/// use lacuna_signer::{SignerClient, SignerDescriptor, SimpleSignRequest, UploadSource};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SignerClient::new("your-app|xxxxxxxx")?;
///
///     let signed = client.sign_document_simple(SimpleSignRequest {
///         source: UploadSource::path("contract.pdf"),
///         title: "Employment Contract".to_string(),
///         signers: vec![
///             SignerDescriptor::new("Jack Bauer", "jack.bauer@mailinator.com")
///                 .identifier("75502846369"),
///         ],
///         folder_name: Some("Contracts".to_string()),
///     }).await?;
///
///     println!("Document {} / flow {}", signed.document.document_id, signed.flow.id);
///     client.close();
///     Ok(())
/// }
/// ```
pub struct SignerClient {
    client: Client,
    released: bool,
}

impl SignerClient {
    /// Create a client with default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Ok(Self::from_client(Client::with_config(api_key, config)?))
    }

    /// Create a client from `SIGNER_API_KEY`, `SIGNER_BASE_URL` and
    /// `SIGNER_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::Config`] if the API key is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| SignerError::Config(format!("{API_KEY_ENV} is not set")))?;
        Self::with_config(api_key, ClientConfig::from_env()?)
    }

    /// Create a client over a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::from_client(Client::with_transport(transport))
    }

    fn from_client(client: Client) -> Self {
        Self {
            client,
            released: false,
        }
    }

    /// The underlying gateway handle.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn documents(&self) -> DocumentsApi {
        self.client.documents()
    }

    pub fn flows(&self) -> FlowsApi {
        self.client.flows()
    }

    pub fn folders(&self) -> FoldersApi {
        self.client.folders()
    }

    pub fn uploads(&self) -> UploadsApi {
        self.client.uploads()
    }

    pub fn notifications(&self) -> NotificationsApi {
        self.client.notifications()
    }

    pub fn organizations(&self) -> OrganizationsApi {
        self.client.organizations()
    }

    pub fn marks_sessions(&self) -> MarksSessionsApi {
        self.client.marks_sessions()
    }

    // ========================================================================
    // Uploads and documents
    // ========================================================================

    /// Upload a file or in-memory content.
    ///
    /// A path that does not name an existing file fails with
    /// [`SignerError::FileNotFound`] before any request is sent.
    pub async fn upload_file(&self, source: UploadSource) -> Result<UploadedFile> {
        let (name, content) = match source {
            UploadSource::Path(path) => {
                match tokio::fs::metadata(&path).await {
                    Ok(meta) if meta.is_file() => {}
                    Ok(_) => return Err(SignerError::FileNotFound(path)),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        return Err(SignerError::FileNotFound(path));
                    }
                    Err(e) => return Err(e.into()),
                }
                let content = tokio::fs::read(&path).await?;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string());
                (name, content)
            }
            UploadSource::Bytes { name, content } => (
                name.unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string()),
                content,
            ),
        };

        let upload = self.client.uploads().upload(&content, Some(name.as_str())).await?;
        info!(upload_id = %upload.id, name = %name, size = content.len(), "File uploaded");

        Ok(UploadedFile {
            id: upload.id,
            content_type: content_type_for(&name).to_string(),
            name,
        })
    }

    /// Upload `source` and create a document from it.
    ///
    /// The document request references the upload returned by the first
    /// step. If the upload fails, no document request is sent.
    pub async fn create_document(
        &self,
        source: UploadSource,
        document: NewDocument,
    ) -> Result<CreateDocumentResult> {
        let upload = self.upload_file(source).await?;

        let request = CreateDocumentRequest {
            files: vec![FileUploadModel {
                id: upload.id.clone(),
                name: upload.name,
                content_type: upload.content_type,
                display_name: Some(document.title.clone()),
            }],
            title: Some(document.title),
            description: document.description,
            document_type: document.document_type,
            folder_id: document.folder_id,
            tags: document.tags,
            notified_emails: document.notified_emails,
            ..Default::default()
        };

        let created = self
            .client
            .documents()
            .create(request)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                SignerError::UnexpectedResponse("document creation returned no results".to_string())
            })?;

        info!(document_id = %created.document_id, upload_id = %upload.id, "Document created");
        Ok(created)
    }

    pub async fn get_document(&self, document_id: &str) -> Result<DocumentModel> {
        self.client.documents().get(document_id).await
    }

    pub async fn list_documents(
        &self,
        query: ListDocumentsQuery,
    ) -> Result<ListResponse<DocumentListModel>> {
        self.client.documents().list(query).await
    }

    /// Download the original content of a document, optionally saving it.
    pub async fn download_document(
        &self,
        document_id: &str,
        output_path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let content = self
            .client
            .documents()
            .content(document_id, DocumentDownloadTypes::Original)
            .await?;

        if let Some(path) = output_path {
            tokio::fs::write(path, &content).await?;
            info!(document_id, path = %path.display(), "Document saved");
        }

        Ok(content)
    }

    pub async fn delete_document(&self, document_id: &str) -> Result<()> {
        self.client.documents().delete(document_id).await
    }

    pub async fn move_document_to_folder(&self, document_id: &str, folder_id: &str) -> Result<()> {
        self.client
            .documents()
            .move_to_folder(
                document_id,
                MoveDocumentRequest {
                    folder_id: Some(folder_id.to_string()),
                },
            )
            .await
    }

    pub async fn move_documents_to_folder(
        &self,
        document_ids: Vec<String>,
        folder_id: &str,
    ) -> Result<Vec<BatchItemResultModel>> {
        self.client
            .documents()
            .move_batch_to_folder(MoveDocumentBatchRequest {
                documents: document_ids,
                folder_id: Some(folder_id.to_string()),
            })
            .await
    }

    /// Get the URL a participant uses to act on a document.
    pub async fn get_action_url(&self, document_id: &str, flow_action_id: &str) -> Result<String> {
        let response = self
            .client
            .documents()
            .action_url(
                document_id,
                ActionUrlRequest {
                    flow_action_id: Some(flow_action_id.to_string()),
                    ..Default::default()
                },
            )
            .await?;
        Ok(response.url)
    }

    /// Upload signed content and validate the signatures it carries.
    pub async fn validate_signatures(&self, content: &[u8], name: &str) -> Result<Vec<SignerModel>> {
        let upload = self
            .upload_file(UploadSource::bytes(content, Some(name.to_string())))
            .await?;

        self.client
            .documents()
            .validate_signatures(SignaturesInfoRequest {
                file_id: upload.id,
                mime_type: upload.content_type,
            })
            .await
    }

    /// Fetch document metadata and signature details together.
    ///
    /// Both reads are independent and are issued concurrently.
    pub async fn get_document_status(&self, document_id: &str) -> Result<DocumentStatusReport> {
        let documents = self.client.documents();
        let (document, signatures) = tokio::try_join!(
            documents.get(document_id),
            documents.signatures_details(document_id)
        )?;

        let status = document.status;
        Ok(DocumentStatusReport {
            is_concluded: status == Some(DocumentStatus::Concluded) || document.is_concluded,
            status,
            document,
            signatures,
        })
    }

    // ========================================================================
    // Flows
    // ========================================================================

    /// Create a signature flow for a document.
    ///
    /// Each signer gets a flow action whose step is its 1-based position in
    /// `signers`.
    pub async fn create_signature_flow(
        &self,
        document_id: &str,
        signers: &[SignerDescriptor],
        options: FlowOptions,
    ) -> Result<DocumentFlowModel> {
        let request = DocumentFlowCreateRequest {
            name: options.name,
            description: options.description,
            document_id: Some(document_id.to_string()),
            expiration_date: options.expires_at,
            flow_actions: build_flow_actions(signers),
        };

        let flow = self.client.flows().create(request).await?;
        info!(flow_id = %flow.id, document_id, signers = signers.len(), "Signature flow created");
        Ok(flow)
    }

    pub async fn get_signature_flow(&self, flow_id: &str) -> Result<DocumentFlowModel> {
        self.client.flows().get(flow_id).await
    }

    pub async fn list_signature_flows(&self, limit: u32, offset: u32) -> Result<Vec<DocumentFlowModel>> {
        Ok(self
            .client
            .flows()
            .list(ListQuery::page(limit, offset))
            .await?
            .into_items())
    }

    pub async fn cancel_signature_flow(&self, flow_id: &str) -> Result<()> {
        self.client.flows().delete(flow_id).await
    }

    // ========================================================================
    // Folders
    // ========================================================================

    pub async fn create_folder(&self, name: &str, parent_id: Option<&str>) -> Result<FolderInfoModel> {
        let folder = self
            .client
            .folders()
            .create(FolderCreateRequest {
                name: name.to_string(),
                parent_id: parent_id.map(str::to_string),
                ..Default::default()
            })
            .await?;
        info!(folder_id = %folder.id, name, "Folder created");
        Ok(folder)
    }

    pub async fn get_folder(&self, folder_id: &str) -> Result<FolderInfoModel> {
        self.client.folders().get(folder_id).await
    }

    pub async fn list_folders(&self, limit: u32, offset: u32) -> Result<Vec<FolderInfoModel>> {
        Ok(self
            .client
            .folders()
            .list(ListQuery::page(limit, offset))
            .await?
            .into_items())
    }

    pub async fn delete_folder(&self, folder_id: &str, delete_documents: bool) -> Result<()> {
        self.client
            .folders()
            .delete(folder_id, FolderDeleteRequest { delete_documents })
            .await
    }

    // ========================================================================
    // Notifications and organization
    // ========================================================================

    pub async fn send_reminder(&self, flow_action_id: &str, message: Option<&str>) -> Result<()> {
        self.client
            .notifications()
            .flow_action_reminder(FlowActionReminderRequest {
                flow_action_id: flow_action_id.to_string(),
                message: message.map(str::to_string),
            })
            .await
    }

    pub async fn notify_pending_users(&self, emails: Vec<String>) -> Result<()> {
        self.client
            .notifications()
            .notify_pending_users(EmailListNotificationRequest { emails })
            .await
    }

    pub async fn get_organization_info(&self) -> Result<OrganizationInfoModel> {
        self.client.organizations().get_info().await
    }

    pub async fn list_organization_users(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<OrganizationUserModel>> {
        Ok(self
            .client
            .organizations()
            .list_users(ListQuery::page(limit, offset))
            .await?
            .into_items())
    }

    // ========================================================================
    // Composed operations
    // ========================================================================

    /// Create an optional folder, a document in it, and a signature flow.
    ///
    /// Each step uses the identifier produced by the previous one and runs
    /// only if that step succeeded.
    pub async fn sign_document_simple(&self, request: SimpleSignRequest) -> Result<SignedDocument> {
        let folder_id = match &request.folder_name {
            Some(name) => Some(self.create_folder(name, None).await?.id),
            None => None,
        };

        let document = self
            .create_document(
                request.source,
                NewDocument {
                    title: request.title,
                    folder_id: folder_id.clone(),
                    ..Default::default()
                },
            )
            .await
            .inspect_err(|e| {
                if let Some(folder_id) = &folder_id {
                    warn!(folder_id = %folder_id, error = %e, "Document creation failed, folder left in place");
                }
            })?;

        let flow = self
            .create_signature_flow(&document.document_id, &request.signers, FlowOptions::default())
            .await
            .inspect_err(|e| {
                warn!(
                    document_id = %document.document_id,
                    folder_id = ?folder_id,
                    error = %e,
                    "Flow creation failed, document left in place"
                );
            })?;

        Ok(SignedDocument {
            document,
            flow,
            folder_id,
        })
    }

    // ========================================================================
    // Lifetime
    // ========================================================================

    /// Release the transport.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.client.close();
        }
    }
}

impl Drop for SignerClient {
    fn drop(&mut self) {
        self.release();
    }
}
