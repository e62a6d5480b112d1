//! Type definitions for the Signer SDK.
//!
//! This module contains the request and response types used by the resource
//! gateways. Request types implement `Default` and list every recognized
//! field; optional fields left as `None` are not sent. Response types are
//! lenient: fields the service may omit resolve to `None` or an empty value.

use serde::{Deserialize, Serialize};

// ============================================================================
// Enumerations
// ============================================================================

/// Status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DocumentStatus {
    Pending,
    Concluded,
    Refused,
    Canceled,
    Expired,
    #[serde(other)]
    Unknown,
}

/// Business type of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DocumentTypes {
    Deed,
    PowerOfAttorney,
    Declaration,
    Receipt,
    Contract,
    Agreement,
    Proposal,
    Report,
    Invoice,
    MedicalReport,
    Prescription,
    #[serde(other)]
    Unknown,
}

/// Kind of folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FolderType {
    Document,
    Template,
    #[serde(other)]
    Unknown,
}

/// Role of a participant in a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum FlowActionType {
    #[default]
    Signer,
    Approver,
    SignRule,
    #[serde(other)]
    Unknown,
}

/// Kind of signature collected from a signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SignatureTypes {
    #[default]
    Digital,
    Electronic,
    #[serde(other)]
    Unknown,
}

/// How a signer proves their identity before signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum AuthenticationTypes {
    #[default]
    Email,
    #[serde(rename = "SMS")]
    Sms,
    AuthenticatorApp,
    Selfie,
    Datavalid,
    Pix,
    Liveness,
    #[serde(other)]
    Unknown,
}

/// Status of a single flow action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ActionStatus {
    Created,
    Pending,
    Completed,
    Refused,
    #[serde(other)]
    Unknown,
}

/// Which rendition of a document to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum DocumentDownloadTypes {
    #[default]
    Original,
    PrinterFriendlyVersion,
    Signatures,
    OriginalSignatures,
}

/// Sort order for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PaginationOrders {
    Asc,
    Desc,
}

// ============================================================================
// Errors
// ============================================================================

/// Error body returned with non-success responses.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorModel {
    /// Machine-readable error code (e.g. "DocumentNotFound").
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Additional details.
    #[serde(default)]
    pub details: Option<String>,
}

// ============================================================================
// Participants and flow actions
// ============================================================================

/// A participant of a flow (signer, approver, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantUserModel {
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// E-mail address.
    #[serde(default)]
    pub email: String,
    /// National identifier (CPF for Brazilian participants).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Phone number, used by SMS authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A flow action to be created.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowActionCreateModel {
    /// Role of the participant.
    #[serde(rename = "type")]
    pub action_type: FlowActionType,
    /// Execution order within the flow, starting at 1.
    pub step: u32,
    /// The participant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ParticipantUserModel>,
    /// Message shown to the participant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Kind of signature requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_type: Option<SignatureTypes>,
    /// Authentication required before signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<AuthenticationTypes>,
    /// Whether an electronic signature is accepted in place of a digital one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_electronic_signature: Option<bool>,
}

/// A flow action as returned by the service.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowActionModel {
    /// Flow action ID.
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "type")]
    pub action_type: Option<FlowActionType>,
    #[serde(default)]
    pub status: Option<ActionStatus>,
    /// Execution order within the flow.
    #[serde(default)]
    pub step: u32,
    #[serde(default)]
    pub user: Option<ParticipantUserModel>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub pending_date: Option<String>,
}

// ============================================================================
// Uploads
// ============================================================================

/// Request to upload base64-encoded content.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadBytesRequest {
    /// Base64-encoded file content.
    pub bytes: String,
    /// Original file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Upload ticket returned by the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadBytesModel {
    /// Opaque upload identifier, consumed by document creation.
    pub id: String,
}

/// Reference to uploaded content inside a document request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadModel {
    /// Upload identifier.
    pub id: String,
    /// File name.
    pub name: String,
    /// MIME type of the content.
    pub content_type: String,
    /// Name shown to participants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

// ============================================================================
// Documents
// ============================================================================

/// Request to create one or more documents.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    /// Uploaded files; one document is created per file.
    pub files: Vec<FileUploadModel>,
    /// Document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentTypes>,
    /// Folder the document is created in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Addresses notified when the document is concluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notified_emails: Option<Vec<String>>,
    /// Flow actions attached at creation time.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flow_actions: Vec<FlowActionCreateModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

/// One entry of the document creation response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentResult {
    /// ID of the created document.
    #[serde(alias = "id")]
    pub document_id: String,
    #[serde(default)]
    pub upload_id: Option<String>,
}

/// A document with its flow.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    #[serde(default)]
    pub is_concluded: bool,
    /// Key used to look up signatures publicly.
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub folder: Option<FolderInfoModel>,
    #[serde(default)]
    pub flow_actions: Vec<FlowActionModel>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub update_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

/// A document as returned by the list endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    #[serde(default)]
    pub is_concluded: bool,
    #[serde(default)]
    pub folder: Option<FolderInfoModel>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub update_date: Option<String>,
}

/// Base64-encoded document content.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContentModel {
    #[serde(default)]
    pub bytes: Option<String>,
}

/// Temporary download location for a document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketModel {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub expiration: Option<String>,
}

/// A signature found on a document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerModel {
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub signing_time: Option<String>,
    #[serde(default)]
    pub is_electronic: bool,
    #[serde(default)]
    pub certificate_thumbprint: Option<String>,
}

/// Signatures found on a document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSignaturesInfoModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub is_concluded: bool,
    #[serde(default)]
    pub signers: Vec<SignerModel>,
}

/// Request to validate the signatures of an uploaded file.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignaturesInfoRequest {
    /// Upload identifier of the file to validate.
    pub file_id: String,
    pub mime_type: String,
}

/// Request for a participant's action URL.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionUrlRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// URLs a participant uses to act on a document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionUrlResponse {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub embed_url: Option<String>,
}

/// Request to move a document into a folder.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDocumentRequest {
    /// Target folder; `None` moves the document out of any folder.
    pub folder_id: Option<String>,
}

/// Request to move several documents into a folder.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDocumentBatchRequest {
    pub documents: Vec<String>,
    pub folder_id: Option<String>,
}

/// Outcome of one item of a batch operation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemResultModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Request to cancel a document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelDocumentRequest {
    pub reason: String,
}

/// Request to refuse a document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefusalRequest {
    pub reason: String,
}

/// Request to replace the addresses notified about a document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifiedEmailsEditRequest {
    pub emails: Vec<String>,
}

/// Request to add a new version of a document's file.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAddVersionRequest {
    pub file: FileUploadModel,
}

/// Query parameters for listing documents.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_type: Option<FolderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentTypes>,
    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<PaginationOrders>,
}

// ============================================================================
// Flows
// ============================================================================

/// Request to create a signature flow.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFlowCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Document the flow applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    pub flow_actions: Vec<FlowActionCreateModel>,
}

/// Replacement data for an existing flow.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFlowData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flow_actions: Vec<FlowActionCreateModel>,
}

/// A signature flow.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFlowModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub flow_actions: Vec<FlowActionModel>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub update_date: Option<String>,
}

// ============================================================================
// Folders
// ============================================================================

/// Request to create a folder.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent folder for nested folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// A folder.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderInfoModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default, rename = "type")]
    pub folder_type: Option<FolderType>,
}

/// Request to delete a folder.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderDeleteRequest {
    /// Also delete the documents inside the folder.
    pub delete_documents: bool,
}

// ============================================================================
// Notifications
// ============================================================================

/// Request to remind a participant of a pending action.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowActionReminderRequest {
    pub flow_action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request to notify users with pending actions.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailListNotificationRequest {
    pub emails: Vec<String>,
}

// ============================================================================
// Organizations
// ============================================================================

/// The organization the API key belongs to.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInfoModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// National registration number (CNPJ).
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A user of the organization.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUserModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
}

/// Request to add a user to the organization.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUserPostRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

// ============================================================================
// Marks sessions
// ============================================================================

/// Request to open a session for positioning signature marks.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarksSessionCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub document_ids: Vec<String>,
    /// Where the user is sent after positioning marks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

/// Response of marks session creation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarksSessionCreateResponse {
    #[serde(alias = "sessionId")]
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A marks session.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarksSessionModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub document_ids: Vec<String>,
}

// ============================================================================
// Pagination
// ============================================================================

/// Query parameters shared by the flow, folder and user list endpoints.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<PaginationOrders>,
}

impl ListQuery {
    /// A query for one page of `limit` items starting at `offset`.
    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            ..Default::default()
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedSearchResponse<T> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Total number of items matching the query.
    #[serde(default)]
    pub total_count: u64,
}

/// Response of a list endpoint.
///
/// The service answers list calls either with a paginated envelope or with a
/// bare JSON array; which one is decided when the body is decoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated(PaginatedSearchResponse<T>),
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Items of this response, regardless of its shape.
    pub fn items(&self) -> &[T] {
        match self {
            ListResponse::Paginated(page) => &page.items,
            ListResponse::Bare(items) => items,
        }
    }

    /// Consume the response and return its items.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paginated(page) => page.items,
            ListResponse::Bare(items) => items,
        }
    }

    /// Total count reported by the service. Bare lists carry none.
    pub fn total_count(&self) -> Option<u64> {
        match self {
            ListResponse::Paginated(page) => Some(page.total_count),
            ListResponse::Bare(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_document_request_skips_unset_fields() {
        let req = CreateDocumentRequest {
            files: vec![FileUploadModel {
                id: "upload-1".to_string(),
                name: "contract.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                display_name: None,
            }],
            title: Some("Contract".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["files"][0]["id"], "upload-1");
        assert_eq!(json["files"][0]["contentType"], "application/pdf");
        assert_eq!(json["title"], "Contract");
        assert!(json.get("folderId").is_none());
        assert!(json.get("flowActions").is_none());
        assert!(json.get("type").is_none());
    }

    #[test]
    fn test_flow_action_serialization() {
        let action = FlowActionCreateModel {
            action_type: FlowActionType::Signer,
            step: 2,
            user: Some(ParticipantUserModel {
                name: "Jack Bauer".to_string(),
                email: "jack.bauer@mailinator.com".to_string(),
                identifier: Some("75502846369".to_string()),
                phone: None,
            }),
            authentication_type: Some(AuthenticationTypes::Sms),
            ..Default::default()
        };

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "Signer");
        assert_eq!(json["step"], 2);
        assert_eq!(json["user"]["identifier"], "75502846369");
        assert_eq!(json["authenticationType"], "SMS");
        assert!(json["user"].get("phone").is_none());
        assert!(json.get("signatureType").is_none());
    }

    #[test]
    fn test_document_deserialization_tolerates_missing_and_unknown_fields() {
        let json = r#"{
            "id": "doc-1",
            "name": "Contract",
            "status": "SomeFutureStatus",
            "unexpectedField": {"nested": true}
        }"#;

        let doc: DocumentModel = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "doc-1");
        assert_eq!(doc.status, Some(DocumentStatus::Unknown));
        assert!(doc.flow_actions.is_empty());
        assert!(doc.folder.is_none());
        assert!(!doc.is_concluded);
    }

    #[test]
    fn test_create_document_result_accepts_id_alias() {
        let result: CreateDocumentResult =
            serde_json::from_str(r#"{"id": "doc-9"}"#).unwrap();
        assert_eq!(result.document_id, "doc-9");
    }

    #[test]
    fn test_list_response_paginated() {
        let json = r#"{"items": [{"id": "f1"}, {"id": "f2"}], "totalCount": 7}"#;
        let list: ListResponse<FolderInfoModel> = serde_json::from_str(json).unwrap();
        assert!(matches!(list, ListResponse::Paginated(_)));
        assert_eq!(list.total_count(), Some(7));
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn test_list_response_bare() {
        let json = r#"[{"id": "f1", "name": "Contracts"}]"#;
        let list: ListResponse<FolderInfoModel> = serde_json::from_str(json).unwrap();
        assert!(matches!(list, ListResponse::Bare(_)));
        assert_eq!(list.total_count(), None);
        let items = list.into_items();
        assert_eq!(items[0].name.as_deref(), Some("Contracts"));
    }

    #[test]
    fn test_read_models_tolerate_missing_id() {
        let folder: FolderInfoModel = serde_json::from_str("{}").unwrap();
        assert_eq!(folder.id, "");
        assert!(folder.name.is_none());

        let flow: DocumentFlowModel = serde_json::from_str(r#"{"name": "Draft"}"#).unwrap();
        assert_eq!(flow.id, "");
        assert_eq!(flow.name.as_deref(), Some("Draft"));
    }

    #[test]
    fn test_list_query_page() {
        let query = ListQuery::page(10, 20);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["limit"], 10);
        assert_eq!(json["offset"], 20);
        assert!(json.get("q").is_none());
    }
}
