//! Webhook payload types.
//!
//! The Signer service POSTs a [`WebhookModel`] to a registered URL when a
//! document changes state. This crate does not host a receiver; it only
//! decodes the payloads a receiver gets.
//!
//! ```rust
//! use lacuna_signer::webhooks::{WebhookEvent, WebhookModel};
//!
//! let body = br#"{"type":"DocumentConcluded","data":{"id":"doc-1","name":"Contract"}}"#;
//! let webhook = WebhookModel::from_slice(body).unwrap();
//! match webhook.event().unwrap() {
//!     WebhookEvent::DocumentConcluded(doc) => assert_eq!(doc.document.id, "doc-1"),
//!     other => panic!("unexpected event {other:?}"),
//! }
//! ```

use crate::error::{Result, SignerError};
use crate::types::ParticipantUserModel;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Webhook event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum WebhookTypes {
    DocumentSigned,
    DocumentApproved,
    DocumentRefused,
    DocumentConcluded,
    DocumentCanceled,
    DocumentExpired,
    DocumentsCreated,
    DocumentsDeleted,
    InvoiceClosed,
    #[serde(other)]
    Unknown,
}

/// Envelope of every webhook request.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookModel {
    #[serde(rename = "type")]
    pub event_type: WebhookTypes,
    /// Event payload; its shape depends on `event_type`.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Document summary carried by document events.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInformationModel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub update_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSignedModel {
    #[serde(flatten)]
    pub document: DocumentInformationModel,
    #[serde(default)]
    pub signer: Option<ParticipantUserModel>,
    #[serde(default)]
    pub flow_action_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentApprovedModel {
    #[serde(flatten)]
    pub document: DocumentInformationModel,
    #[serde(default)]
    pub approver: Option<ParticipantUserModel>,
    #[serde(default)]
    pub flow_action_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRefusedModel {
    #[serde(flatten)]
    pub document: DocumentInformationModel,
    #[serde(default)]
    pub refused_by: Option<ParticipantUserModel>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConcludedModel {
    #[serde(flatten)]
    pub document: DocumentInformationModel,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCanceledModel {
    #[serde(flatten)]
    pub document: DocumentInformationModel,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentExpiredModel {
    #[serde(flatten)]
    pub document: DocumentInformationModel,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsCreatedModel {
    #[serde(default)]
    pub documents: Vec<DocumentInformationModel>,
}

/// What happened to the documents of a `DocumentsDeleted` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DocumentsDeletedAction {
    /// Moved to the recycle bin.
    Deleted,
    /// Removed permanently.
    Purged,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsDeletedModel {
    #[serde(default)]
    pub documents: Vec<DocumentInformationModel>,
    #[serde(default)]
    pub action: Option<DocumentsDeletedAction>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceClosedModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub closing_date: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
}

/// A decoded webhook payload.
#[derive(Debug, Clone)]
pub enum WebhookEvent {
    DocumentSigned(DocumentSignedModel),
    DocumentApproved(DocumentApprovedModel),
    DocumentRefused(DocumentRefusedModel),
    DocumentConcluded(DocumentConcludedModel),
    DocumentCanceled(DocumentCanceledModel),
    DocumentExpired(DocumentExpiredModel),
    DocumentsCreated(DocumentsCreatedModel),
    DocumentsDeleted(DocumentsDeletedModel),
    InvoiceClosed(InvoiceClosedModel),
    /// An event type this version of the SDK does not know; raw payload.
    Unknown(serde_json::Value),
}

impl WebhookModel {
    /// Decode a webhook request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| SignerError::Decode(format!("webhook: {e}")))
    }

    /// Decode `data` according to `event_type`.
    pub fn event(&self) -> Result<WebhookEvent> {
        Ok(match self.event_type {
            WebhookTypes::DocumentSigned => WebhookEvent::DocumentSigned(self.payload()?),
            WebhookTypes::DocumentApproved => WebhookEvent::DocumentApproved(self.payload()?),
            WebhookTypes::DocumentRefused => WebhookEvent::DocumentRefused(self.payload()?),
            WebhookTypes::DocumentConcluded => WebhookEvent::DocumentConcluded(self.payload()?),
            WebhookTypes::DocumentCanceled => WebhookEvent::DocumentCanceled(self.payload()?),
            WebhookTypes::DocumentExpired => WebhookEvent::DocumentExpired(self.payload()?),
            WebhookTypes::DocumentsCreated => WebhookEvent::DocumentsCreated(self.payload()?),
            WebhookTypes::DocumentsDeleted => WebhookEvent::DocumentsDeleted(self.payload()?),
            WebhookTypes::InvoiceClosed => WebhookEvent::InvoiceClosed(self.payload()?),
            WebhookTypes::Unknown => WebhookEvent::Unknown(self.data.clone()),
        })
    }

    fn payload<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.data.clone()).map_err(|e| {
            SignerError::Decode(format!("webhook {:?} payload: {e}", self.event_type))
        })
    }
}
