//! # Lacuna Signer Rust SDK
//!
//! Rust SDK for the Lacuna Signer document signature API.
//!
//! The crate has two layers:
//!
//! - **Resource gateways** ([`Client`] and `client.documents()`,
//!   `client.flows()`, ...): one method per endpoint, one request per call.
//! - **[`SignerClient`]**: convenience operations composed from several
//!   gateway calls, such as uploading a file, creating a document from it
//!   and starting a signature flow in one go.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lacuna_signer::{SignerClient, SignerDescriptor, SimpleSignRequest, UploadSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API keys have the form "your-app|xxxxxxxx"
//!     let client = SignerClient::new("your-app|xxxxxxxx")?;
//!
//!     let signed = client.sign_document_simple(SimpleSignRequest {
//!         source: UploadSource::path("contract.pdf"),
//!         title: "Employment Contract".to_string(),
//!         signers: vec![
//!             SignerDescriptor::new("Jack Bauer", "jack.bauer@mailinator.com"),
//!             SignerDescriptor::new("James Bond", "james.bond@mailinator.com"),
//!         ],
//!         folder_name: None,
//!     }).await?;
//!
//!     let status = client.get_document_status(&signed.document.document_id).await?;
//!     println!("Status: {:?}", status.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, SignerError>`:
//!
//! ```rust,no_run
//! use lacuna_signer::{ErrorCode, SignerClient, SignerError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SignerClient::new("your-app|xxxxxxxx")?;
//!
//!     match client.get_document("3b0f6a6e-...").await {
//!         Ok(doc) => println!("Found {:?}", doc.name),
//!         Err(SignerError::Unauthorized { .. }) => println!("Invalid API key"),
//!         Err(SignerError::Api { code: ErrorCode::DocumentNotFound, .. }) => {
//!             println!("No such document")
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod documents;
pub mod error;
pub mod flows;
pub mod folders;
pub mod marks;
pub mod notifications;
pub mod orgs;
pub mod signer;
pub mod transport;
pub mod types;
pub mod uploads;
pub mod webhooks;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig};
pub use error::{ErrorCode, Result, SignerError};
pub use signer::{
    DocumentStatusReport, FlowOptions, NewDocument, SignedDocument, SignerClient,
    SignerDescriptor, SimpleSignRequest, UploadSource, UploadedFile,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

// Re-export the most used models
pub use types::{
    CreateDocumentRequest, CreateDocumentResult, DocumentFlowModel, DocumentModel,
    DocumentStatus, FolderInfoModel, ListResponse, PaginatedSearchResponse,
};
