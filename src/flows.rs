//! Signature flow operations.
//!
//! This module provides the FlowsApi for managing signature flows.

use crate::client::{query_pairs, Client};
use crate::error::Result;
use crate::types::{DocumentFlowCreateRequest, DocumentFlowData, DocumentFlowModel, ListQuery, ListResponse};

/// Client for signature flow operations.
///
/// Access via `client.flows()`.
pub struct FlowsApi {
    client: Client,
}

impl FlowsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a signature flow.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lacuna_signer::{Client, types::{
    ///     DocumentFlowCreateRequest, FlowActionCreateModel, ParticipantUserModel,
    /// }};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-app|xxxxxxxx")?;
    ///
    ///     let flow = client.flows().create(DocumentFlowCreateRequest {
    ///         name: Some("Two signers".to_string()),
    ///         flow_actions: vec![FlowActionCreateModel {
    ///             step: 1,
    ///             user: Some(ParticipantUserModel {
    ///                 name: "Jack Bauer".to_string(),
    ///                 email: "jack.bauer@mailinator.com".to_string(),
    ///                 ..Default::default()
    ///             }),
    ///             ..Default::default()
    ///         }],
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     println!("Flow {}", flow.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: DocumentFlowCreateRequest) -> Result<DocumentFlowModel> {
        self.client.post("/api/document-flows", &request).await
    }

    /// Get a flow by ID.
    pub async fn get(&self, flow_id: &str) -> Result<DocumentFlowModel> {
        self.client
            .get(&format!("/api/document-flows/{}", urlencoding::encode(flow_id)))
            .await
    }

    /// List flows.
    pub async fn list(&self, query: ListQuery) -> Result<ListResponse<DocumentFlowModel>> {
        self.client
            .get_with_query("/api/document-flows", query_pairs(&query)?)
            .await
    }

    /// Replace the name, description or actions of a flow.
    pub async fn update(&self, flow_id: &str, data: DocumentFlowData) -> Result<DocumentFlowModel> {
        self.client
            .put(&format!("/api/document-flows/{}", urlencoding::encode(flow_id)), &data)
            .await
    }

    /// Delete a flow.
    pub async fn delete(&self, flow_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/document-flows/{}", urlencoding::encode(flow_id)))
            .await
    }
}
