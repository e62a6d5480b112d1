//! Marks session operations.
//!
//! A marks session lets a user position signature marks on documents in the
//! Signer web interface before a flow starts.

use crate::client::Client;
use crate::error::Result;
use crate::types::{MarksSessionCreateRequest, MarksSessionCreateResponse, MarksSessionModel};

/// Client for marks sessions.
///
/// Access via `client.marks_sessions()`.
pub struct MarksSessionsApi {
    client: Client,
}

impl MarksSessionsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Open a marks session.
    pub async fn create(&self, request: MarksSessionCreateRequest) -> Result<MarksSessionCreateResponse> {
        self.client.post("/api/marks-sessions", &request).await
    }

    /// Get a marks session by ID.
    pub async fn get(&self, session_id: &str) -> Result<MarksSessionModel> {
        self.client
            .get(&format!("/api/marks-sessions/{}", urlencoding::encode(session_id)))
            .await
    }
}
