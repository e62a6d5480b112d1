//! Folder operations.

use crate::client::{query_pairs, Client};
use crate::error::Result;
use crate::types::{FolderCreateRequest, FolderDeleteRequest, FolderInfoModel, ListQuery, ListResponse};

/// Client for folder operations.
///
/// Access via `client.folders()`.
pub struct FoldersApi {
    client: Client,
}

impl FoldersApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a folder.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lacuna_signer::{Client, types::FolderCreateRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-app|xxxxxxxx")?;
    ///
    ///     let folder = client.folders().create(FolderCreateRequest {
    ///         name: "Contracts".to_string(),
    ///         ..Default::default()
    ///     }).await?;
    ///     println!("Created folder {}", folder.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: FolderCreateRequest) -> Result<FolderInfoModel> {
        self.client.post("/api/folders", &request).await
    }

    /// Get a folder by ID.
    pub async fn get(&self, folder_id: &str) -> Result<FolderInfoModel> {
        self.client
            .get(&format!("/api/folders/{}", urlencoding::encode(folder_id)))
            .await
    }

    /// List folders.
    pub async fn list(&self, query: ListQuery) -> Result<ListResponse<FolderInfoModel>> {
        self.client
            .get_with_query("/api/folders", query_pairs(&query)?)
            .await
    }

    /// Delete a folder.
    ///
    /// **Warning:** With `delete_documents` set, every document in the folder
    /// is deleted as well.
    pub async fn delete(&self, folder_id: &str, request: FolderDeleteRequest) -> Result<()> {
        self.client
            .post_unit(&format!("/api/folders/{}/delete", urlencoding::encode(folder_id)), &request)
            .await
    }
}
