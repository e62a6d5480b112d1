//! File upload operations.

use crate::client::Client;
use crate::error::Result;
use crate::types::{UploadBytesModel, UploadBytesRequest};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Client for uploads.
///
/// Access via `client.uploads()`.
pub struct UploadsApi {
    client: Client,
}

impl UploadsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Upload an already base64-encoded payload.
    pub async fn upload_bytes(&self, request: UploadBytesRequest) -> Result<UploadBytesModel> {
        self.client.post("/api/uploads/bytes", &request).await
    }

    /// Base64-encode `content` and upload it.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lacuna_signer::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-app|xxxxxxxx")?;
    ///
    ///     let content = std::fs::read("contract.pdf")?;
    ///     let upload = client.uploads().upload(&content, Some("contract.pdf")).await?;
    ///     println!("Upload id: {}", upload.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn upload(&self, content: &[u8], name: Option<&str>) -> Result<UploadBytesModel> {
        self.upload_bytes(UploadBytesRequest {
            bytes: BASE64.encode(content),
            name: name.map(str::to_string),
        })
        .await
    }
}
