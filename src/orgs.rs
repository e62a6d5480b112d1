//! Organization management operations.
//!
//! This module provides the OrganizationsApi for managing the users of the
//! organization the API key belongs to.

use crate::client::{query_pairs, Client};
use crate::error::Result;
use crate::types::{
    ListQuery, ListResponse, OrganizationInfoModel, OrganizationUserModel,
    OrganizationUserPostRequest,
};

/// Client for organization management operations.
///
/// Access via `client.organizations()`.
pub struct OrganizationsApi {
    client: Client,
}

impl OrganizationsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get the organization the API key belongs to.
    pub async fn get_info(&self) -> Result<OrganizationInfoModel> {
        self.client.get("/api/organizations").await
    }

    /// List the users of the organization.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lacuna_signer::{Client, types::ListQuery};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-app|xxxxxxxx")?;
    ///
    ///     let users = client.organizations().list_users(ListQuery::page(10, 0)).await?;
    ///     for user in users.items() {
    ///         println!("User: {:?}", user.email);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list_users(&self, query: ListQuery) -> Result<ListResponse<OrganizationUserModel>> {
        self.client
            .get_with_query("/api/organizations/users", query_pairs(&query)?)
            .await
    }

    /// Add a user to the organization.
    pub async fn add_user(&self, request: OrganizationUserPostRequest) -> Result<OrganizationUserModel> {
        self.client
            .post("/api/organizations/users", &request)
            .await
    }

    /// Remove a user from the organization.
    pub async fn remove_user(&self, user_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/organizations/users/{}", urlencoding::encode(user_id)))
            .await
    }
}
