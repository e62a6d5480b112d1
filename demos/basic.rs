//! Basic usage example for the Lacuna Signer SDK.
//!
//! This example demonstrates:
//! - Creating a client from the environment
//! - Creating and listing folders
//! - Listing documents through the resource gateways
//!
//! Run with:
//! ```bash
//! SIGNER_API_KEY='your-app|xxxxxxxx' cargo run --example basic
//! ```

use lacuna_signer::types::{ListDocumentsQuery, PaginationOrders};
use lacuna_signer::SignerClient;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("lacuna_signer=info".parse()?))
        .init();

    // Reads SIGNER_API_KEY, and optionally SIGNER_BASE_URL / SIGNER_TIMEOUT_SECS
    println!("Creating Signer client...");
    let client = SignerClient::from_env()?;

    // Create a folder
    println!("\nCreating a folder...");
    let folder_name = format!("example-{}", &Uuid::new_v4().to_string()[..8]);
    let folder = client.create_folder(&folder_name, None).await?;
    println!("Created folder:");
    println!("  ID:   {}", folder.id);
    println!("  Name: {}", folder.name.as_deref().unwrap_or("-"));

    // List folders
    println!("\nListing folders...");
    let folders = client.list_folders(10, 0).await?;
    println!("Found {} folders:", folders.len());
    for f in &folders {
        println!("  - {} ({})", f.name.as_deref().unwrap_or("-"), f.id);
    }

    // List the most recent documents
    println!("\nListing recent documents...");
    let page = client
        .list_documents(ListDocumentsQuery {
            limit: Some(5),
            order: Some(PaginationOrders::Desc),
            ..Default::default()
        })
        .await?;
    if let Some(total) = page.total_count() {
        println!("{} documents in total", total);
    }
    for doc in page.items() {
        println!(
            "  - {} [{:?}] {}",
            doc.name.as_deref().unwrap_or("(untitled)"),
            doc.status,
            doc.id
        );
    }

    // Clean up - delete the folder we created
    println!("\nCleaning up - deleting example folder...");
    client.delete_folder(&folder.id, false).await?;
    println!("Folder deleted successfully.");

    client.close();
    println!("\nDone!");
    Ok(())
}
