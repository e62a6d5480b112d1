//! End-to-end signing example for the Lacuna Signer SDK.
//!
//! Uploads a PDF, creates a document in a new folder and starts a signature
//! flow with two signers, then prints the URL the first signer uses.
//!
//! Run with:
//! ```bash
//! SIGNER_API_KEY='your-app|xxxxxxxx' cargo run --example sign_document -- contract.pdf
//! ```

use lacuna_signer::types::AuthenticationTypes;
use lacuna_signer::{SignerClient, SignerDescriptor, SimpleSignRequest, UploadSource};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("lacuna_signer=info".parse()?))
        .init();

    let pdf_path = std::env::args()
        .nth(1)
        .ok_or("usage: sign_document <file.pdf>")?;

    let client = SignerClient::from_env()?;

    let signed = client
        .sign_document_simple(SimpleSignRequest {
            source: UploadSource::path(&pdf_path),
            title: "Sample contract".to_string(),
            signers: vec![
                SignerDescriptor::new("Jack Bauer", "jack.bauer@mailinator.com")
                    .identifier("75502846369"),
                SignerDescriptor::new("James Bond", "james.bond@mailinator.com")
                    .identifier("95588148061")
                    .authentication_type(AuthenticationTypes::Sms),
            ],
            folder_name: Some(format!("contracts-{}", &Uuid::new_v4().to_string()[..8])),
        })
        .await?;

    println!("Document created:");
    println!("  Document ID: {}", signed.document.document_id);
    println!("  Flow ID:     {}", signed.flow.id);
    if let Some(folder_id) = &signed.folder_id {
        println!("  Folder ID:   {}", folder_id);
    }

    // The flow response lists the actions in step order
    if let Some(first) = signed.flow.flow_actions.first() {
        let url = client
            .get_action_url(&signed.document.document_id, &first.id)
            .await?;
        println!("\nFirst signer URL: {}", url);
    }

    Ok(())
}
