//! Document status example for the Lacuna Signer SDK.
//!
//! Prints the status and signatures of a document and, once it is
//! concluded, downloads the signed file.
//!
//! Run with:
//! ```bash
//! SIGNER_API_KEY='your-app|xxxxxxxx' cargo run --example document_status -- <document-id>
//! ```

use lacuna_signer::{SignerClient, SignerError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let document_id = std::env::args()
        .nth(1)
        .ok_or("usage: document_status <document-id>")?;

    let client = SignerClient::from_env()?;

    let report = match client.get_document_status(&document_id).await {
        Ok(report) => report,
        Err(e) if e.is_not_found() => {
            println!("Document {} does not exist", document_id);
            return Ok(());
        }
        Err(SignerError::Unauthorized { .. }) => {
            println!("The API key was rejected");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Document: {}", report.document.name.as_deref().unwrap_or("(untitled)"));
    println!("Status:   {:?}", report.status);
    println!("Signatures:");
    for signer in &report.signatures.signers {
        println!(
            "  - {} <{}> at {}",
            signer.subject_name.as_deref().unwrap_or("?"),
            signer.email_address.as_deref().unwrap_or("?"),
            signer.signing_time.as_deref().unwrap_or("?"),
        );
    }

    if report.is_concluded {
        let output = PathBuf::from(format!("{}.pdf", document_id));
        let content = client.download_document(&document_id, Some(&output)).await?;
        println!("\nSaved {} bytes to {}", content.len(), output.display());
    }

    Ok(())
}
