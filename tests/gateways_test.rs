//! Endpoint coverage for the resource gateways.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use lacuna_signer::types::{
    CancelDocumentRequest, DocumentAddVersionRequest, DocumentDownloadTypes, DocumentFlowData,
    EmailListNotificationRequest, FileUploadModel, FlowActionReminderRequest, FolderCreateRequest,
    FolderDeleteRequest, ListQuery, MarksSessionCreateRequest, MoveDocumentBatchRequest,
    MoveDocumentRequest, NotifiedEmailsEditRequest, OrganizationUserPostRequest, RefusalRequest,
};
use lacuna_signer::{Client, ClientConfig};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::with_config(
        "test-app|secret",
        ClientConfig {
            base_url: Some(server.uri()),
            ..Default::default()
        },
    )
    .unwrap();
    (server, client)
}

// ============================================================================
// Uploads
// ============================================================================

#[tokio::test]
async fn test_upload_encodes_content() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/uploads/bytes"))
        .and(body_json(json!({
            "bytes": BASE64.encode(b"%PDF-1.7"),
            "name": "contract.pdf"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "upload-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let upload = client
        .uploads()
        .upload(b"%PDF-1.7", Some("contract.pdf"))
        .await
        .unwrap();
    assert_eq!(upload.id, "upload-1");
}

// ============================================================================
// Documents
// ============================================================================

#[tokio::test]
async fn test_document_content_download() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/doc-1/content"))
        .and(query_param("type", "PrinterFriendlyVersion"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7 binary".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let content = client
        .documents()
        .content("doc-1", DocumentDownloadTypes::PrinterFriendlyVersion)
        .await
        .unwrap();
    assert_eq!(content, b"%PDF-1.7 binary");
}

#[tokio::test]
async fn test_document_content_b64_decodes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/doc-1/content-b64"))
        .and(query_param("type", "Signatures"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"bytes": BASE64.encode(b"signed")})),
        )
        .mount(&server)
        .await;

    let content = client
        .documents()
        .content_b64("doc-1", DocumentDownloadTypes::Signatures)
        .await
        .unwrap();
    assert_eq!(content.decode().unwrap(), b"signed");
}

#[tokio::test]
async fn test_document_ids_are_path_encoded() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "WRONG"})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/documents/doc%3Fx%3D1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "doc?x=1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/document-flows/a%2Fb"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let document = client.documents().get("doc?x=1").await.unwrap();
    assert_eq!(document.id, "doc?x=1");

    client.flows().delete("a/b").await.unwrap();
}

#[tokio::test]
async fn test_document_ticket() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/doc-1/ticket"))
        .and(query_param("type", "Original"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "location": "https://signer.example.com/download/t-1",
            "expiration": "2030-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ticket = client
        .documents()
        .ticket("doc-1", DocumentDownloadTypes::Original)
        .await
        .unwrap();
    assert_eq!(
        ticket.location.as_deref(),
        Some("https://signer.example.com/download/t-1")
    );
}

#[tokio::test]
async fn test_document_move_and_add_version() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/documents/doc-1/folder"))
        .and(body_json(json!({"folderId": "f-1"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/documents/doc-1/versions"))
        .and(body_json(json!({
            "file": {"id": "upload-2", "name": "v2.pdf", "contentType": "application/pdf"}
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let documents = client.documents();
    documents
        .move_to_folder(
            "doc-1",
            MoveDocumentRequest {
                folder_id: Some("f-1".to_string()),
            },
        )
        .await
        .unwrap();
    documents
        .add_version(
            "doc-1",
            DocumentAddVersionRequest {
                file: FileUploadModel {
                    id: "upload-2".to_string(),
                    name: "v2.pdf".to_string(),
                    content_type: "application/pdf".to_string(),
                    display_name: None,
                },
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_document_signatures_by_key() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/keys/ABC123/signatures"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "doc-1",
            "key": "ABC123",
            "isConcluded": true,
            "signers": [{"subjectName": "JACK BAUER"}, {"subjectName": "JAMES BOND"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client.documents().signatures_by_key("ABC123").await.unwrap();
    assert!(info.is_concluded);
    assert_eq!(info.signers.len(), 2);
}

#[tokio::test]
async fn test_document_batch_move() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/documents/batch/folder"))
        .and(body_json(json!({"documents": ["a", "b"], "folderId": "f-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "a", "success": true},
            {"id": "b", "success": false, "errorMessage": "Document is locked"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let results = client
        .documents()
        .move_batch_to_folder(MoveDocumentBatchRequest {
            documents: vec!["a".to_string(), "b".to_string()],
            folder_id: Some("f-1".to_string()),
        })
        .await
        .unwrap();

    assert!(results[0].success);
    assert_eq!(results[1].error_message.as_deref(), Some("Document is locked"));
}

#[tokio::test]
async fn test_document_cancel_and_refuse() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/documents/doc-1/cancellation"))
        .and(body_json(json!({"reason": "Wrong version"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/documents/doc-2/refusal"))
        .and(body_json(json!({"reason": "Terms not accepted"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let documents = client.documents();
    documents
        .cancel(
            "doc-1",
            CancelDocumentRequest {
                reason: "Wrong version".to_string(),
            },
        )
        .await
        .unwrap();
    documents
        .refuse(
            "doc-2",
            RefusalRequest {
                reason: "Terms not accepted".to_string(),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_document_notified_emails_uses_put() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/documents/doc-1/notified-emails"))
        .and(body_json(json!({"emails": ["legal@example.com"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .documents()
        .update_notified_emails(
            "doc-1",
            NotifiedEmailsEditRequest {
                emails: vec!["legal@example.com".to_string()],
            },
        )
        .await
        .unwrap();
}

// ============================================================================
// Flows
// ============================================================================

#[tokio::test]
async fn test_flow_update_and_delete() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/document-flows/flow-1"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "flow-1", "name": "Renamed"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/document-flows/flow-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let flows = client.flows();
    let updated = flows
        .update(
            "flow-1",
            DocumentFlowData {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name.as_deref(), Some("Renamed"));

    flows.delete("flow-1").await.unwrap();
}

#[tokio::test]
async fn test_flow_list_bare_array() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/document-flows"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "flow-1"}, {"id": "flow-2"}])),
        )
        .mount(&server)
        .await;

    let flows = client.flows().list(ListQuery::default()).await.unwrap();
    assert_eq!(flows.items().len(), 2);
    assert_eq!(flows.total_count(), None);
}

// ============================================================================
// Folders
// ============================================================================

#[tokio::test]
async fn test_folder_create_and_delete() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .and(body_json(json!({"name": "2024", "parentId": "root-folder"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "f-2",
            "name": "2024",
            "parentId": "root-folder"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/folders/f-2/delete"))
        .and(body_json(json!({"deleteDocuments": true})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let folders = client.folders();
    let folder = folders
        .create(FolderCreateRequest {
            name: "2024".to_string(),
            parent_id: Some("root-folder".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(folder.parent_id.as_deref(), Some("root-folder"));

    folders
        .delete(
            &folder.id,
            FolderDeleteRequest {
                delete_documents: true,
            },
        )
        .await
        .unwrap();
}

// ============================================================================
// Notifications, organization, marks sessions
// ============================================================================

#[tokio::test]
async fn test_notifications() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/notifications/flow-action-reminder"))
        .and(body_json(json!({"flowActionId": "fa-1", "message": "Please sign"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users/notify-pending"))
        .and(body_json(json!({"emails": ["jack.bauer@mailinator.com"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifications = client.notifications();
    notifications
        .flow_action_reminder(FlowActionReminderRequest {
            flow_action_id: "fa-1".to_string(),
            message: Some("Please sign".to_string()),
        })
        .await
        .unwrap();
    notifications
        .notify_pending_users(EmailListNotificationRequest {
            emails: vec!["jack.bauer@mailinator.com".to_string()],
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_organization_info() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "org-1",
            "name": "Lacuna Software",
            "identifier": "11222333000181"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let org = client.organizations().get_info().await.unwrap();
    assert_eq!(org.id, "org-1");
    assert_eq!(org.name.as_deref(), Some("Lacuna Software"));
    assert_eq!(org.identifier.as_deref(), Some("11222333000181"));
}

#[tokio::test]
async fn test_organization_users() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/organizations/users"))
        .and(body_json(json!({"name": "Maria", "email": "maria@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1",
            "name": "Maria",
            "email": "maria@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/organizations/users/user-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let orgs = client.organizations();
    let user = orgs
        .add_user(OrganizationUserPostRequest {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            identifier: None,
        })
        .await
        .unwrap();
    orgs.remove_user(&user.id).await.unwrap();
}

#[tokio::test]
async fn test_marks_session() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/marks-sessions"))
        .and(body_json(json!({"documentIds": ["doc-1"], "returnUrl": "https://app.example.com/done"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sessionId": "ms-1",
            "url": "https://signer.example.com/marks/ms-1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/marks-sessions/ms-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "ms-1", "documentIds": ["doc-1"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let marks = client.marks_sessions();
    let created = marks
        .create(MarksSessionCreateRequest {
            document_ids: vec!["doc-1".to_string()],
            return_url: Some("https://app.example.com/done".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, "ms-1");

    let session = marks.get(&created.id).await.unwrap();
    assert_eq!(session.document_ids, vec!["doc-1".to_string()]);
}
