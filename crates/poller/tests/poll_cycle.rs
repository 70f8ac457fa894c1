//! End-to-end poll cycle tests against a mock n8n instance and the in-memory
//! store.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use statuswatch_poller::{N8nClient, N8nConfig, Poller, PollerConfig};
use statuswatch_store::{MemoryStore, Service};

fn client_for(mock_server: &MockServer) -> N8nClient {
    let uri = mock_server.uri();
    let (host, port) = uri.rsplit_once(':').unwrap();

    N8nClient::new(&N8nConfig {
        host: host.to_string(),
        port: port.to_string(),
        path: "".to_string(),
        api_key: "test-api-key".to_string(),
        api_version: "1".to_string(),
    })
}

fn service(id: i64, name: &str) -> Service {
    Service {
        id,
        name: name.to_string(),
    }
}

fn poller_for(mock_server: &MockServer, store: Arc<MemoryStore>) -> Poller {
    Poller::new(
        client_for(mock_server),
        store,
        &PollerConfig {
            tool_name: "n8n".to_string(),
        },
    )
}

/// Two workflows, one of them paginated: every workflow ends up as one row
/// with the derived snapshot fields.
#[tokio::test]
async fn test_cycle_records_one_row_per_workflow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .and(query_param("active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "w1", "name": "Backup", "active": true},
            {"id": "w2", "name": "Sync", "active": true}
        ])))
        .mount(&mock_server)
        .await;

    // Backup history spans two pages; the failure on page one is followed by
    // a success on page two.
    Mock::given(method("GET"))
        .and(path("/api/v1/executions"))
        .and(query_param("workflowId", "w1"))
        .and(query_param("cursor", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"startedAt": "2024-05-01T10:30:00.000Z", "finished": true}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/executions"))
        .and(query_param("workflowId", "w1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"startedAt": "2024-05-01T10:00:00.000Z", "finished": false}],
            "nextCursor": "c1"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/executions"))
        .and(query_param("workflowId", "w2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"startedAt": "2024-05-02T08:00:00.000Z", "finished": false}]
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::with_services(vec![
        service(1, "Backup"),
        service(2, "Sync"),
    ]));
    let poller = poller_for(&mock_server, store.clone());

    poller.run_cycle().await.unwrap();

    let updates = store.updates().await;
    assert_eq!(updates.len(), 2);

    let backup = &updates[0];
    assert_eq!(backup.service_id, 1);
    assert_eq!(backup.tool_name, "n8n");
    assert_eq!(backup.status.as_deref(), Some("success"));
    assert_eq!(
        backup.last_execution,
        Some("2024-05-01T10:30:00Z".parse().unwrap())
    );
    assert_eq!(
        backup.last_error,
        Some("2024-05-01T10:00:00Z".parse().unwrap())
    );
    assert_eq!(backup.message, None);

    let sync = &updates[1];
    assert_eq!(sync.service_id, 2);
    assert_eq!(sync.status.as_deref(), Some("failed"));
    assert_eq!(sync.last_success, None);
}

/// Workflows without a registered service are skipped without failing the
/// cycle.
#[tokio::test]
async fn test_unregistered_workflow_is_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "w1", "name": "Unlisted", "active": true}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/executions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"startedAt": "2024-05-01T10:00:00.000Z", "finished": true}]
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let poller = poller_for(&mock_server, store.clone());

    poller.run_cycle().await.unwrap();

    assert!(store.updates().await.is_empty());
}

/// Workflows without an id never reach the executions endpoint.
#[tokio::test]
async fn test_workflow_without_id_is_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Orphan", "active": true}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/executions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::with_services(vec![service(1, "Orphan")]));
    let poller = poller_for(&mock_server, store.clone());

    poller.run_cycle().await.unwrap();

    assert!(store.updates().await.is_empty());
}

/// The first hard failure aborts the cycle but keeps rows already written.
#[tokio::test]
async fn test_fetch_failure_aborts_cycle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "w1", "name": "Backup", "active": true},
            {"id": "w2", "name": "Sync", "active": true}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/executions"))
        .and(query_param("workflowId", "w1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"startedAt": "2024-05-01T10:00:00.000Z", "finished": true}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/executions"))
        .and(query_param("workflowId", "w2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::with_services(vec![
        service(1, "Backup"),
        service(2, "Sync"),
    ]));
    let poller = poller_for(&mock_server, store.clone());

    poller.run_cycle().await.unwrap_err();

    let updates = store.updates().await;
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].service_id, 1);
}

/// An empty instance completes a cycle without writing anything.
#[tokio::test]
async fn test_empty_instance() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let poller = poller_for(&mock_server, store.clone());

    poller.run_cycle().await.unwrap();

    assert_eq!(store.op_count(), 0);
    assert!(store.updates().await.is_empty());
}
