use serde_json::json;
use typedapi::types::enums::{DynamicMapping, ExpandWildcard};
use typedapi::{ApiError, Client};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_mapping_for_index() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/logs/_mapping"))
        .and(query_param("expand_wildcards", "open,hidden"))
        .and(query_param("local", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": {
                "mappings": {
                    "dynamic": true,
                    "properties": {"message": {"type": "text"}}
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::connect(&mock_server.uri()).unwrap();
    let mappings = client
        .indices()
        .get_mapping()
        .index("logs")
        .expand_wildcards([ExpandWildcard::Open, ExpandWildcard::Hidden])
        .local(false)
        .execute()
        .await
        .unwrap();

    let logs = &mappings["logs"].mappings;
    assert_eq!(logs.dynamic, Some(DynamicMapping::True));
    assert!(logs.properties.as_ref().unwrap().contains_key("message"));
}

#[tokio::test]
async fn test_get_mapping_for_all_indices() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_mapping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "a": {"mappings": {}},
            "b": {"mappings": {"_source": {"mode": "synthetic"}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::connect(&mock_server.uri()).unwrap();
    let mappings = client.indices().get_mapping().execute().await.unwrap();

    assert_eq!(mappings.keys().collect::<Vec<_>>(), ["a", "b"]);
}

#[tokio::test]
async fn test_get_mapping_server_error_keeps_reported_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"type": "security_exception", "reason": "action is unauthorized"},
            "status": 403
        })))
        .mount(&mock_server)
        .await;

    let client = Client::connect(&mock_server.uri()).unwrap();
    let err = client.indices().get_mapping().index("secret").execute().await.unwrap_err();

    let server = err.server_error().unwrap();
    assert_eq!(server.status, 403);
    assert_eq!(server.error.reason.as_deref(), Some("action is unauthorized"));
    assert!(matches!(err, ApiError::Server(_)));
}
