use assert_json_diff::assert_json_eq;
use opensearch_client::model::responses::{
    DocumentResponse, IndicesCreateResponse, IndicesDeleteResponse,
};
use serde_json::json;

#[test]
fn test_indices_create_response_deserialize() {
    let body = r#"{"acknowledged":true,"shards_acknowledged":true,"index":"movies"}"#;
    let resp: IndicesCreateResponse = serde_json::from_str(body).unwrap();
    assert!(resp.acknowledged);
    assert!(resp.shards_acknowledged);
    assert_eq!(resp.index, "movies");
}

#[test]
fn test_indices_delete_response_deserialize() {
    let body = r#"{"acknowledged":true}"#;
    let resp: IndicesDeleteResponse = serde_json::from_str(body).unwrap();
    assert!(resp.acknowledged);
}

#[test]
fn test_document_response_deserialize() {
    let body = r#"{
        "_index": "movies",
        "_id": "1",
        "_version": 1,
        "result": "created",
        "_shards": {"total": 2, "successful": 1, "failed": 0},
        "_seq_no": 0,
        "_primary_term": 1
    }"#;
    let resp: DocumentResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.index, "movies");
    assert_eq!(resp.id, "1");
    assert_eq!(resp.version, 1);
    assert_eq!(resp.result, "created");
    assert_eq!(resp.shards.total, 2);
    assert_eq!(resp.shards.successful, 1);
    assert_eq!(resp.seq_no, 0);
    assert_eq!(resp.primary_term, 1);
}

// The renamed fields must serialize back with their wire names so the runner
// prints the same shape the cluster answered with.
#[test]
fn test_document_response_roundtrip_wire_names() {
    let wire = json!({
        "_index": "movies",
        "_id": "2",
        "_version": 3,
        "result": "deleted",
        "_shards": {"total": 2, "successful": 2, "failed": 0},
        "_seq_no": 7,
        "_primary_term": 1
    });
    let resp: DocumentResponse = serde_json::from_value(wire.clone()).unwrap();
    assert_json_eq!(serde_json::to_value(&resp).unwrap(), wire);
}

#[test]
fn test_document_response_display_is_json() {
    let resp = DocumentResponse {
        index: "movies".to_string(),
        id: "1".to_string(),
        version: 1,
        result: "created".to_string(),
        ..Default::default()
    };
    let text = resp.to_string();
    assert!(text.contains("movies"));
    assert!(text.contains("created"));
}
