//! Integration tests for the embeddings client against a mock HTTP server.

use embed_service::{EmbedError, EmbeddingConfig, OpenAiEmbedder};
use httpmock::prelude::*;
use serde_json::json;

fn test_config(endpoint: String, dimension: usize) -> EmbeddingConfig {
    EmbeddingConfig {
        api_key: "test-key".to_string(),
        endpoint,
        model: "test-embedding-model".to_string(),
        dimension,
        timeout_secs: Some(5),
    }
}

#[tokio::test]
async fn batch_is_sorted_by_index_and_order_preserved() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/embeddings")
                .header("authorization", "Bearer test-key");
            // Items deliberately out of order; the client must re-sort.
            then.status(200).json_body(json!({
                "data": [
                    { "embedding": [2.0, 0.0, 0.0], "index": 2 },
                    { "embedding": [0.0, 0.0, 0.0], "index": 0 },
                    { "embedding": [1.0, 0.0, 0.0], "index": 1 }
                ]
            }));
        })
        .await;

    let embedder = OpenAiEmbedder::new(test_config(server.base_url(), 3)).unwrap();
    let inputs: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
    let vectors = embedder.embeddings(&inputs).await.unwrap();

    mock.assert_async().await;
    assert_eq!(vectors.len(), 3);
    assert_eq!(vectors[0][0], 0.0);
    assert_eq!(vectors[1][0], 1.0);
    assert_eq!(vectors[2][0], 2.0);
}

#[tokio::test]
async fn wrong_dimension_is_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/embeddings");
            then.status(200).json_body(json!({
                "data": [ { "embedding": [0.5, 0.5], "index": 0 } ]
            }));
        })
        .await;

    let embedder = OpenAiEmbedder::new(test_config(server.base_url(), 3)).unwrap();
    let err = embedder
        .embeddings(&["a".to_string()])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EmbedError::VectorSizeMismatch { got: 2, want: 3 }
    ));
}

#[tokio::test]
async fn non_success_status_carries_url_and_snippet() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/embeddings");
            then.status(429).body("rate limited, slow down");
        })
        .await;

    let embedder = OpenAiEmbedder::new(test_config(server.base_url(), 3)).unwrap();
    let err = embedder
        .embeddings(&["a".to_string()])
        .await
        .unwrap_err();

    match err {
        EmbedError::HttpStatus {
            status,
            url,
            snippet,
        } => {
            assert_eq!(status.as_u16(), 429);
            assert!(url.ends_with("/v1/embeddings"));
            assert!(snippet.contains("rate limited"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn bad_endpoint_is_rejected_at_construction() {
    let err = OpenAiEmbedder::new(test_config("ftp://nope".to_string(), 3)).unwrap_err();
    assert!(matches!(err, EmbedError::Config(_)));
}
