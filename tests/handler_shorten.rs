mod common;

use linktrail::domain::repositories::LinkRepository;
use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com/a/b" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let short_url = json["id"].as_str().unwrap();
    let identifier = common::identifier_of(short_url);
    assert_eq!(identifier.len(), 8);

    let stored = repo.find_with_history(&identifier).await.unwrap().unwrap();
    assert_eq!(stored.link.target_url, "https://example.com/a/b");
    assert_eq!(stored.total_clicks, 0);
}

#[tokio::test]
async fn test_shorten_same_url_twice_creates_two_links() {
    let (server, repo) = common::create_test_server();

    let first = server
        .post("/links")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/links")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["id"], second["id"]);
    assert_eq!(repo.count_links().await.unwrap(), 2);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (server, repo) = common::create_test_server();

    let response = server.post("/links").json(&json!({})).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "url is required");
    assert_eq!(json["code"], "validation_error");
    assert_eq!(repo.count_links().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (server, repo) = common::create_test_server();

    let response = server.post("/links").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "url is required");
    assert_eq!(repo.count_links().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_whitespace_url() {
    let (server, repo) = common::create_test_server();

    let response = server.post("/links").json(&json!({ "url": "   " })).await;

    response.assert_status_bad_request();
    assert_eq!(repo.count_links().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_null_url() {
    let (server, _repo) = common::create_test_server();

    let response = server.post("/links").json(&json!({ "url": null })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "url is required");
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let (server, repo) = common::create_test_server();

    let response = server.post("/links").text("url=https://example.com").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "validation_error");
    assert_eq!(repo.count_links().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_wrong_url_type() {
    let (server, _repo) = common::create_test_server();

    let response = server.post("/links").json(&json!({ "url": 42 })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_control_characters() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "url must not contain control characters");
    assert_eq!(json["code"], "validation_error");
    assert_eq!(repo.count_links().await.unwrap(), 0);
}
