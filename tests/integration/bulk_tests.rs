use crate::common::{TEST_API_KEY, api_key_client, bearer, mock_server, respond_json};
use edgelink_client::prelude::*;
use mockito::Matcher;

fn record(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object")
}

#[tokio::test]
async fn test_csv_import_reports_row_errors() {
    let csv = "destination,custom_slug\nhttps://example.com/a,a\nnot-a-url,b\n";
    let mut server = mock_server().await;
    let import = respond_json(
        server
            .mock("POST", "/api/import/links")
            .match_header("content-type", "text/csv")
            .match_header("authorization", bearer(TEST_API_KEY).as_str())
            .match_body(csv),
        200,
        json!({
            "total": 2,
            "successful": 1,
            "failed": 1,
            "errors": [{"row": 3, "error": "Invalid URL"}]
        }),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let report = client.import_links_csv(csv).await.unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.successful, 1);
    assert!(report.has_errors());
    assert_eq!(report.errors[0].row, 3);
    assert_eq!(report.errors[0].error, "Invalid URL");
    import.assert_async().await;
}

#[tokio::test]
async fn test_import_from_records_sends_csv() {
    let mut server = mock_server().await;
    let import = respond_json(
        server
            .mock("POST", "/api/import/links")
            .match_header("content-type", "text/csv")
            .match_body(
                "custom_slug,destination,group_name\n\
                 docs,https://example.com/docs,Marketing\n\
                 ,https://example.com/blog,\n",
            ),
        200,
        json!({"total": 2, "successful": 2, "failed": 0, "errors": []}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let report = client
        .import_links_from_records(&[
            record(json!({
                "custom_slug": "docs",
                "destination": "https://example.com/docs",
                "group_name": "Marketing"
            })),
            record(json!({"destination": "https://example.com/blog"})),
        ])
        .await
        .unwrap();

    assert!(!report.has_errors());
    import.assert_async().await;
}

#[tokio::test]
async fn test_import_json() {
    let mut server = mock_server().await;
    let import = respond_json(
        server
            .mock("POST", "/api/import/links")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "links": [{"url": "https://example.com/a", "custom_slug": "a"}]
            }))),
        200,
        json!({"total": 1, "imported": 1}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let report = client
        .import_links_json(&[record(
            json!({"url": "https://example.com/a", "custom_slug": "a"}),
        )])
        .await
        .unwrap();

    assert_eq!(report.successful, 1);
    import.assert_async().await;
}

#[tokio::test]
async fn test_bulk_create_continues_after_failure() {
    let mut server = mock_server().await;
    let _ok = respond_json(
        server
            .mock("POST", "/api/shorten")
            .match_body(Matcher::PartialJson(json!({"url": "https://example.com/1"}))),
        201,
        json!({"slug": "one", "short_url": "https://go.shortedbro.xyz/one"}),
    )
    .create_async()
    .await;
    let _taken = respond_json(
        server
            .mock("POST", "/api/shorten")
            .match_body(Matcher::PartialJson(json!({"custom_slug": "taken"}))),
        409,
        json!({"error": "Slug already taken"}),
    )
    .create_async()
    .await;
    let _ok3 = respond_json(
        server
            .mock("POST", "/api/shorten")
            .match_body(Matcher::PartialJson(json!({"url": "https://example.com/3"}))),
        201,
        json!({"slug": "three", "short_url": "https://go.shortedbro.xyz/three"}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let outcomes = client
        .bulk_create_links(vec![
            ShortenRequest::new("https://example.com/1"),
            ShortenRequest::new("https://example.com/2").with_custom_slug("taken"),
            ShortenRequest::new("https://example.com/3"),
        ])
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_success());
    assert_eq!(outcomes[0].slug.as_deref(), Some("one"));
    assert!(!outcomes[1].is_success());
    assert_eq!(outcomes[1].destination, "https://example.com/2");
    assert!(
        outcomes[1]
            .error
            .as_deref()
            .is_some_and(|e| e.contains("Slug already taken"))
    );
    assert_eq!(outcomes[2].slug.as_deref(), Some("three"));
}

#[tokio::test]
async fn test_export_links_csv() {
    let mut server = mock_server().await;
    let _export = server
        .mock("GET", "/api/export/links")
        .match_query(Matcher::UrlEncoded("format".into(), "csv".into()))
        .with_status(200)
        .with_header("content-type", "text/csv; charset=utf-8")
        .with_body("slug,destination\npromo,https://example.com\n")
        .create_async()
        .await;

    let client = api_key_client(&server);
    let export = client.export_links(ExportFormat::Csv).await.unwrap();

    assert_eq!(
        export,
        ExportData::Csv("slug,destination\npromo,https://example.com\n".to_string())
    );
}

#[tokio::test]
async fn test_export_links_json() {
    let mut server = mock_server().await;
    let _export = respond_json(
        server
            .mock("GET", "/api/export/links")
            .match_query(Matcher::UrlEncoded("format".into(), "json".into())),
        200,
        json!({"links": [{"slug": "promo"}]}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let export = client.export_links(ExportFormat::Json).await.unwrap();

    assert_eq!(export, ExportData::Json(json!({"links": [{"slug": "promo"}]})));
}

#[tokio::test]
async fn test_bulk_move_to_group() {
    let mut server = mock_server().await;
    let moved = respond_json(
        server
            .mock("POST", "/api/links/bulk-group")
            .match_body(Matcher::Json(json!({"slugs": ["a", "b"], "group_id": "g_1"}))),
        200,
        json!({"moved": 2}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let result = client
        .bulk_move_to_group(&["a".to_string(), "b".to_string()], Some("g_1"))
        .await
        .unwrap();

    assert_eq!(result["moved"], 2);
    moved.assert_async().await;
}
