use crate::common::{api_key_client, mock_server, respond_json};
use edgelink_client::prelude::*;
use mockito::Matcher;

#[tokio::test]
async fn test_get_stats() {
    let mut server = mock_server().await;
    let _stats = respond_json(
        server.mock("GET", "/api/stats/promo"),
        200,
        json!({"slug": "promo", "clicks": 42}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let stats = client.get_stats("promo").await.unwrap();

    assert_eq!(stats["clicks"], 42);
}

#[tokio::test]
async fn test_analytics_default_range() {
    let mut server = mock_server().await;
    let analytics = respond_json(
        server
            .mock("GET", "/api/analytics/promo")
            .match_query(Matcher::UrlEncoded("range".into(), "7d".into())),
        200,
        json!({"total_clicks": 10, "countries": {"US": 6, "DE": 4}}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let result = client.get_analytics("promo", None).await.unwrap();

    assert_eq!(result["countries"]["US"], 6);
    analytics.assert_async().await;
}

#[tokio::test]
async fn test_group_and_overview_analytics() {
    let mut server = mock_server().await;
    let group = respond_json(
        server
            .mock("GET", "/api/groups/g_1/analytics")
            .match_query(Matcher::UrlEncoded("range".into(), "30d".into())),
        200,
        json!({"total_clicks": 100}),
    )
    .create_async()
    .await;
    let overview = respond_json(
        server
            .mock("GET", "/api/analytics/overview")
            .match_query(Matcher::UrlEncoded("range".into(), "7d".into())),
        200,
        json!({"total_links": 8}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    client.get_group_analytics("g_1", Some("30d")).await.unwrap();
    let result = client.get_overview_analytics(None).await.unwrap();

    assert_eq!(result["total_links"], 8);
    group.assert_async().await;
    overview.assert_async().await;
}

#[tokio::test]
async fn test_export_analytics_csv() {
    let mut server = mock_server().await;
    let export = server
        .mock("GET", "/api/export/analytics/promo")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("format".into(), "csv".into()),
            Matcher::UrlEncoded("range".into(), "30d".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body("date,clicks\n2026-10-16,3\n")
        .create_async()
        .await;

    let client = api_key_client(&server);
    let data = client
        .export_analytics("promo", ExportFormat::Csv, None)
        .await
        .unwrap();

    assert_eq!(data.as_csv(), Some("date,clicks\n2026-10-16,3\n"));
    export.assert_async().await;
}
