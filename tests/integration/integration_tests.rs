use crate::common::{api_key_client, mock_server, respond_json};
use edgelink_client::prelude::*;
use mockito::Matcher;

#[tokio::test]
async fn test_domain_lifecycle() {
    let mut server = mock_server().await;
    let add = respond_json(
        server
            .mock("POST", "/api/domains")
            .match_body(Matcher::Json(json!({"domain_name": "links.example.com"}))),
        201,
        json!({"domain_id": "d_1", "domain_name": "links.example.com", "verified": false}),
    )
    .create_async()
    .await;
    let _list = respond_json(
        server.mock("GET", "/api/domains"),
        200,
        json!({"domains": [{"domain_id": "d_1", "domain_name": "links.example.com", "verified": true}]}),
    )
    .create_async()
    .await;
    let verify = respond_json(
        server.mock("POST", "/api/domains/d_1/verify"),
        200,
        json!({"verified": true}),
    )
    .create_async()
    .await;
    let delete = respond_json(
        server.mock("DELETE", "/api/domains/d_1"),
        200,
        json!({"message": "Domain deleted"}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let added = client.add_domain("links.example.com").await.unwrap();
    client.verify_domain("d_1").await.unwrap();
    let list = client.list_domains().await.unwrap();
    client.delete_domain("d_1").await.unwrap();

    assert_eq!(added["domain_id"], "d_1");
    assert!(list.domains[0].verified);
    add.assert_async().await;
    verify.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_add_blank_domain_is_rejected() {
    let server = mock_server().await;
    let client = api_key_client(&server);

    let err = client.add_domain("  ").await.unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_webhook_lifecycle() {
    let mut server = mock_server().await;
    let create = respond_json(
        server
            .mock("POST", "/api/webhooks")
            .match_body(Matcher::Json(json!({
                "url": "https://hooks.example.com/edgelink",
                "events": ["link.clicked"],
                "name": "clicks"
            }))),
        201,
        json!({
            "webhook_id": "w_1",
            "url": "https://hooks.example.com/edgelink",
            "name": "clicks",
            "events": ["link.clicked"]
        }),
    )
    .create_async()
    .await;
    let _list = respond_json(
        server.mock("GET", "/api/webhooks"),
        200,
        json!({"webhooks": [{"webhook_id": "w_1", "url": "https://hooks.example.com/edgelink"}]}),
    )
    .create_async()
    .await;
    let delete = respond_json(
        server.mock("DELETE", "/api/webhooks/w_1"),
        200,
        json!({"message": "Webhook deleted"}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let webhook = client
        .create_webhook(
            CreateWebhookRequest::new(
                "https://hooks.example.com/edgelink",
                vec!["link.clicked".to_string()],
            )
            .with_name("clicks"),
        )
        .await
        .unwrap();
    let list = client.list_webhooks().await.unwrap();
    client.delete_webhook(&webhook.webhook_id).await.unwrap();

    assert_eq!(webhook.events, vec!["link.clicked".to_string()]);
    assert_eq!(list.webhooks.len(), 1);
    create.assert_async().await;
    delete.assert_async().await;
}
