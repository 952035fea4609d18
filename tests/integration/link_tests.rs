use crate::common::{
    TEST_API_KEY, anonymous_client, api_key_client, bearer, mock_server, respond_json,
};
use edgelink_client::prelude::*;
use mockito::Matcher;

#[tokio::test]
async fn test_anonymous_shorten_sends_no_authorization() {
    let mut server = mock_server().await;
    let shorten = respond_json(
        server
            .mock("POST", "/api/shorten")
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::Json(json!({"url": "https://example.com"}))),
        201,
        json!({"slug": "abc123", "short_url": "https://go.shortedbro.xyz/abc123"}),
    )
    .create_async()
    .await;

    let client = anonymous_client(&server);
    let created = client
        .shorten(ShortenRequest::new("https://example.com"))
        .await
        .unwrap();

    assert_eq!(created.slug, "abc123");
    assert_eq!(created.short_url, "https://go.shortedbro.xyz/abc123");
    shorten.assert_async().await;
}

#[tokio::test]
async fn test_anonymous_shorten_rejected() {
    let mut server = mock_server().await;
    let _shorten = respond_json(
        server
            .mock("POST", "/api/shorten")
            .match_header("authorization", Matcher::Missing),
        401,
        json!({"error": "Authentication required"}),
    )
    .create_async()
    .await;

    let client = anonymous_client(&server);
    let err = client
        .shorten(ShortenRequest::new("https://example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Auth(_)));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
}

#[tokio::test]
async fn test_shorten_then_get_round_trip() {
    let mut server = mock_server().await;
    let _shorten = respond_json(
        server
            .mock("POST", "/api/shorten")
            .match_header("authorization", bearer(TEST_API_KEY).as_str())
            .match_body(Matcher::PartialJson(json!({
                "url": "https://example.com/launch",
                "custom_slug": "launch",
                "group_id": "g_1"
            }))),
        201,
        json!({"slug": "launch", "short_url": "https://go.shortedbro.xyz/launch"}),
    )
    .create_async()
    .await;
    let _get = respond_json(
        server
            .mock("GET", "/api/links/launch")
            .match_header("authorization", bearer(TEST_API_KEY).as_str()),
        200,
        json!({
            "slug": "launch",
            "destination": "https://example.com/launch",
            "click_count": 0,
            "created_at": "2026-10-17T10:00:00Z"
        }),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let created = client
        .shorten(
            ShortenRequest::new("https://example.com/launch")
                .with_custom_slug("launch")
                .with_group("g_1"),
        )
        .await
        .unwrap();
    let link = client.get_link(&created.slug).await.unwrap();

    assert_eq!(link.destination, "https://example.com/launch");
    assert_eq!(link.created_at.as_deref(), Some("2026-10-17T10:00:00Z"));
}

#[tokio::test]
async fn test_shorten_conflict_is_client_error() {
    let mut server = mock_server().await;
    let _shorten = respond_json(
        server.mock("POST", "/api/shorten"),
        409,
        json!({"error": "Slug already taken"}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let err = client
        .shorten(ShortenRequest::new("https://example.com").with_custom_slug("taken"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Client(_)));
    assert_eq!(
        err.failure().and_then(ApiFailure::message).as_deref(),
        Some("Slug already taken")
    );
}

#[tokio::test]
async fn test_list_links_pagination() {
    let mut server = mock_server().await;
    let list = respond_json(
        server.mock("GET", "/api/links").match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("search".into(), "promo code".into()),
        ])),
        200,
        json!({
            "links": [
                {"slug": "promo1", "destination": "https://example.com/1"},
                {"slug": "promo2", "destination": "https://example.com/2"}
            ],
            "total": 5,
            "totalPages": 3
        }),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let page = client
        .list_links(ListLinksQuery::new(2).with_page(2).with_search("promo code"))
        .await
        .unwrap();

    assert_eq!(page.links.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    list.assert_async().await;
}

#[tokio::test]
async fn test_delete_twice() {
    let mut server = mock_server().await;
    let _first = respond_json(
        server.mock("DELETE", "/api/links/gone"),
        200,
        json!({"message": "Link deleted"}),
    )
    .expect(1)
    .create_async()
    .await;
    let _second = respond_json(
        server.mock("DELETE", "/api/links/gone"),
        404,
        json!({"error": "Link not found"}),
    )
    .expect(1)
    .create_async()
    .await;

    let client = api_key_client(&server);
    client.delete_link("gone").await.unwrap();
    let err = client.delete_link("gone").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_link() {
    let mut server = mock_server().await;
    let update = respond_json(
        server
            .mock("PUT", "/api/links/promo")
            .match_body(Matcher::Json(json!({
                "destination": "https://example.com/new",
                "slug": "promo-2026"
            }))),
        200,
        json!({"slug": "promo-2026", "destination": "https://example.com/new"}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    let result = client
        .update_link(
            "promo",
            UpdateLinkRequest::destination("https://example.com/new").with_new_slug("promo-2026"),
        )
        .await
        .unwrap();

    assert_eq!(result["slug"], "promo-2026");
    update.assert_async().await;
}

#[tokio::test]
async fn test_move_link_out_of_group_sends_null() {
    let mut server = mock_server().await;
    let moved = respond_json(
        server
            .mock("PUT", "/api/links/promo/group")
            .match_body(Matcher::Json(json!({"group_id": null}))),
        200,
        json!({"slug": "promo", "group_id": null}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    client.move_link_to_group("promo", None).await.unwrap();
    moved.assert_async().await;
}

#[tokio::test]
async fn test_generate_qr_returns_image_bytes() {
    let mut server = mock_server().await;
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a];
    let _qr = server
        .mock("GET", "/api/links/promo/qr")
        .match_query(Matcher::UrlEncoded("format".into(), "png".into()))
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(png.clone())
        .create_async()
        .await;

    let client = api_key_client(&server);
    let image = client.generate_qr("promo", QrFormat::Png).await.unwrap();

    assert_eq!(image, png);
}

#[tokio::test]
async fn test_failed_request_does_not_touch_credential() {
    let mut server = mock_server().await;
    let _get = respond_json(
        server.mock("GET", "/api/links/missing"),
        404,
        json!({"error": "Link not found"}),
    )
    .create_async()
    .await;

    let client = api_key_client(&server);
    assert!(client.get_link("missing").await.is_err());

    assert_eq!(
        client.auth().credential(),
        Some(&Credential::api_key(TEST_API_KEY))
    );
    assert_eq!(client.auth_state().await, AuthState::ApiKey);
}

#[tokio::test]
async fn test_shorten_accepts_json_declared_as_text() {
    let mut server = mock_server().await;
    let _shorten = server
        .mock("POST", "/api/shorten")
        .with_status(201)
        .with_header("content-type", "text/plain;charset=UTF-8")
        .with_body(r#"{"slug":"abc","short_url":"https://s/abc"}"#)
        .create_async()
        .await;

    let client = api_key_client(&server);
    let created = client
        .shorten(ShortenRequest::new("https://example.com"))
        .await
        .unwrap();

    assert_eq!(created.slug, "abc");
    assert_eq!(created.short_url, "https://s/abc");
}

#[tokio::test]
async fn test_undecodable_success_is_decode_error() {
    let mut server = mock_server().await;
    let _get = server
        .mock("GET", "/api/links/promo")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = api_key_client(&server);
    let err = client.get_link("promo").await.unwrap_err();

    assert!(matches!(err, AppError::Decode(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_list_links_uses_configured_page_size() {
    let mut server = mock_server().await;
    let list = respond_json(
        server.mock("GET", "/api/links").match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "7".into()),
        ])),
        200,
        json!({"links": [], "total": 0}),
    )
    .create_async()
    .await;

    let mut config = Config::with_base_url(server.url(), Credentials::api_key(TEST_API_KEY));
    config.page_size = 7;
    let client = Client::new_lazy(config).unwrap();
    client.list_links(ListLinksQuery::default()).await.unwrap();

    list.assert_async().await;
}
