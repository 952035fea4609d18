use assert_json_diff::assert_json_eq;
use chrono::{TimeZone, Utc};
use edgelink_client::model::requests::{
    AbTestRequest, ApiRequest, AuthMode, CreateGroupRequest, CreateWebhookRequest, ExportFormat,
    ListLinksQuery, QrFormat, RequestBody, RoutingType, ShortenRequest, TimeRoutingRule,
    UpdateGroupRequest, UpdateLinkRequest,
};
use reqwest::{Method, StatusCode};
use serde_json::json;

#[test]
fn test_shorten_request_minimal() {
    let request = ShortenRequest::new("https://example.com");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"url": "https://example.com"})
    );
}

#[test]
fn test_shorten_request_full() {
    let expires = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 0).unwrap();
    let request = ShortenRequest::new("https://example.com/launch")
        .with_custom_slug("launch")
        .with_group("g_1")
        .with_expires_at(expires)
        .with_max_clicks(100)
        .with_password("hunter2")
        .with_field("utm_source", "newsletter");

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "url": "https://example.com/launch",
            "custom_slug": "launch",
            "group_id": "g_1",
            "expires_at": "2026-12-31T23:59:00Z",
            "max_clicks": 100,
            "password": "hunter2",
            "utm_source": "newsletter"
        })
    );
}

#[test]
fn test_update_link_request() {
    assert!(UpdateLinkRequest::default().is_empty());

    let update = UpdateLinkRequest::destination("https://example.com/new").with_new_slug("fresh");
    assert!(!update.is_empty());
    assert_json_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({"destination": "https://example.com/new", "slug": "fresh"})
    );
}

#[test]
fn test_group_requests() {
    let create = CreateGroupRequest::new("Marketing");
    assert_json_eq!(
        serde_json::to_value(&create).unwrap(),
        json!({"name": "Marketing", "color": "#3B82F6"})
    );

    let create = CreateGroupRequest::new("Sales")
        .with_description("Q4 campaigns")
        .with_color("#EF4444");
    assert_json_eq!(
        serde_json::to_value(&create).unwrap(),
        json!({"name": "Sales", "description": "Q4 campaigns", "color": "#EF4444"})
    );

    let update = UpdateGroupRequest {
        description: Some(String::new()),
        ..Default::default()
    };
    assert_json_eq!(serde_json::to_value(&update).unwrap(), json!({"description": ""}));
}

#[test]
fn test_list_links_query_defaults() {
    let query = ListLinksQuery::new(20).with_page(3).with_search("promo");
    assert_eq!(query.page, 3);
    assert_eq!(query.limit, Some(20));
    assert_eq!(query.search.as_deref(), Some("promo"));
    assert_eq!(ListLinksQuery::new(50).page, 1);
    assert_eq!(ListLinksQuery::default().limit, None);
}

#[test]
fn test_ab_test_default_split() {
    let test = AbTestRequest::new("https://a.example", "https://b.example");
    assert_eq!(test.split, 50);
    assert_eq!(test.with_split(70).split, 70);
}

#[test]
fn test_time_routing_rule() {
    let rule = TimeRoutingRule::new(9, 17, "https://example.com/office")
        .on_days(vec![1, 2, 3, 4, 5])
        .in_timezone("America/New_York");
    assert_json_eq!(
        serde_json::to_value(&rule).unwrap(),
        json!({
            "start_hour": 9,
            "end_hour": 17,
            "days": [1, 2, 3, 4, 5],
            "destination": "https://example.com/office",
            "timezone": "America/New_York"
        })
    );

    let night = TimeRoutingRule::new(0, 9, "https://example.com/night");
    assert_json_eq!(
        serde_json::to_value(&night).unwrap(),
        json!({"start_hour": 0, "end_hour": 9, "destination": "https://example.com/night"})
    );
}

#[test]
fn test_webhook_request_redacts_secret() {
    let request = CreateWebhookRequest::new(
        "https://hooks.example/edgelink",
        vec!["link.clicked".to_string()],
    )
    .with_name("Clicks")
    .with_secret("whsec_123");

    assert!(!format!("{request:?}").contains("whsec_123"));
    assert_eq!(
        serde_json::to_value(&request).unwrap()["secret"],
        json!("whsec_123")
    );
}

#[test]
fn test_enums_render_lowercase() {
    assert_eq!(RoutingType::Referrer.to_string(), "referrer");
    assert_eq!(
        serde_json::to_value(RoutingType::Geo).unwrap(),
        json!("geo")
    );
    assert_eq!(ExportFormat::Csv.to_string(), "csv");
    assert_eq!(ExportFormat::default().to_string(), "json");
    assert_eq!(QrFormat::Png.to_string(), "png");
    assert_eq!(QrFormat::default().to_string(), "svg");
}

#[test]
fn test_api_request_builder() {
    let request = ApiRequest::new(Method::GET, "/api/links")
        .with_query("page", 2)
        .with_optional_query("search", None::<&str>)
        .with_optional_query("limit", Some(10))
        .expect_status(StatusCode::OK)
        .with_auth(AuthMode::None);

    assert_eq!(
        request.query,
        vec![
            ("page".to_string(), "2".to_string()),
            ("limit".to_string(), "10".to_string())
        ]
    );
    assert_eq!(request.auth, AuthMode::None);
    assert!(request.is_success(StatusCode::OK));
    assert!(!request.is_success(StatusCode::CREATED));
}

#[test]
fn test_any_2xx_without_expectation() {
    let request = ApiRequest::new(Method::POST, "/api/import/links").with_raw("a,b\n", "text/csv");

    assert!(request.is_success(StatusCode::OK));
    assert!(request.is_success(StatusCode::CREATED));
    assert!(!request.is_success(StatusCode::FOUND));
    assert_eq!(
        request.body.as_ref().and_then(RequestBody::content_type),
        Some("text/csv")
    );
}
