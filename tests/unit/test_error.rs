use edgelink_client::error::{ApiFailure, AppError, PRO_REQUIRED_CODE};
use edgelink_client::model::responses::ResponseBody;
use reqwest::StatusCode;
use serde_json::json;

fn failure(status: u16, body: ResponseBody) -> AppError {
    AppError::from_failure(ApiFailure::new(
        StatusCode::from_u16(status).unwrap(),
        body,
    ))
}

#[test]
fn test_classifies_auth_failures() {
    assert!(matches!(failure(401, ResponseBody::Empty), AppError::Auth(_)));
    assert!(matches!(failure(403, ResponseBody::Empty), AppError::Auth(_)));
}

#[test]
fn test_classifies_client_failures() {
    let error = failure(404, ResponseBody::Json(json!({"error": "Link not found"})));
    assert!(matches!(error, AppError::Client(_)));
    assert!(error.is_not_found());
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));

    let error = failure(409, ResponseBody::Empty);
    assert!(matches!(error, AppError::Client(_)));
    assert!(!error.is_not_found());
}

#[test]
fn test_classifies_server_failures() {
    let error = failure(502, ResponseBody::Text("bad gateway".to_string()));
    assert!(matches!(error, AppError::Server(_)));
    assert_eq!(error.failure().unwrap().message().as_deref(), Some("bad gateway"));
}

#[test]
fn test_classifies_unexpected_success_status() {
    assert!(matches!(
        failure(200, ResponseBody::Empty),
        AppError::UnexpectedStatus(_)
    ));
    assert!(matches!(
        failure(302, ResponseBody::Empty),
        AppError::UnexpectedStatus(_)
    ));
}

#[test]
fn test_pro_required_code() {
    let body = json!({"error": "Device routing requires a Pro plan", "code": PRO_REQUIRED_CODE});
    let error = failure(403, ResponseBody::Json(body));

    assert!(error.is_pro_required());
    let api_failure = error.failure().unwrap();
    assert_eq!(api_failure.code(), Some("PRO_REQUIRED"));
    assert_eq!(
        api_failure.message().as_deref(),
        Some("Device routing requires a Pro plan")
    );
}

#[test]
fn test_message_falls_back_to_message_field() {
    let api_failure = ApiFailure::new(
        StatusCode::BAD_REQUEST,
        ResponseBody::Json(json!({"message": "url is required"})),
    );
    assert_eq!(api_failure.message().as_deref(), Some("url is required"));
    assert_eq!(api_failure.code(), None);
    assert!(!api_failure.is_pro_required());
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        AppError::InvalidInput("split out of range".to_string()).to_string(),
        "invalid input: split out of range"
    );
    assert_eq!(
        AppError::Decode("body is not JSON".to_string()).to_string(),
        "could not decode response: body is not JSON"
    );
    assert_eq!(
        AppError::MissingSessionToken.to_string(),
        "session token required, login first"
    );
    assert_eq!(
        AppError::MissingCredentials.to_string(),
        "no email/password credentials configured"
    );

    let error = failure(404, ResponseBody::Json(json!({"error": "Link not found"})));
    assert_eq!(
        error.to_string(),
        "request rejected: 404 Not Found: Link not found"
    );
}

#[test]
fn test_non_http_errors_have_no_status() {
    assert_eq!(AppError::MissingSessionToken.status(), None);
    assert!(AppError::InvalidInput(String::new()).failure().is_none());
    assert!(!AppError::MissingCredentials.is_transport());
}

#[test]
fn test_from_serde_json_error() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = err.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error"));
}
