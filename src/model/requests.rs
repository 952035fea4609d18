/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_AB_SPLIT, DEFAULT_API_KEY_EXPIRY_DAYS, DEFAULT_API_KEY_NAME, DEFAULT_GROUP_COLOR,
};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Which token, if any, is attached to a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// API key if configured, otherwise the session token
    #[default]
    Resolved,
    /// Session token only; the request fails without one
    SessionOnly,
    /// No `Authorization` header
    None,
}

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON with `application/json`
    Json(Value),
    /// Sent verbatim with an explicit content type
    Raw {
        /// Body text
        content: String,
        /// Value of the `Content-Type` header
        content_type: String,
    },
}

impl RequestBody {
    /// Content type the body is sent with
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match self {
            RequestBody::Json(_) => None,
            RequestBody::Raw { content_type, .. } => Some(content_type),
        }
    }
}

/// Everything needed to issue one call to the service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, e.g. `/api/links`
    pub path: String,
    /// Query parameters in the order they are sent
    pub query: Vec<(String, String)>,
    /// Optional payload
    pub body: Option<RequestBody>,
    /// Status that marks success; any 2xx when `None`
    pub expected_status: Option<StatusCode>,
    /// Token selection
    pub auth: AuthMode,
}

impl ApiRequest {
    /// Creates a request without body, query or expected status
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            expected_status: None,
            auth: AuthMode::Resolved,
        }
    }

    /// Appends a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends a query parameter when the value is present
    pub fn with_optional_query<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with_query(key, v),
            None => self,
        }
    }

    /// Sets a JSON body
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Sets a raw body with its content type
    pub fn with_raw(mut self, content: impl Into<String>, content_type: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Raw {
            content: content.into(),
            content_type: content_type.into(),
        });
        self
    }

    /// Sets the status that marks success
    pub fn expect_status(mut self, status: StatusCode) -> Self {
        self.expected_status = Some(status);
        self
    }

    /// Sets the token selection
    pub fn with_auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    /// Whether `status` counts as success for this request
    #[must_use]
    pub fn is_success(&self, status: StatusCode) -> bool {
        match self.expected_status {
            Some(expected) => status == expected,
            None => status.is_success(),
        }
    }
}

/// Body of `POST /api/shorten`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShortenRequest {
    /// Destination URL
    pub url: String,
    /// Caller-chosen slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_slug: Option<String>,
    /// Group to place the link in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Expiry instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Maximum number of clicks before the link stops resolving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_clicks: Option<u64>,
    /// Password protecting the link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Additional fields passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShortenRequest {
    /// Creates a request for the given destination
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the custom slug
    pub fn with_custom_slug(mut self, slug: impl Into<String>) -> Self {
        self.custom_slug = Some(slug.into());
        self
    }

    /// Set the group
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Set the expiry instant
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Set the click limit
    pub fn with_max_clicks(mut self, max_clicks: u64) -> Self {
        self.max_clicks = Some(max_clicks);
        self
    }

    /// Set the link password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Adds a free-form field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Body of `PUT /api/links/{slug}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateLinkRequest {
    /// New destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// New slug
    #[serde(rename = "slug", skip_serializing_if = "Option::is_none")]
    pub new_slug: Option<String>,
}

impl UpdateLinkRequest {
    /// Changes only the destination
    pub fn destination(destination: impl Into<String>) -> Self {
        Self {
            destination: Some(destination.into()),
            new_slug: None,
        }
    }

    /// Also renames the slug
    pub fn with_new_slug(mut self, slug: impl Into<String>) -> Self {
        self.new_slug = Some(slug.into());
        self
    }

    /// Whether nothing would be changed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destination.is_none() && self.new_slug.is_none()
    }
}

/// Query of `GET /api/links`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLinksQuery {
    /// 1-based page number
    pub page: u32,
    /// Page size; the client's configured page size when `None`
    pub limit: Option<u32>,
    /// Free-text filter
    pub search: Option<String>,
}

impl Default for ListLinksQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: None,
            search: None,
        }
    }
}

impl ListLinksQuery {
    /// First page with the given size
    pub fn new(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the search filter
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Body of `POST /api/groups`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateGroupRequest {
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display colour
    pub color: String,
}

impl CreateGroupRequest {
    /// Group with the default colour
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            color: DEFAULT_GROUP_COLOR.to_string(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the colour
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Body of `PUT /api/groups/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateGroupRequest {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description; `Some("")` clears it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Body of the device routing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceRouting {
    /// Destination for phones
    pub mobile: String,
    /// Destination for desktops
    pub desktop: String,
    /// Destination for tablets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet: Option<String>,
}

/// Kinds of routing rules a link can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingType {
    /// By device class
    Device,
    /// By visitor country
    Geo,
    /// By referring site
    Referrer,
    /// By time window
    Time,
}

impl RoutingType {
    /// Name used in paths and query strings
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingType::Device => "device",
            RoutingType::Geo => "geo",
            RoutingType::Referrer => "referrer",
            RoutingType::Time => "time",
        }
    }
}

impl fmt::Display for RoutingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One window of time-based routing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRoutingRule {
    /// First hour of the window, 0-23
    pub start_hour: u8,
    /// Hour the window ends, exclusive
    pub end_hour: u8,
    /// ISO weekdays (1 = Monday); every day when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<u8>>,
    /// Destination while the window is active
    pub destination: String,
    /// IANA time zone of the window, e.g. `America/New_York`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl TimeRoutingRule {
    /// Daily window in UTC
    pub fn new(start_hour: u8, end_hour: u8, destination: impl Into<String>) -> Self {
        Self {
            start_hour,
            end_hour,
            days: None,
            destination: destination.into(),
            timezone: None,
        }
    }

    /// Restrict to the given weekdays
    pub fn on_days(mut self, days: Vec<u8>) -> Self {
        self.days = Some(days);
        self
    }

    /// Set the time zone
    pub fn in_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

/// Mapping from a request attribute (country code, referrer host) to a destination
pub type RouteMap = BTreeMap<String, String>;

/// Body of `POST /api/links/{slug}/ab-test`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbTestRequest {
    /// Destination of variant A
    pub variant_a: String,
    /// Destination of variant B
    pub variant_b: String,
    /// Percentage of traffic sent to variant A
    pub split: u8,
}

impl AbTestRequest {
    /// Even split between both variants
    pub fn new(variant_a: impl Into<String>, variant_b: impl Into<String>) -> Self {
        Self {
            variant_a: variant_a.into(),
            variant_b: variant_b.into(),
            split: DEFAULT_AB_SPLIT,
        }
    }

    /// Set the traffic share of variant A
    pub fn with_split(mut self, split: u8) -> Self {
        self.split = split;
        self
    }
}

/// Body of `POST /api/webhooks`
#[derive(Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateWebhookRequest {
    /// Target URL
    pub url: String,
    /// Events to deliver, e.g. `link.clicked`
    pub events: Vec<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Restrict to one link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Signing secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl CreateWebhookRequest {
    /// Webhook for the given events
    pub fn new(url: impl Into<String>, events: Vec<String>) -> Self {
        Self {
            url: url.into(),
            events,
            ..Default::default()
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict to a single link
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the signing secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

impl fmt::Debug for CreateWebhookRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateWebhookRequest")
            .field("url", &self.url)
            .field("events", &self.events)
            .field("name", &self.name)
            .field("slug", &self.slug)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Body of `POST /api/keys`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateApiKeyRequest {
    /// Name shown in the key list
    pub name: String,
    /// Lifetime of the key
    pub expires_in_days: u32,
}

impl Default for CreateApiKeyRequest {
    fn default() -> Self {
        Self {
            name: DEFAULT_API_KEY_NAME.to_string(),
            expires_in_days: DEFAULT_API_KEY_EXPIRY_DAYS,
        }
    }
}

/// Export encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// JSON document
    #[default]
    Json,
    /// CSV text
    Csv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Csv => f.write_str("csv"),
        }
    }
}

/// QR code image encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrFormat {
    /// Scalable vector image
    #[default]
    Svg,
    /// Raster image
    Png,
}

impl fmt::Display for QrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrFormat::Svg => f.write_str("svg"),
            QrFormat::Png => f.write_str("png"),
        }
    }
}
