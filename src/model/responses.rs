/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::ExportFormat;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a response, decoded according to its content type
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// `application/json` body
    Json(Value),
    /// Textual body such as `text/csv`
    Text(String),
    /// Binary body such as a PNG QR code
    Bytes(Vec<u8>),
    /// No body at all
    Empty,
}

impl ResponseBody {
    /// Returns the JSON value if the body is JSON
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the text if the body is textual
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the body is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, ResponseBody::Empty)
    }
}

/// Successful response of the service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Decoded body
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Deserializes a JSON body into `T`
    ///
    /// An empty body deserializes from `null`, so `Option<T>` and `()` work
    /// for endpoints that answer without content. Text bodies are parsed as
    /// JSON whatever content type they were declared with.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        match &self.body {
            ResponseBody::Json(value) => Ok(T::deserialize(value)?),
            ResponseBody::Empty => Ok(serde_json::from_value(Value::Null)?),
            ResponseBody::Text(text) => Ok(T::deserialize(&parse_text(text)?)?),
            ResponseBody::Bytes(_) => Err(AppError::Decode(
                "expected a JSON body, got binary".to_string(),
            )),
        }
    }

    /// Returns the raw JSON value, `null` for empty bodies
    pub fn into_value(self) -> Result<Value, AppError> {
        match self.body {
            ResponseBody::Json(value) => Ok(value),
            ResponseBody::Empty => Ok(Value::Null),
            ResponseBody::Text(text) => parse_text(&text),
            ResponseBody::Bytes(_) => Err(AppError::Decode(
                "expected a JSON body, got binary".to_string(),
            )),
        }
    }

    /// Returns the body as text; JSON bodies are re-serialized
    pub fn into_text(self) -> Result<String, AppError> {
        match self.body {
            ResponseBody::Text(text) => Ok(text),
            ResponseBody::Json(value) => Ok(value.to_string()),
            ResponseBody::Empty => Ok(String::new()),
            ResponseBody::Bytes(bytes) => String::from_utf8(bytes)
                .map_err(|e| AppError::Decode(format!("body is not UTF-8: {e}"))),
        }
    }

    /// Returns the body as raw bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self.body {
            ResponseBody::Bytes(bytes) => bytes,
            ResponseBody::Text(text) => text.into_bytes(),
            ResponseBody::Json(value) => value.to_string().into_bytes(),
            ResponseBody::Empty => Vec::new(),
        }
    }
}

fn parse_text(text: &str) -> Result<Value, AppError> {
    serde_json::from_str(text).map_err(|e| AppError::Decode(format!("body is not JSON: {e}")))
}

/// Export payload: parsed JSON or raw CSV text
#[derive(Debug, Clone, PartialEq)]
pub enum ExportData {
    /// `format=json`
    Json(Value),
    /// `format=csv`
    Csv(String),
}

impl ExportData {
    /// Interprets an export response according to the requested format
    pub fn from_response(response: ApiResponse, format: ExportFormat) -> Result<Self, AppError> {
        match format {
            ExportFormat::Json => Ok(ExportData::Json(response.into_value()?)),
            ExportFormat::Csv => Ok(ExportData::Csv(response.into_text()?)),
        }
    }

    /// CSV text, if this is a CSV export
    #[must_use]
    pub fn as_csv(&self) -> Option<&str> {
        match self {
            ExportData::Csv(text) => Some(text),
            ExportData::Json(_) => None,
        }
    }
}

/// A short link as stored by the service
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Link {
    /// Short identifier
    pub slug: String,
    /// Target URL
    #[serde(default, alias = "url")]
    pub destination: String,
    /// Full short URL, when returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    /// Number of recorded clicks
    #[serde(default)]
    pub click_count: u64,
    /// Creation timestamp as sent by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Group the link belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer of `POST /api/shorten`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShortenResponse {
    /// Slug assigned to the new link
    pub slug: String,
    /// Public short URL
    pub short_url: String,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of `GET /api/links`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LinksPage {
    /// Total number of links matching the query
    #[serde(default)]
    pub total: u64,
    /// Number of pages at the requested page size
    #[serde(default, rename = "totalPages")]
    pub total_pages: u64,
    /// Links on this page
    #[serde(default)]
    pub links: Vec<Link>,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One rejected row of a bulk import
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ImportRowError {
    /// Row index as reported by the service
    pub row: u64,
    /// Reason the row was rejected
    pub error: String,
}

/// Answer of `POST /api/import/links`
///
/// A partially failed import is still a successful call; rejected rows are
/// listed in `errors`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ImportReport {
    /// Number of rows processed
    #[serde(default)]
    pub total: u64,
    /// Number of links created
    #[serde(default, alias = "imported")]
    pub successful: u64,
    /// Number of rows rejected
    #[serde(default)]
    pub failed: u64,
    /// Rejected rows
    #[serde(default)]
    pub errors: Vec<ImportRowError>,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImportReport {
    /// Whether at least one row was rejected
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Per-item outcome of a client-side bulk create
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkCreateOutcome {
    /// Destination URL of the item
    pub destination: String,
    /// Created slug on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Created short URL on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    /// Error description on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BulkCreateOutcome {
    /// Whether the link was created
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.slug.is_some()
    }
}

/// A link group
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Group {
    /// Group identifier
    pub group_id: String,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Number of links in the group
    #[serde(default)]
    pub link_count: u64,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer of `GET /api/groups`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GroupList {
    /// All groups of the account
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Number of links outside any group
    #[serde(default)]
    pub ungrouped_count: u64,
}

/// Answer of `POST /api/groups`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GroupEnvelope {
    /// The created group
    pub group: Group,
}

/// Answer of `GET /api/groups/{id}`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GroupDetail {
    /// The group
    pub group: Group,
    /// Links of the requested page
    #[serde(default)]
    pub links: Vec<Link>,
    /// Total links in the group
    #[serde(default)]
    pub total: u64,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer of `DELETE /api/groups/{id}`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GroupDeleted {
    /// Links moved to the ungrouped bucket
    #[serde(default)]
    pub links_moved: u64,
}

/// Metadata of an API key
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiKeyInfo {
    /// Key identifier
    #[serde(default, alias = "id")]
    pub key_id: String,
    /// Name given at creation
    #[serde(default)]
    pub name: String,
    /// First characters of the key
    #[serde(default)]
    pub key_prefix: String,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last use timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<String>,
    /// Expiry timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Answer of `GET /api/keys`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiKeyList {
    /// Number of keys
    #[serde(default)]
    pub total: u64,
    /// Key metadata
    #[serde(default)]
    pub keys: Vec<ApiKeyInfo>,
}

/// Answer of `POST /api/keys`; the only time the full key is visible
#[derive(Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreatedApiKey {
    /// The full key, `elk_` prefixed
    pub api_key: String,
    /// Name given at creation
    #[serde(default)]
    pub name: String,
    /// Expiry timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl std::fmt::Debug for CreatedApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreatedApiKey")
            .field("api_key", &"<redacted>")
            .field("name", &self.name)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Answer of `GET /api/usage`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Usage {
    /// Links created
    #[serde(default)]
    pub links_used: u64,
    /// Link quota
    #[serde(default)]
    pub links_limit: u64,
    /// Clicks this month
    #[serde(default)]
    pub clicks_used: u64,
    /// Monthly click quota
    #[serde(default)]
    pub clicks_limit: u64,
    /// API calls today
    #[serde(default)]
    pub api_calls_used: u64,
    /// Daily API call quota
    #[serde(default)]
    pub api_calls_limit: u64,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A configured webhook
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Webhook {
    /// Webhook identifier
    #[serde(default)]
    pub webhook_id: String,
    /// Target URL
    #[serde(default)]
    pub url: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Subscribed events
    #[serde(default)]
    pub events: Vec<String>,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer of `GET /api/webhooks`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WebhookList {
    /// All webhooks of the account
    #[serde(default)]
    pub webhooks: Vec<Webhook>,
}

/// A custom domain
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Domain {
    /// Domain identifier
    #[serde(default)]
    pub domain_id: String,
    /// Host name
    #[serde(default)]
    pub domain_name: String,
    /// Whether ownership has been verified
    #[serde(default)]
    pub verified: bool,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer of `GET /api/domains`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DomainList {
    /// All custom domains of the account
    #[serde(default)]
    pub domains: Vec<Domain>,
}
