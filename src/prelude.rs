/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # EdgeLink Client Prelude
//!
//! Brings the client, its configuration, the service traits and the request
//! and response models into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use edgelink_client::prelude::*;
//!
//! let config = Config::with_base_url("https://go.shortedbro.xyz", Credentials::anonymous());
//! let client = Client::new_lazy(config).unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the EdgeLink client
pub use crate::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{ApiFailure, AppError};

// ============================================================================
// CLIENT CORE AND AUTHENTICATION
// ============================================================================

/// Client core
pub use crate::client::Client;

/// Credentials and authentication state
pub use crate::auth::{Auth, AuthState, Credential};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Service traits implemented by [`Client`]
pub use crate::application::services::{
    AccountService, AnalyticsService, BulkService, GroupService, IntegrationService, LinkService,
    RoutingService,
};

// ============================================================================
// MODELS
// ============================================================================

/// Authentication models
pub use crate::model::auth::{AuthResponse, User};

/// Endpoint descriptors
pub use crate::model::endpoint::Endpoint;

/// Request models
pub use crate::model::requests::{
    AbTestRequest, ApiRequest, AuthMode, CreateGroupRequest, CreateWebhookRequest, DeviceRouting,
    ExportFormat, ListLinksQuery, QrFormat, RequestBody, RouteMap, RoutingType, ShortenRequest,
    TimeRoutingRule, UpdateGroupRequest, UpdateLinkRequest,
};

/// Response models
pub use crate::model::responses::{
    ApiKeyInfo, ApiKeyList, ApiResponse, BulkCreateOutcome, CreatedApiKey, Domain, DomainList,
    ExportData, Group, GroupDeleted, GroupDetail, GroupList, ImportReport, ImportRowError, Link,
    LinksPage, ResponseBody, ShortenResponse, Usage, Webhook, WebhookList,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Records to CSV conversion
pub use crate::utils::records::records_to_csv;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Map, Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
