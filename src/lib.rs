//! # EdgeLink Client
//!
//! Async client for the EdgeLink link-shortening REST API.
//!
//! Every operation goes through one client core: it resolves the bearer token
//! (API key first, then the session token obtained through login), builds the
//! headers, sends a single request and classifies the answer into a typed
//! result or an [`error::AppError`].
//!
//! ## Features
//!
//! - API key or email/password authentication
//! - Link creation, listing, updates, deletion and QR codes
//! - Bulk import (JSON, CSV or records) and export
//! - Groups, analytics, smart routing and A/B tests
//! - Custom domains, webhooks, API keys and usage
//! - Optional client-side rate limiting
//!
//! ## Example
//!
//! ```ignore
//! use edgelink_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!
//!     let client = Client::new(Config::new()).await?;
//!     let created = client
//!         .shorten(ShortenRequest::new("https://example.com").with_custom_slug("docs"))
//!         .await?;
//!     info!("Short URL: {}", created.short_url);
//!
//!     let page = client.list_links(ListLinksQuery::new(20)).await?;
//!     info!("{} links in total", page.total);
//!     Ok(())
//! }
//! ```

/// Configuration, services and rate limiting
pub mod application;
/// Credentials, session token and header construction
pub mod auth;
/// Client core
pub mod client;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request, response and endpoint models plus the HTTP transport
pub mod model;
/// Prelude with the commonly used types and traits
pub mod prelude;
/// Logging, environment and CSV helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
