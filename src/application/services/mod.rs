/// Account, usage and API key operations
pub mod account_service;
/// Analytics operations
pub mod analytics_service;
/// Bulk import, export and bulk link operations
pub mod bulk_service;
/// Group operations
pub mod group_service;
/// Custom domain and webhook operations
pub mod integration_service;
/// Link operations
pub mod link_service;
/// Routing and A/B test operations
pub mod routing_service;

pub use crate::application::interfaces::account::*;
pub use crate::application::interfaces::analytics::*;
pub use crate::application::interfaces::bulk::*;
pub use crate::application::interfaces::group::*;
pub use crate::application::interfaces::integration::*;
pub use crate::application::interfaces::link::*;
pub use crate::application::interfaces::routing::*;
