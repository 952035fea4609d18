/// Account, usage and API key interface
pub mod account;
/// Analytics interface
pub mod analytics;
/// Bulk import/export interface
pub mod bulk;
/// Group interface
pub mod group;
/// Domain and webhook interface
pub mod integration;
/// Link interface
pub mod link;
/// Routing and A/B test interface
pub mod routing;
