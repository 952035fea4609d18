/// Base URL used when `EDGELINK_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://go.shortedbro.xyz";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default page size for paginated listings
pub const DEFAULT_PAGE_SIZE: u32 = 50;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("edgelink-client/", env!("CARGO_PKG_VERSION"));
/// Prefix of long-lived API keys
pub const API_KEY_PREFIX: &str = "elk_";
/// Content type of JSON bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Content type of CSV bodies
pub const CSV_CONTENT_TYPE: &str = "text/csv";
/// Analytics window used when none is given
pub const DEFAULT_TIME_RANGE: &str = "7d";
/// Analytics window used for exports when none is given
pub const DEFAULT_EXPORT_RANGE: &str = "30d";
/// Colour assigned to new groups
pub const DEFAULT_GROUP_COLOR: &str = "#3B82F6";
/// Plan requested on signup when none is given
pub const DEFAULT_PLAN: &str = "free";
/// Traffic share of variant A in a new A/B test
pub const DEFAULT_AB_SPLIT: u8 = 50;
/// Name given to generated API keys when none is given
pub const DEFAULT_API_KEY_NAME: &str = "edgelink-client";
/// Lifetime of generated API keys in days
pub const DEFAULT_API_KEY_EXPIRY_DAYS: u32 = 365;
