use crate::error::AppError;
use crate::model::requests::{AbTestRequest, DeviceRouting, RouteMap, RoutingType, TimeRoutingRule};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for smart routing and A/B testing
///
/// Most of these are plan-gated; a free account gets a client failure whose
/// [`crate::error::ApiFailure::code`] is `PRO_REQUIRED`.
#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Gets every routing rule of a link
    async fn get_routing(&self, slug: &str) -> Result<Value, AppError>;

    /// Routes by device class
    async fn set_device_routing(&self, slug: &str, routing: DeviceRouting)
    -> Result<Value, AppError>;

    /// Routes by visitor country code; the `default` key is the fallback
    async fn set_geo_routing(&self, slug: &str, routes: &RouteMap) -> Result<Value, AppError>;

    /// Routes by referring host; the `default` key is the fallback
    async fn set_referrer_routing(&self, slug: &str, routes: &RouteMap)
    -> Result<Value, AppError>;

    /// Routes by time window
    async fn set_time_routing(
        &self,
        slug: &str,
        rules: &[TimeRoutingRule],
    ) -> Result<Value, AppError>;

    /// Deletes one kind of routing, or all of them when `routing_type` is `None`
    async fn delete_routing(
        &self,
        slug: &str,
        routing_type: Option<RoutingType>,
    ) -> Result<Value, AppError>;

    /// Starts an A/B test
    ///
    /// The split must lie in `0..=100`.
    async fn create_ab_test(&self, slug: &str, test: AbTestRequest) -> Result<Value, AppError>;

    /// Gets the click counts of both variants
    async fn get_ab_results(&self, slug: &str) -> Result<Value, AppError>;

    /// Stops an A/B test
    async fn delete_ab_test(&self, slug: &str) -> Result<Value, AppError>;
}
