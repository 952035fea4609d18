use crate::application::interfaces::routing::RoutingService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::endpoint;
use crate::model::requests::{AbTestRequest, DeviceRouting, RouteMap, RoutingType, TimeRoutingRule};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, info};

impl Client {
    async fn set_routing<B: Serialize + Sync + ?Sized>(
        &self,
        slug: &str,
        routing_type: RoutingType,
        body: &B,
    ) -> Result<Value, AppError> {
        let request = endpoint::SET_ROUTING
            .request(&[slug, routing_type.as_str()])?
            .with_json(body)?;
        let result = self.call(request).await?;

        info!("{} routing configured for {}", routing_type, slug);
        Ok(result)
    }
}

#[async_trait]
impl RoutingService for Client {
    async fn get_routing(&self, slug: &str) -> Result<Value, AppError> {
        debug!("Getting routing for {}", slug);
        self.call(endpoint::GET_ROUTING.request(&[slug])?).await
    }

    async fn set_device_routing(
        &self,
        slug: &str,
        routing: DeviceRouting,
    ) -> Result<Value, AppError> {
        self.set_routing(slug, RoutingType::Device, &routing).await
    }

    async fn set_geo_routing(&self, slug: &str, routes: &RouteMap) -> Result<Value, AppError> {
        self.set_routing(slug, RoutingType::Geo, &json!({ "routes": routes }))
            .await
    }

    async fn set_referrer_routing(
        &self,
        slug: &str,
        routes: &RouteMap,
    ) -> Result<Value, AppError> {
        self.set_routing(slug, RoutingType::Referrer, &json!({ "routes": routes }))
            .await
    }

    async fn set_time_routing(
        &self,
        slug: &str,
        rules: &[TimeRoutingRule],
    ) -> Result<Value, AppError> {
        self.set_routing(slug, RoutingType::Time, &json!({ "rules": rules }))
            .await
    }

    async fn delete_routing(
        &self,
        slug: &str,
        routing_type: Option<RoutingType>,
    ) -> Result<Value, AppError> {
        match routing_type {
            Some(kind) => info!("Deleting {} routing of {}", kind, slug),
            None => info!("Deleting all routing of {}", slug),
        }

        let request = endpoint::DELETE_ROUTING
            .request(&[slug])?
            .with_optional_query("type", routing_type);
        self.call(request).await
    }

    async fn create_ab_test(&self, slug: &str, test: AbTestRequest) -> Result<Value, AppError> {
        if test.split > 100 {
            return Err(AppError::InvalidInput(format!(
                "A/B split must be between 0 and 100, got {}",
                test.split
            )));
        }
        info!(
            "Creating A/B test for {}: {}% / {}%",
            slug,
            test.split,
            100 - test.split
        );

        let request = endpoint::CREATE_AB_TEST
            .request(&[slug])?
            .with_json(&test)?;
        self.call(request).await
    }

    async fn get_ab_results(&self, slug: &str) -> Result<Value, AppError> {
        debug!("Getting A/B results for {}", slug);
        self.call(endpoint::GET_AB_TEST.request(&[slug])?).await
    }

    async fn delete_ab_test(&self, slug: &str) -> Result<Value, AppError> {
        info!("Deleting A/B test of {}", slug);
        self.call(endpoint::DELETE_AB_TEST.request(&[slug])?)
            .await
    }
}
