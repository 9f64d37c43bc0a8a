use mealslot_gateway::{GatewayConfig, HttpGateway};
use std::time::Duration;
use wiremock::MockServer;

pub fn config(server: &MockServer) -> GatewayConfig {
    GatewayConfig {
        edamam_url: server.uri(),
        edamam_app_id: "app-id".to_owned(),
        edamam_app_key: "app-key".to_owned(),
        spoonacular_url: server.uri(),
        spoonacular_api_key: "spoon-key".to_owned(),
        timeout: Duration::from_millis(500),
        retries: 1,
    }
}

pub fn gateway(server: &MockServer) -> anyhow::Result<HttpGateway> {
    Ok(HttpGateway::new(config(server))?)
}
