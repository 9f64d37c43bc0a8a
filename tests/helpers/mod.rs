#![allow(dead_code)]

use mealslot::PlanSession;
use mealslot_gateway::{GatewayConfig, HttpGateway};
use mealslot_mealplan::Goals;
use mealslot_shared::Horizon;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::time::Duration;
use time::macros::date;
use wiremock::MockServer;

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let pool = mealslot::create_pool(&url, 1).await?;
    mealslot::run_migrations(&pool).await?;

    Ok(pool)
}

/// Week of Monday 2025-03-03, seeded.
pub fn weekly_session() -> PlanSession {
    PlanSession::with_seed(Horizon::weekly(date!(2025 - 03 - 03)).unwrap(), Goals::default(), 42)
}

pub fn gateway(server: &MockServer) -> anyhow::Result<HttpGateway> {
    Ok(HttpGateway::new(GatewayConfig {
        edamam_url: server.uri(),
        edamam_app_id: "app-id".to_owned(),
        edamam_app_key: "app-key".to_owned(),
        spoonacular_url: server.uri(),
        spoonacular_api_key: "spoon-key".to_owned(),
        timeout: Duration::from_millis(500),
        retries: 0,
    })?)
}
