use mealslot_shared::{Error, Result};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::json;
use std::time::Duration;

use crate::types::SearchResponse;
use crate::{NutritionFacts, NutritionGateway, RecipeQuery, RecipeSummary};

pub const EDAMAM: &str = "edamam";
pub const SPOONACULAR: &str = "spoonacular";

pub const EDAMAM_URL: &str = "https://api.edamam.com";
pub const SPOONACULAR_URL: &str = "https://api.spoonacular.com";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub edamam_url: String,
    pub edamam_app_id: String,
    pub edamam_app_key: String,
    pub spoonacular_url: String,
    pub spoonacular_api_key: String,
    pub timeout: Duration,
    /// Extra attempts after a transport failure or a 5xx response.
    pub retries: u8,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            edamam_url: EDAMAM_URL.to_owned(),
            edamam_app_id: String::new(),
            edamam_app_key: String::new(),
            spoonacular_url: SPOONACULAR_URL.to_owned(),
            spoonacular_api_key: String::new(),
            timeout: Duration::from_secs(10),
            retries: 1,
        }
    }
}

/// Edamam and Spoonacular over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: GatewayConfig,
    http: reqwest::Client,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unknown(e.into()))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn send(
        &self,
        provider: &'static str,
        request: impl Fn() -> RequestBuilder,
    ) -> Result<Response> {
        let attempts = u16::from(self.config.retries) + 1;
        let mut attempt = 1;

        loop {
            let retry = attempt < attempts;

            match request().send().await {
                Ok(resp) if resp.status().is_server_error() && retry => {
                    tracing::warn!(provider, status = %resp.status(), attempt, "retrying request");
                }
                Ok(resp) if resp.status().is_success() => return Ok(resp),
                Ok(resp) => return Err(status_error(provider, resp).await),
                Err(e) if retry => {
                    tracing::warn!(provider, error = %e, attempt, "retrying request");
                }
                Err(e) => {
                    tracing::warn!(provider, error = %e, "request failed");
                    return Err(Error::upstream(provider, e.to_string()));
                }
            }

            attempt += 1;
        }
    }
}

async fn status_error(provider: &'static str, resp: Response) -> Error {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(provider, %status, "upstream rejected request");

    let message = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            format!("HTTP {status}: check the API credentials")
        }
        _ if body.is_empty() => format!("HTTP {status}"),
        _ => format!("HTTP {status}: {body}"),
    };

    Error::upstream(provider, message)
}

fn require(provider: &'static str, values: &[&str]) -> Result<()> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(Error::upstream(provider, "API credentials are not configured"));
    }

    Ok(())
}

#[async_trait::async_trait]
impl NutritionGateway for HttpGateway {
    async fn fetch_nutrition(&self, ingredients: &str) -> Result<NutritionFacts> {
        let ingr = ingredients
            .split(',')
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .collect::<Vec<_>>();

        if ingr.is_empty() {
            mealslot_shared::bail!("no ingredients given");
        }

        require(EDAMAM, &[&self.config.edamam_app_id, &self.config.edamam_app_key])?;

        let url = format!(
            "{}/api/nutrition-details",
            self.config.edamam_url.trim_end_matches('/')
        );
        let body = json!({ "ingr": ingr });

        tracing::debug!(provider = EDAMAM, ingredients = ingr.len(), "fetching nutrition");

        let resp = self
            .send(EDAMAM, || {
                self.http
                    .post(&url)
                    .query(&[
                        ("app_id", self.config.edamam_app_id.as_str()),
                        ("app_key", self.config.edamam_app_key.as_str()),
                    ])
                    .json(&body)
            })
            .await?;

        resp.json::<NutritionFacts>()
            .await
            .map_err(|e| Error::upstream(EDAMAM, format!("invalid response: {e}")))
    }

    async fn search_recipes(&self, query: &RecipeQuery) -> Result<Vec<RecipeSummary>> {
        require(SPOONACULAR, &[&self.config.spoonacular_api_key])?;

        let url = format!(
            "{}/recipes/complexSearch",
            self.config.spoonacular_url.trim_end_matches('/')
        );

        let mut params = vec![
            ("apiKey", self.config.spoonacular_api_key.to_owned()),
            ("query", query.query.to_owned()),
            ("number", query.page_size().to_string()),
            ("addRecipeNutrition", "true".to_owned()),
        ];

        if let Some(cuisine) = query.cuisine.filter() {
            params.push(("cuisine", cuisine.to_owned()));
        }

        if let Some(diet) = query.diet_filter() {
            params.push(("diet", diet));
        }

        tracing::debug!(provider = SPOONACULAR, query = %query.query, "searching recipes");

        let resp = self
            .send(SPOONACULAR, || self.http.get(&url).query(&params))
            .await?;

        let found = resp
            .json::<SearchResponse>()
            .await
            .map_err(|e| Error::upstream(SPOONACULAR, format!("invalid response: {e}")))?;

        Ok(found.results.into_iter().map(RecipeSummary::from).collect())
    }
}
