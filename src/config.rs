use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealslot_gateway::{EDAMAM_URL, MAX_PAGE_SIZE, SPOONACULAR_URL};
use mealslot_mealplan::{CALORIE_GOAL_RANGE, DEFAULT_CALORIE_GOAL, DEFAULT_WATER_CUPS, MAX_WATER_CUPS};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    #[serde(default = "default_edamam_url")]
    pub edamam_url: String,
    #[serde(default)]
    pub edamam_app_id: String,
    #[serde(default)]
    pub edamam_app_key: String,
    #[serde(default = "default_spoonacular_url")]
    pub spoonacular_url: String,
    #[serde(default)]
    pub spoonacular_api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_retries")]
    pub retries: u8,
    /// Recipes requested per search
    #[serde(default = "default_page_size")]
    pub page_size: u8,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            edamam_url: default_edamam_url(),
            edamam_app_id: String::new(),
            edamam_app_key: String::new(),
            spoonacular_url: default_spoonacular_url(),
            spoonacular_api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            retries: default_retries(),
            page_size: default_page_size(),
        }
    }
}

impl From<&GatewayConfig> for mealslot_gateway::GatewayConfig {
    fn from(value: &GatewayConfig) -> Self {
        Self {
            edamam_url: value.edamam_url.to_owned(),
            edamam_app_id: value.edamam_app_id.to_owned(),
            edamam_app_key: value.edamam_app_key.to_owned(),
            spoonacular_url: value.spoonacular_url.to_owned(),
            spoonacular_api_key: value.spoonacular_api_key.to_owned(),
            timeout: Duration::from_secs(value.timeout_secs),
            retries: value.retries,
        }
    }
}

fn default_edamam_url() -> String {
    EDAMAM_URL.to_string()
}

fn default_spoonacular_url() -> String {
    SPOONACULAR_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_retries() -> u8 {
    1
}

fn default_page_size() -> u8 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_calorie_goal")]
    pub calorie_goal: u32,
    #[serde(default = "default_water_goal")]
    pub water_goal: u8,
    /// Offer a fruit pool to every slot during auto-fill
    #[serde(default = "default_fruit_bonus")]
    pub fruit_bonus: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            calorie_goal: default_calorie_goal(),
            water_goal: default_water_goal(),
            fruit_bonus: default_fruit_bonus(),
        }
    }
}

fn default_calorie_goal() -> u32 {
    DEFAULT_CALORIE_GOAL
}

fn default_water_goal() -> u8 {
    DEFAULT_WATER_CUPS
}

fn default_fruit_bonus() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, EDAMAM_ID, EDAMAM_KEY, SPOON_API_KEY)
    /// 2. Environment variables (MEALSLOT__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("database.url", "sqlite:mealslot.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALSLOT")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("DATABASE_URL", "database.url"),
            ("EDAMAM_ID", "gateway.edamam_app_id"),
            ("EDAMAM_KEY", "gateway.edamam_app_key"),
            ("SPOON_API_KEY", "gateway.spoonacular_api_key"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if !(1..=60).contains(&self.gateway.timeout_secs) {
            return Err("Gateway timeout_secs must be between 1 and 60".to_string());
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.gateway.page_size) {
            return Err(format!(
                "Gateway page_size must be between 1 and {MAX_PAGE_SIZE}"
            ));
        }
        if !CALORIE_GOAL_RANGE.contains(&self.planner.calorie_goal) {
            return Err(format!(
                "Planner calorie_goal must be between {} and {}",
                CALORIE_GOAL_RANGE.start(),
                CALORIE_GOAL_RANGE.end()
            ));
        }
        if self.planner.water_goal > MAX_WATER_CUPS {
            return Err(format!(
                "Planner water_goal must be at most {MAX_WATER_CUPS} cups"
            ));
        }
        Ok(())
    }
}
