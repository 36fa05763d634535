use crate::error::ExporterError;
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub snipeit: SnipeItConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SnipeItConfig {
    /// Base URL of the Snipe-IT instance, e.g. `https://develop.snipeitapp.com`
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsConfig {
    #[serde(default = "default_asset_statuses")]
    pub asset_statuses: Vec<String>,
    #[serde(default = "default_asset_categories")]
    pub asset_categories: Vec<String>,
    #[serde(default)]
    pub report_consumables: bool,
    #[serde(default)]
    pub report_components: bool,
    #[serde(default)]
    pub report_user_assets: bool,
    /// `limit` sent with every list request; there is no pagination beyond it
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    /// Maximum in-flight hardware count requests (1 = strictly sequential)
    #[serde(default = "default_hardware_concurrency")]
    pub hardware_concurrency: usize,
}

fn default_api_key() -> SecretString {
    SecretString::new(String::new().into())
}

fn default_verify_ssl() -> bool {
    true
}

fn default_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9877
}

fn default_asset_statuses() -> Vec<String> {
    vec!["Ready to Deploy".to_string(), "Pending".to_string()]
}

fn default_asset_categories() -> Vec<String> {
    vec!["Laptops".to_string(), "Desktops".to_string()]
}

fn default_page_limit() -> u32 {
    1000
}

fn default_hardware_concurrency() -> usize {
    1
}

impl Default for SnipeItConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: default_api_key(),
            verify_ssl: default_verify_ssl(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            port: default_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            asset_statuses: default_asset_statuses(),
            asset_categories: default_asset_categories(),
            report_consumables: false,
            report_components: false,
            report_user_assets: false,
            page_limit: default_page_limit(),
            hardware_concurrency: default_hardware_concurrency(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("SNIPEIT_EXPORTER")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("metrics.asset_statuses")
                    .with_list_parse_key("metrics.asset_categories"),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Check the settings that have no usable default
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.snipeit.url.trim().is_empty() {
            return Err(ExporterError::Config(
                "Snipe-IT url is required (--target or SNIPEIT_URL)".to_string(),
            ));
        }
        if self.snipeit.api_key.expose_secret().trim().is_empty() {
            return Err(ExporterError::Config(
                "Snipe-IT API key is required (--apikey or SNIPEIT_API_KEY)".to_string(),
            ));
        }
        if self.metrics.page_limit == 0 {
            return Err(ExporterError::Config(
                "metrics.page_limit must be greater than 0".to_string(),
            ));
        }
        if self.metrics.hardware_concurrency == 0 {
            return Err(ExporterError::Config(
                "metrics.hardware_concurrency must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
