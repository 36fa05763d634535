//! Snipe-IT REST API Client
//!
//! Thin client over the Snipe-IT `/api/v1` endpoints used by the exporter.
//!
//! # Architecture
//!
//! - **Transport**: HTTPS (or HTTP) via a single pooled `reqwest::Client`
//! - **Authentication**: `Authorization: Bearer <api key>` on every request
//! - **Validation**: every call goes through one private `get_json` helper, which rejects
//!   non-2xx responses and in-band `{"status": "error"}` payloads before decoding
//!
//! # Example
//!
//! ```no_run
//! use snipeit_exporter::config::SnipeItConfig;
//! use snipeit_exporter::snipeit::SnipeItClient;
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = SnipeItConfig {
//!     url: "https://develop.snipeitapp.com".to_string(),
//!     api_key: SecretString::from("your-api-key"),
//!     verify_ssl: true,
//! };
//!
//! let client = SnipeItClient::new(&config, 1000)?;
//! let statuses = client.status_labels().await?;
//! # Ok(())
//! # }
//! ```

use crate::config::SnipeItConfig;
use crate::error::{ExporterError, Result};
use crate::snipeit::types::*;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Client for the Snipe-IT REST API
///
/// Cheap to share: the underlying `reqwest::Client` is connection-pooled and the
/// struct holds no per-request state.
#[derive(Debug, Clone)]
pub struct SnipeItClient {
    http: reqwest::Client,
    base_url: String,
    page_limit: u32,
}

impl SnipeItClient {
    /// Build a client for the given instance
    ///
    /// `page_limit` is sent as `limit` on every list request.
    pub fn new(config: &SnipeItConfig, page_limit: u32) -> Result<Self> {
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.api_key.expose_secret()))
                .map_err(|_| {
                    ExporterError::Config("API key contains invalid header characters".into())
                })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            page_limit,
        })
    }

    /// Query all status labels
    pub async fn status_labels(&self) -> Result<Vec<StatusLabelRow>> {
        let limit = self.page_limit.to_string();
        self.get_rows("statuslabels", &[("limit", limit.as_str())])
            .await
    }

    /// Query all categories
    pub async fn categories(&self) -> Result<Vec<CategoryRow>> {
        let limit = self.page_limit.to_string();
        self.get_rows("categories", &[("limit", limit.as_str())])
            .await
    }

    /// Query the models belonging to one category
    pub async fn models(&self, category_id: u64) -> Result<Vec<ModelRow>> {
        let limit = self.page_limit.to_string();
        let category_id = category_id.to_string();
        self.get_rows(
            "models",
            &[("limit", limit.as_str()), ("category_id", category_id.as_str())],
        )
        .await
    }

    /// Count hardware of one model in one status
    ///
    /// Requests a single record and reads only the `total` field.
    pub async fn hardware_count(&self, model_id: u64, status_id: u64) -> Result<u64> {
        let status_id = status_id.to_string();
        let model_id = model_id.to_string();
        let page: Rows<serde_json::Value> = self
            .get_json(
                "hardware",
                &[
                    ("limit", "1"),
                    ("offset", "0"),
                    ("status_id", status_id.as_str()),
                    ("model_id", model_id.as_str()),
                ],
            )
            .await?;
        Ok(page.total)
    }

    /// Query all consumables
    pub async fn consumables(&self) -> Result<Vec<ConsumableRow>> {
        let limit = self.page_limit.to_string();
        self.get_rows("consumables", &[("limit", limit.as_str())])
            .await
    }

    /// Query all components
    pub async fn components(&self) -> Result<Vec<ComponentRow>> {
        let limit = self.page_limit.to_string();
        self.get_rows("components", &[("limit", limit.as_str())])
            .await
    }

    /// Query all users
    pub async fn users(&self) -> Result<Vec<UserRow>> {
        let limit = self.page_limit.to_string();
        self.get_rows("users", &[("limit", limit.as_str())]).await
    }

    /// Query the assets currently checked out to a user
    pub async fn user_assets(&self, user_id: u64) -> Result<Vec<AssetRow>> {
        let limit = self.page_limit.to_string();
        self.get_rows(
            &format!("users/{}/assets", user_id),
            &[("limit", limit.as_str())],
        )
        .await
    }

    async fn get_rows<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let page: Rows<T> = self.get_json(path, query).await?;
        Ok(page.rows)
    }

    /// Issue a GET against `/api/v1/{path}` and decode the body
    ///
    /// This is the single place where responses are validated:
    /// 1. Transport failures surface as [`ExporterError::Http`]
    /// 2. 401/403 become [`ExporterError::Auth`], other non-2xx [`ExporterError::SnipeItApi`]
    /// 3. A body that is not the expected JSON becomes [`ExporterError::Json`]
    /// 4. A `{"status": "error"}` body becomes [`ExporterError::ApiMessage`]
    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<Rows<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/api/v1/{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExporterError::from_status(path, status));
        }

        let body = response.bytes().await?;
        let page: Rows<T> = serde_json::from_slice(&body)?;
        if let Some(message) = page.error_message() {
            return Err(ExporterError::ApiMessage {
                endpoint: path.to_string(),
                message,
            });
        }
        Ok(page)
    }
}
