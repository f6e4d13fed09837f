use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::{ConfigError, StoreConfig, SUPABASE_SERVICE_ROLE_KEY, SUPABASE_URL};
use crate::domain::catalog::{NewProduct, Product, ReturnedProduct, Trolley};
use crate::domain::errors::StoreError;
use crate::domain::ports::{CatalogStore, StoreFactory};

use super::models::{
    NewProductRow, OrderBy, PostgrestErrorBody, PRODUCTS, RETURNED_PRODUCTS, TROLLEYS,
};

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StoreError::Decode(e.to_string())
        } else {
            StoreError::Transport(e.to_string())
        }
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

/// Handle to the Supabase REST endpoint (`{SUPABASE_URL}/rest/v1`).
///
/// The underlying HTTP client has no cookie store: every request carries the
/// service role key and nothing is remembered between calls.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    rest_url: Url,
}

impl SupabaseClient {
    /// Build the handle. No request is sent here.
    pub fn new(config: &StoreConfig) -> Result<Self, ConfigError> {
        let mut base = Url::parse(&config.url).map_err(|e| ConfigError::Invalid {
            key: SUPABASE_URL,
            details: e.to_string(),
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let rest_url = base
            .join("rest/v1/")
            .map_err(|e| ConfigError::Invalid {
                key: SUPABASE_URL,
                details: e.to_string(),
            })?;

        let invalid_key = |details: String| ConfigError::Invalid {
            key: SUPABASE_SERVICE_ROLE_KEY,
            details,
        };
        let mut apikey = HeaderValue::from_str(&config.service_role_key)
            .map_err(|e| invalid_key(e.to_string()))?;
        apikey.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.service_role_key))
            .map_err(|e| invalid_key(e.to_string()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { http, rest_url })
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        self.rest_url
            .join(table)
            .map_err(|e| StoreError::Transport(e.to_string()))
    }

    /// `select=*` over a whole table in the given order.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        order: OrderBy,
    ) -> Result<Vec<T>, StoreError> {
        log::debug!("select {} order={}", table, order.to_query());
        let response = self
            .http
            .get(self.table_url(table)?)
            .query(&[("select", "*".to_string()), ("order", order.to_query())])
            .send()
            .await?;
        decode(response).await
    }

    /// Insert one row and read the stored row back as a single object.
    async fn insert_single<B, T>(&self, table: &str, row: &B) -> Result<T, StoreError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("insert into {}", table);
        let response = self
            .http
            .post(self.table_url(table)?)
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(&[row])
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<PostgrestErrorBody>(&body) {
        Ok(err) => {
            log::warn!(
                "store responded {}: code={:?} details={:?} hint={:?}",
                status,
                err.code,
                err.details,
                err.hint
            );
            err.message
        }
        Err(_) => None,
    };
    let message = message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    Err(StoreError::Api {
        status: status.as_u16(),
        message,
    })
}

impl CatalogStore for SupabaseClient {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.select(PRODUCTS, OrderBy::asc("id")).await
    }

    async fn list_returned_products(&self) -> Result<Vec<ReturnedProduct>, StoreError> {
        self.select(RETURNED_PRODUCTS, OrderBy::asc("id")).await
    }

    async fn list_trolleys(&self) -> Result<Vec<Trolley>, StoreError> {
        self.select(TROLLEYS, OrderBy::desc("updated_at")).await
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<Product, StoreError> {
        self.insert_single(PRODUCTS, &NewProductRow::from(product))
            .await
    }
}

// ── Factory ──────────────────────────────────────────────────────────────────

/// Build a store handle from `SUPABASE_URL` / `SUPABASE_SERVICE_ROLE_KEY`.
///
/// Call this at the point of use; nothing is created at startup.
pub fn get_supabase_server() -> Result<SupabaseClient, ConfigError> {
    SupabaseClient::new(&StoreConfig::from_env()?)
}

/// [`StoreFactory`] over [`SupabaseClient`]. Reads the environment on every
/// `connect` unless built with fixed settings.
#[derive(Debug, Clone, Default)]
pub struct SupabaseFactory {
    fixed: Option<StoreConfig>,
}

impl SupabaseFactory {
    pub fn from_env() -> Self {
        Self { fixed: None }
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            fixed: Some(config),
        }
    }
}

impl StoreFactory for SupabaseFactory {
    type Store = SupabaseClient;

    fn connect(&self) -> Result<SupabaseClient, ConfigError> {
        match &self.fixed {
            Some(config) => SupabaseClient::new(config),
            None => get_supabase_server(),
        }
    }
}
