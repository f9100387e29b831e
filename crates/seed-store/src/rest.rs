//! PostgREST (Supabase) table store over HTTP.
//!
//! Tables are exposed at `{base}/rest/v1/{table}`. Every request carries
//! the API key both as the `apikey` header and as a bearer token.
//!
//! - count: `HEAD` with `Prefer: count=exact`, total read from `Content-Range`
//! - select: `GET` with `column=eq.value` query parameters
//! - insert: `POST` of a JSON array with `Prefer: return=representation`

use crate::error::StoreError;
use crate::store::{Filter, Row, TableStore};
use async_trait::async_trait;
use reqwest::header::CONTENT_RANGE;
use reqwest::{Client, RequestBuilder, Response};
use seed_core::Table;
use std::time::Duration;

const REST_PATH: &str = "rest/v1";

/// Table store backed by a PostgREST endpoint.
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    /// Create a store for the project at `base_url` (e.g. `https://xyz.supabase.co`).
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        tracing::debug!("Using PostgREST endpoint {base_url}/{REST_PATH}");

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// URL of a table resource.
    pub fn table_url(&self, table: Table) -> String {
        format!("{}/{REST_PATH}/{}", self.base_url, table.as_str())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Row count request for `table`.
    pub fn count_request(&self, table: Table) -> RequestBuilder {
        let request = self
            .client
            .head(self.table_url(table))
            .query(&[("select", "id")])
            .header("Prefer", "count=exact");
        self.authorize(request)
    }

    /// Select request for the rows of `table` matching `filter`.
    pub fn select_request(&self, table: Table, filter: &Filter) -> RequestBuilder {
        let request = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*")])
            .query(&filter_query(filter));
        self.authorize(request)
    }

    /// Insert request echoing the stored rows back.
    pub fn insert_request(&self, table: Table, rows: &[Row]) -> RequestBuilder {
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(rows);
        self.authorize(request)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status { status, body });
        }

        Ok(response)
    }

    async fn decode_rows(response: Response) -> Result<Vec<Row>, StoreError> {
        response
            .json::<Vec<Row>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

/// Strip trailing slashes and require an http(s) scheme.
fn normalize_base_url(url: &str) -> Result<String, StoreError> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://"))
        || trimmed.len() <= "https://".len()
    {
        return Err(StoreError::InvalidUrl(url.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Parse the total out of a `Content-Range` value such as `0-24/3573` or `*/0`.
pub fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.parse().ok()
}

/// Query parameters for an equality filter.
pub fn filter_query(filter: &Filter) -> Vec<(String, String)> {
    filter
        .conditions()
        .iter()
        .map(|(column, value)| (column.clone(), format!("eq.{value}")))
        .collect()
}

#[async_trait]
impl TableStore for RestStore {
    async fn count(&self, table: Table) -> Result<u64, StoreError> {
        let response = self.send(self.count_request(table)).await?;

        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or_else(|| StoreError::MissingCount(table.to_string()))
    }

    async fn select(&self, table: Table, filter: &Filter) -> Result<Vec<Row>, StoreError> {
        let response = self.send(self.select_request(table, filter)).await?;
        Self::decode_rows(response).await
    }

    async fn insert(&self, table: Table, rows: Vec<Row>) -> Result<Vec<Row>, StoreError> {
        let response = self.send(self.insert_request(table, &rows)).await?;
        Self::decode_rows(response).await
    }
}
