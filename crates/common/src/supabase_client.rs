use reqwest::header::CONTENT_RANGE;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{LeaderboardError, LeaderboardResult};

/// Thin PostgREST client for the project's `rest/v1` endpoint.
#[derive(Clone)]
pub struct SupabaseRestClient {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: Option<String>,
}

impl SupabaseRestClient {
    pub fn new(base_url: &str, api_key: &str, access_token: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token: access_token.map(str::to_string),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", bearer))
    }

    /// `GET /<table>?select=<columns>&<filters>`
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        filters: &[(&str, String)],
    ) -> LeaderboardResult<Vec<T>> {
        let url = self.table_url(table);
        debug!("Selecting {} from {}", columns, url);

        let response = self
            .authorize(self.client.get(&url))
            .query(&[("select", columns)])
            .query(filters)
            .send()
            .await?;

        let response = ensure_success(response, &url).await?;
        let rows = response.json::<Vec<T>>().await?;
        Ok(rows)
    }

    /// Exact row count for `<table>?<filters>` without transferring rows.
    pub async fn count(&self, table: &str, filters: &[(&str, String)]) -> LeaderboardResult<u64> {
        let url = self.table_url(table);

        let response = self
            .authorize(self.client.head(&url))
            .header("Prefer", "count=exact")
            .query(filters)
            .send()
            .await?;

        let response = ensure_success(response, &url).await?;
        let header = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                LeaderboardError::Parse(format!("Missing Content-Range header from {}", url))
            })?;

        parse_content_range_total(header)
    }

    pub async fn insert<T: Serialize + ?Sized>(&self, table: &str, row: &T) -> LeaderboardResult<()> {
        let url = self.table_url(table);
        info!("Inserting row into {}", url);

        let response = self
            .authorize(self.client.post(&url))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        ensure_success(response, &url).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response, url: &str) -> LeaderboardResult<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    Err(LeaderboardError::Api(format!(
        "{} responded {}: {}",
        url, status, error_text
    )))
}

/// Extracts the total from a PostgREST `Content-Range` value such as `0-9/42` or `*/42`.
pub fn parse_content_range_total(header: &str) -> LeaderboardResult<u64> {
    header
        .rsplit_once('/')
        .and_then(|(_, total)| total.trim().parse::<u64>().ok())
        .ok_or_else(|| LeaderboardError::Parse(format!("Unexpected Content-Range '{}'", header)))
}
