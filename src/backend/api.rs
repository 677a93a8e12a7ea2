//! HTTP client for the smart search backend

use reqwest::{Client, Response};

use super::error::BackendError;
use super::types::{
    CreateFormRequest, CreateFormResponse, RateRequest, SearchRequest, SearchResponse,
    SearchResult,
};

/// Client for the procurement portal's search API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Interpret a free-text query and return candidate results
    pub async fn smart_search(&self, query: &str) -> Result<Vec<SearchResult>, BackendError> {
        let response = self
            .client
            .post(self.endpoint("/api/smart-search"))
            .json(&SearchRequest { query })
            .send()
            .await?;

        let body: SearchResponse = ensure_success(response)?.json().await?;
        Ok(body.results)
    }

    /// Ask the backend for a pre-filled quotation session form
    pub async fn create_form(
        &self,
        request: CreateFormRequest,
    ) -> Result<CreateFormResponse, BackendError> {
        let response = self
            .client
            .post(self.endpoint("/api/create-form"))
            .json(&request)
            .send()
            .await?;

        Ok(ensure_success(response)?.json().await?)
    }

    /// Fetch the full result listing for a query.
    ///
    /// The shape is backend-defined; callers only log it.
    pub async fn search_results(&self, query: &str) -> Result<serde_json::Value, BackendError> {
        let response = self
            .client
            .get(self.endpoint("/api/search-results"))
            .query(&[("query", query)])
            .send()
            .await?;

        Ok(ensure_success(response)?.json().await?)
    }

    /// Record a 1-5 star rating for a result. The response body is ignored.
    pub async fn rate_result(&self, request: RateRequest) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.endpoint("/api/rate-result"))
            .json(&request)
            .send()
            .await?;

        ensure_success(response)?;
        Ok(())
    }
}

fn ensure_success(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::Status(status.as_u16()))
    }
}
