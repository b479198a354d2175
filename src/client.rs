use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::intake::PortfolioSink;
use crate::listing::{PortfolioFilter, PropertyFilter};
use crate::models::portfolio::{self, CreatePortfolio};
use crate::models::properties::{self, CreateProperty, UpdateProperty};

/// Where the builder and lister front ends find the API by default.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Rejected(String),

    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },
}

impl ClientError {
    /// Transport failures and 5xx answers are worth a manual retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Server { .. })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// Typed client for the portfolio and property endpoints.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ── Portfolios ──

    pub async fn list_portfolios(
        &self,
        filter: &PortfolioFilter,
    ) -> Result<Vec<portfolio::Model>, ClientError> {
        let response = self
            .http
            .get(self.url("/portfolios"))
            .query(filter)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn get_portfolio(&self, id: Uuid) -> Result<portfolio::Model, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/portfolios/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch the rendered public page of a portfolio.
    pub async fn portfolio_page(&self, id: Uuid) -> Result<String, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/portfolios/{id}/page")))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.text().await?);
        }
        Err(error_from(status, response).await)
    }

    pub async fn create_portfolio(
        &self,
        draft: &CreatePortfolio,
    ) -> Result<portfolio::Model, ClientError> {
        debug!("Creating portfolio for {:?}", draft.hero.name);
        let response = self
            .http
            .post(self.url("/portfolios"))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    // ── Properties ──

    pub async fn list_properties(
        &self,
        filter: &PropertyFilter,
    ) -> Result<Vec<properties::Model>, ClientError> {
        let response = self
            .http
            .get(self.url("/properties"))
            .query(filter)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn get_property(&self, id: Uuid) -> Result<properties::Model, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/properties/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_property(
        &self,
        input: &CreateProperty,
    ) -> Result<properties::Model, ClientError> {
        let response = self
            .http
            .post(self.url("/properties"))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_property(
        &self,
        id: Uuid,
        input: &UpdateProperty,
    ) -> Result<properties::Model, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/properties/{id}")))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    /// Returns the server's confirmation message.
    pub async fn delete_property(&self, id: Uuid) -> Result<String, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/properties/{id}")))
            .send()
            .await?;
        decode::<MessageBody>(response).await.map(|b| b.message)
    }
}

impl PortfolioSink for ApiClient {
    fn create_portfolio(
        &self,
        draft: &CreatePortfolio,
    ) -> impl Future<Output = Result<portfolio::Model, ClientError>> + Send {
        ApiClient::create_portfolio(self, draft)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    Err(error_from(status, response).await)
}

async fn error_from(status: StatusCode, response: reqwest::Response) -> ClientError {
    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| status.to_string());

    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        s if s.is_client_error() => ClientError::Rejected(message),
        s => ClientError::Server {
            status: s.as_u16(),
            message,
        },
    }
}
