use thiserror::Error;

use crate::{
    dto::orders::NewOrderPayload,
    models::{Order, Product},
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

/// HTTP client a dashboard view uses against the service's own API; the
/// stand-in for the page fetches of the browser rendition.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session_token: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_token: session_token.into(),
        }
    }

    pub async fn fetch_orders(&self) -> Result<Vec<Order>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/orders", self.base_url))
            .bearer_auth(&self.session_token)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/products", self.base_url))
            .bearer_auth(&self.session_token)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn create_order(&self, payload: &NewOrderPayload) -> Result<Order, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/orders", self.base_url))
            .bearer_auth(&self.session_token)
            .json(payload)
            .send()
            .await?;
        read_json(response).await
    }
}

/// Non-success responses surface their text body; success responses parse as
/// JSON.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        return Err(ClientError::Api { status, body });
    }
    Ok(response.json::<T>().await?)
}
