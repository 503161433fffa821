//! reqwest-backed HTTP adapter (desktop)

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use super::join_url;
use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct HttpApiAdapter {
    client: Client,
    base_url: String,
}

impl HttpApiAdapter {
    pub fn new(base_url: &str, timeout_ms: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, path, "HTTP request failed");
        let message = if body.is_empty() {
            path.to_string()
        } else {
            body
        };
        Err(ApiError::from_status(status.as_u16(), message))
    }

    async fn json(response: Response) -> Result<Value, ApiError> {
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self.send(self.client.get(self.url(path)), path).await?;
        Self::json(response).await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(ApiError::from_status(status, path));
        }
        Self::json(response).await.map(Some)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .send(self.client.post(self.url(path)).json(body), path)
            .await?;
        Self::json(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.client.post(self.url(path)), path).await?;
        Ok(())
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .send(self.client.put(self.url(path)).json(body), path)
            .await?;
        Self::json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(path)), path).await?;
        Ok(())
    }
}
