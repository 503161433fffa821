//! gloo-net-backed HTTP adapter (browser)

use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use super::join_url;
use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct HttpApiAdapter {
    base_url: String,
}

impl HttpApiAdapter {
    /// The browser owns request timeouts; `_timeout_ms` is accepted for a
    /// uniform constructor.
    pub fn new(base_url: &str, _timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn send(request: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::check(response, path).await
    }

    async fn send_json(request: RequestBuilder, body: &Value, path: &str) -> Result<Response, ApiError> {
        let response = request
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::check(response, path).await
    }

    async fn check(response: Response, path: &str) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            path.to_string()
        } else {
            body
        };
        Err(ApiError::from_status(status, message))
    }

    async fn json(response: Response) -> Result<Value, ApiError> {
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = Self::send(Request::get(&self.url(path)), path).await?;
        Self::json(response).await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        match Self::send(Request::get(&self.url(path)), path).await {
            Ok(response) => Self::json(response).await.map(Some),
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = Self::send_json(Request::post(&self.url(path)), body, path).await?;
        Self::json(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        Self::send(Request::post(&self.url(path)), path).await?;
        Ok(())
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = Self::send_json(Request::put(&self.url(path)), body, path).await?;
        Self::json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        Self::send(Request::delete(&self.url(path)), path).await?;
        Ok(())
    }
}
