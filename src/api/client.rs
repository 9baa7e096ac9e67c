//! JSON client for the console API.

use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::api::endpoints::Endpoint;
use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::session::AuthSession;

/// HTTP client bound to one API base URL.
///
/// Attaches a fresh `x-request-id` to every request and, for endpoints
/// that require it, the bearer token from the shared session. Cloning is
/// cheap; clones share the connection pool and session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: AuthSession,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: AuthSession) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .expect("Failed to build API client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// POST `body` as JSON to `endpoint` and decode a JSON response.
    pub async fn post_json<Req, Resp>(&self, endpoint: Endpoint, body: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let builder = self.http.post(self.url(endpoint)).json(body);
        self.execute(endpoint, builder).await
    }

    /// GET `endpoint` and decode a JSON response.
    pub async fn get_json<Resp>(&self, endpoint: Endpoint) -> Result<Resp, ApiError>
    where
        Resp: DeserializeOwned,
    {
        let builder = self.http.get(self.url(endpoint));
        self.execute(endpoint, builder).await
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path)
    }

    async fn execute<Resp>(&self, endpoint: Endpoint, builder: RequestBuilder) -> Result<Resp, ApiError>
    where
        Resp: DeserializeOwned,
    {
        let request_id = Uuid::new_v4().to_string();
        let mut builder = builder.header("x-request-id", &request_id);

        if endpoint.requires_auth {
            let token = self.session.bearer().ok_or(ApiError::NotAuthenticated)?;
            builder = builder.bearer_auth(token);
        }

        tracing::debug!(%request_id, path = endpoint.path, "sending API request");

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::Connection { source: e }
            }
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(%request_id, status = status.as_u16(), path = endpoint.path, "API request rejected");
            return Err(ApiError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(%request_id, status = status.as_u16(), path = endpoint.path, "API request failed");
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(%request_id, status = status.as_u16(), "API response received");
        response
            .json::<Resp>()
            .await
            .map_err(|e| ApiError::Decode { source: e })
    }
}
