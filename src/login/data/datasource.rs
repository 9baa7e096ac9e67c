use async_trait::async_trait;

use crate::api::{endpoints, ApiClient, ApiError};
use crate::login::data::dto::LoginRequest;
use crate::login::data::model::LoginResponse;
use crate::session::AuthSession;

/// Performs the login feature's one remote operation.
#[async_trait]
pub trait LoginDatasource: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// Data source backed by the console API.
pub struct HttpLoginDatasource {
    client: ApiClient,
    session: AuthSession,
}

impl HttpLoginDatasource {
    pub fn new(client: ApiClient, session: AuthSession) -> Self {
        Self { client, session }
    }
}

#[async_trait]
impl LoginDatasource for HttpLoginDatasource {
    /// Transport failures propagate unchanged; error policy lives in the
    /// view model.
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.client.post_json(endpoints::LOGIN, &request).await?;
        // Record the issued token so authenticated endpoints can be called.
        self.session.store_token(&response.access_token);
        Ok(response)
    }
}
