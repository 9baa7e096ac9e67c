use std::sync::Arc;

use async_trait::async_trait;

use crate::api::ApiError;
use crate::login::data::datasource::LoginDatasource;
use crate::login::data::mapper::to_login_request;
use crate::login::domain::{LoginRepository, LoginSession};

/// Repository over the HTTP data source.
///
/// A thin translation boundary: map inputs to the wire shape, invoke the
/// data source, convert the result to the entity. Adds no error semantics.
pub struct HttpLoginRepository {
    datasource: Arc<dyn LoginDatasource>,
}

impl HttpLoginRepository {
    pub fn new(datasource: Arc<dyn LoginDatasource>) -> Self {
        Self { datasource }
    }
}

#[async_trait]
impl LoginRepository for HttpLoginRepository {
    async fn login_user(&self, email: &str, password: &str) -> Result<LoginSession, ApiError> {
        let request = to_login_request(email, password);
        let response = self.datasource.login(request).await?;
        Ok(response.into_entity())
    }
}
