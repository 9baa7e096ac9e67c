use std::sync::Arc;

use async_trait::async_trait;

use crate::api::ApiError;
use crate::login::domain::entity::LoginSession;
use crate::login::domain::repository::LoginRepository;

/// The business capability the view model depends on.
///
/// This indirection keeps orchestration code free of any concrete
/// repository or transport choice; tests substitute the trait directly.
#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str) -> Result<LoginSession, ApiError>;
}

/// Signs a user in through the repository contract.
pub struct LoginUserUseCase {
    repository: Arc<dyn LoginRepository>,
}

impl LoginUserUseCase {
    pub fn new(repository: Arc<dyn LoginRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LoginUseCase for LoginUserUseCase {
    async fn execute(&self, email: &str, password: &str) -> Result<LoginSession, ApiError> {
        self.repository.login_user(email, password).await
    }
}
