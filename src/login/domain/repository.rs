use async_trait::async_trait;

use crate::api::ApiError;
use crate::login::domain::entity::LoginSession;

/// Domain-facing contract for signing a user in.
///
/// Implementations translate between transport shapes and the entity and
/// nothing more; rejections propagate unchanged.
#[async_trait]
pub trait LoginRepository: Send + Sync {
    async fn login_user(&self, email: &str, password: &str) -> Result<LoginSession, ApiError>;
}
