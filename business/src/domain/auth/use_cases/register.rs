use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthSession;

pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Result<AuthSession, AuthError>;
}
