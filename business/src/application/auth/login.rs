use std::sync::Arc;

use async_trait::async_trait;

use super::hashing::verify_password;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthSession;
use crate::domain::auth::services::{PasswordHasher, TokenIssuer};
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<AuthSession, AuthError> {
        self.logger
            .info(&format!("Login attempt for: {}", params.username));

        let user = self.repository.find_by_username(&params.username).await?;
        let verified = match &user {
            Some(user) => {
                verify_password(
                    self.hasher.clone(),
                    params.password,
                    user.password_hash.clone(),
                )
                .await
            }
            None => false,
        };
        let Some(user) = user.filter(|_| verified) else {
            self.logger
                .warn(&format!("Login failed for: {}", params.username));
            return Err(AuthError::InvalidCredentials);
        };

        let token = self.token_issuer.issue(&user)?;

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(AuthSession {
            token,
            user: user.public_view(),
        })
    }
}
