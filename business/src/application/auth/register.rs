use std::sync::Arc;

use async_trait::async_trait;

use super::hashing::hash_password;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{AuthSession, is_acceptable_password};
use crate::domain::auth::services::{PasswordHasher, TokenIssuer};
use crate::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::model::{NewUserProps, User, validate_profile};
use crate::domain::user::repository::UserRepository;

pub struct RegisterUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<AuthSession, AuthError> {
        self.logger
            .info(&format!("Registering user: {}", params.username));

        validate_profile(
            &params.username,
            &params.email,
            &params.first_name,
            &params.last_name,
        )?;
        if !is_acceptable_password(&params.password) {
            return Err(AuthError::InvalidPassword);
        }

        if let Some(existing) = self
            .repository
            .find_by_username_or_email(&params.username, &params.email)
            .await?
        {
            self.logger.warn(&format!(
                "Registration rejected, account already exists for: {}",
                params.username
            ));
            return Err(if existing.username == params.username {
                AuthError::UsernameTaken
            } else {
                AuthError::EmailTaken
            });
        }

        let password_hash = hash_password(self.hasher.clone(), params.password).await?;
        let user = User::new(NewUserProps {
            username: params.username,
            email: params.email,
            password_hash,
            first_name: params.first_name,
            last_name: params.last_name,
        })?;

        // A concurrent registration can still win the race on the unique index.
        self.repository.save(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => AuthError::UsernameTaken,
            other => AuthError::Repository(other),
        })?;

        let token = self.token_issuer.issue(&user)?;

        self.logger
            .info(&format!("User registered with id: {}", user.id));
        Ok(AuthSession {
            token,
            user: user.public_view(),
        })
    }
}
