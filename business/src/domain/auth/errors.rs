use crate::domain::user::errors::UserError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    InvalidProfile(#[from] UserError),
    #[error("auth.invalid_password")]
    InvalidPassword,
    #[error("auth.username_taken")]
    UsernameTaken,
    #[error("auth.email_taken")]
    EmailTaken,
    /// Unknown username and wrong password are reported identically.
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.hashing_failed")]
    HashingFailed,
    #[error("auth.token_issue_failed")]
    TokenIssueFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
