use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::PasswordHasher;

/// Hashes on the blocking pool; password hashing is CPU-bound and would stall the async worker.
pub(crate) async fn hash_password(
    hasher: Arc<dyn PasswordHasher>,
    password: String,
) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|_| AuthError::HashingFailed)?
}

/// Verifies on the blocking pool. A panicked verification counts as a mismatch.
pub(crate) async fn verify_password(
    hasher: Arc<dyn PasswordHasher>,
    password: String,
    password_hash: String,
) -> bool {
    tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
        .await
        .unwrap_or(false)
}
