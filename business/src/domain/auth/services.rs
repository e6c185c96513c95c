use crate::domain::user::model::User;

use super::errors::AuthError;

/// One-way salted password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;
    /// Returns `false` for a mismatch and for a hash it cannot parse.
    fn verify(&self, password: &str, password_hash: &str) -> bool;
}

/// Issues signed bearer tokens for authenticated users.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<String, AuthError>;
}
