use poem_openapi::Object;

use business::domain::auth::model::AuthSession;
use business::domain::user::model::PublicUser;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// 3 to 50 characters, unique
    pub username: String,
    /// Valid email address, unique
    pub email: String,
    /// 6 to 100 characters
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of an account; never carries the password hash.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<PublicUser> for UserResponse {
    fn from(user: PublicUser) -> Self {
        Self {
            user_id: user.id.to_string(),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token for the protected endpoints
    pub token: String,
    pub user: UserResponse,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: session.user.into(),
        }
    }
}
