use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::TokenClaims;
use business::domain::auth::services::TokenIssuer;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token.expired")]
    Expired,
    #[error("token.invalid")]
    Invalid,
}

/// Identity recovered from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub lifetime: Duration,
}

/// Issues and verifies HS256 tokens bound to one issuer and audience.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    lifetime: Duration,
}

impl JwtTokenService {
    pub fn new(settings: JwtSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&settings.issuer]);
        validation.set_audience(&[&settings.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
            issuer: settings.issuer,
            audience: settings.audience,
            lifetime: settings.lifetime,
        }
    }

    fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = TokenClaims {
            sub: user.id.to_string(),
            unique_name: user.username.clone(),
            email: user.email.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.lifetime).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Token signing failed: {}", e);
            AuthError::TokenIssueFailed
        })
    }

    /// Checks signature, issuer, audience and expiry.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            },
        )?;

        let user_id = data
            .claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| TokenError::Invalid)?;

        Ok(AuthenticatedUser {
            user_id: UserId::new(user_id),
            username: data.claims.unique_name,
        })
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, user: &User) -> Result<String, AuthError> {
        self.issue_at(user, Utc::now())
    }
}
