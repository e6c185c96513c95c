//! Helpers for driving the APIs through the full poem stack in tests.

use std::sync::Arc;

use chrono::{Duration, Utc};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::{OpenApi, OpenApiService};

use business::domain::auth::services::TokenIssuer;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use security::jwt::{JwtSettings, JwtTokenService};

use crate::api::error::render_framework_error;

pub fn token_service() -> Arc<JwtTokenService> {
    Arc::new(JwtTokenService::new(JwtSettings {
        secret: "an-example-secret-that-is-32-bytes-long!".to_string(),
        issuer: "ecommerce-api".to_string(),
        audience: "ecommerce-client".to_string(),
        lifetime: Duration::hours(1),
    }))
}

pub fn customer(id: UserId) -> User {
    User::from_repository(
        id,
        "ada".to_string(),
        "ada@example.com".to_string(),
        "$argon2id$hash".to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
        Utc::now(),
        Utc::now(),
    )
}

/// `Authorization` header value for `user`, signed by `service`.
pub fn bearer(service: &JwtTokenService, user: &User) -> String {
    let token = service
        .issue(user)
        .expect("test token should be issued");
    format!("Bearer {}", token)
}

/// Mounts `api` the way the server does: token verifier as request data, framework
/// errors rendered in the shared envelope.
pub fn app<T: OpenApi + 'static>(api: T, verifier: Arc<JwtTokenService>) -> impl Endpoint {
    Route::new()
        .nest("/", OpenApiService::new(api, "test", "0.0.0"))
        .data(verifier)
        .catch_all_error(render_framework_error)
}
