use std::sync::Arc;

use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

use security::jwt::{AuthenticatedUser, JwtTokenService};

/// JWT bearer authentication; yields the caller's identity from the `sub` claim.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub AuthenticatedUser);

async fn bearer_checker(req: &Request, bearer: Bearer) -> Option<AuthenticatedUser> {
    let Some(verifier) = req.data::<Arc<JwtTokenService>>() else {
        tracing::error!("Token verifier is not attached to the application");
        return None;
    };

    match verifier.verify(&bearer.token) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::debug!("Bearer token rejected: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::auth::services::TokenIssuer;
    use business::domain::shared::value_objects::UserId;
    use business::domain::user::model::User;
    use chrono::{Duration, Utc};
    use security::jwt::JwtSettings;

    fn service() -> Arc<JwtTokenService> {
        Arc::new(JwtTokenService::new(JwtSettings {
            secret: "an-example-secret-that-is-32-bytes-long!".to_string(),
            issuer: "ecommerce-api".to_string(),
            audience: "ecommerce-client".to_string(),
            lifetime: Duration::hours(24),
        }))
    }

    fn user() -> User {
        User::from_repository(
            UserId::generate(),
            "ada".to_string(),
            "ada@example.com".to_string(),
            "$argon2id$hash".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_yield_user_when_token_valid() {
        let service = service();
        let user = user();
        let token = service.issue(&user).unwrap();
        let mut req = Request::builder().finish();
        req.set_data(service);

        let identity = bearer_checker(&req, Bearer { token }).await;

        assert_eq!(identity.map(|u| u.user_id), Some(user.id));
    }

    #[tokio::test]
    async fn should_reject_when_token_invalid() {
        let mut req = Request::builder().finish();
        req.set_data(service());

        let identity = bearer_checker(
            &req,
            Bearer {
                token: "not.a.jwt".to_string(),
            },
        )
        .await;

        assert!(identity.is_none());
    }

    #[tokio::test]
    async fn should_reject_when_verifier_missing() {
        let token = service().issue(&user()).unwrap();
        let req = Request::builder().finish();

        assert!(bearer_checker(&req, Bearer { token }).await.is_none());
    }
}
