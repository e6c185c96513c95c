use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 50;
pub const NAME_MAX_LENGTH: usize = 50;

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// The part of a user record that is safe to hand to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        validate_profile(
            &props.username,
            &props.email,
            &props.first_name,
            &props.last_name,
        )?;

        let now = Utc::now();
        Ok(Self {
            id: UserId::generate(),
            username: props.username,
            email: props.email,
            password_hash: props.password_hash,
            first_name: props.first_name,
            last_name: props.last_name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: UserId,
        username: String,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            first_name,
            last_name,
            created_at,
            updated_at,
        }
    }

    pub fn public_view(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Checks the profile fields of a registration before any password work is done.
pub fn validate_profile(
    username: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
) -> Result<(), UserError> {
    let username_length = username.trim().chars().count();
    if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&username_length) {
        return Err(UserError::InvalidUsername);
    }
    if !EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
    {
        return Err(UserError::InvalidEmail);
    }
    if !is_valid_name(first_name) {
        return Err(UserError::InvalidFirstName);
    }
    if !is_valid_name(last_name) {
        return Err(UserError::InvalidLastName);
    }
    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().count() <= NAME_MAX_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(username: &str, email: &str) -> NewUserProps {
        NewUserProps {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$hash".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[test]
    fn should_create_user_when_profile_is_valid() {
        let user = User::new(props("ada", "ada@example.com")).unwrap();

        assert_eq!(user.username, "ada");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn should_reject_username_when_too_short() {
        let result = User::new(props("ad", "ada@example.com"));
        assert!(matches!(result, Err(UserError::InvalidUsername)));
    }

    #[test]
    fn should_reject_username_when_too_long() {
        let result = User::new(props(&"a".repeat(51), "ada@example.com"));
        assert!(matches!(result, Err(UserError::InvalidUsername)));
    }

    #[test]
    fn should_reject_email_when_malformed() {
        for email in ["ada", "ada@", "ada@example", "a da@example.com"] {
            let result = User::new(props("ada", email));
            assert!(matches!(result, Err(UserError::InvalidEmail)), "{email}");
        }
    }

    #[test]
    fn should_reject_blank_first_name() {
        let mut p = props("ada", "ada@example.com");
        p.first_name = "  ".to_string();
        assert!(matches!(User::new(p), Err(UserError::InvalidFirstName)));
    }

    #[test]
    fn should_not_expose_password_hash_in_public_view() {
        let user = User::new(props("ada", "ada@example.com")).unwrap();
        let view = user.public_view();

        assert_eq!(view.id, user.id);
        assert_eq!(view.email, "ada@example.com");
        assert!(!format!("{view:?}").contains("argon2"));
    }
}
