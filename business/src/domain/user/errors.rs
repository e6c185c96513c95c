#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("user.invalid_username")]
    InvalidUsername,
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.invalid_first_name")]
    InvalidFirstName,
    #[error("user.invalid_last_name")]
    InvalidLastName,
}
