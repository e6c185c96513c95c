use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a registered user.
/// Baskets and orders reference their owner through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generates a fresh random identifier for a new account.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("pagination.invalid_page")]
    InvalidPage,
    #[error("pagination.invalid_limit")]
    InvalidLimit,
}

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    /// `page` must be at least 1 and `limit` within `1..=MAX_LIMIT`.
    pub fn new(page: u32, limit: u32) -> Result<Self, PaginationError> {
        if page < 1 {
            return Err(PaginationError::InvalidPage);
        }
        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(PaginationError::InvalidLimit);
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of records to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_user_id_from_uuid_string() {
        let id = Uuid::new_v4();
        let user_id: UserId = id.to_string().parse().unwrap();
        assert_eq!(user_id.as_uuid(), id);
    }

    #[test]
    fn should_reject_user_id_when_not_a_uuid() {
        assert!("not-a-uuid".parse::<UserId>().is_err());
    }

    #[test]
    fn should_display_user_id_as_hyphenated_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(UserId::new(id).to_string(), id.to_string());
    }

    #[test]
    fn should_compute_offset_from_page_and_limit() {
        let request = PageRequest::new(2, 10).unwrap();
        assert_eq!(request.offset(), 10);
        assert_eq!(PageRequest::new(1, 25).unwrap().offset(), 0);
    }

    #[test]
    fn should_reject_page_when_zero() {
        assert_eq!(PageRequest::new(0, 10), Err(PaginationError::InvalidPage));
    }

    #[test]
    fn should_reject_limit_when_out_of_bounds() {
        assert_eq!(PageRequest::new(1, 0), Err(PaginationError::InvalidLimit));
        assert_eq!(PageRequest::new(1, 101), Err(PaginationError::InvalidLimit));
        assert!(PageRequest::new(1, 100).is_ok());
    }

    #[test]
    fn should_default_to_first_page_of_ten() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 10);
    }
}
