//! Mocks of every port, shared by the use-case tests.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::{PasswordHasher, TokenIssuer};
use crate::domain::basket::model::Basket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::checkout::services::{PaymentError, PaymentGateway, PaymentRequest};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::product::model::{Product, ProductProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ProductFilter;
use crate::domain::shared::value_objects::{PageRequest, UserId};
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
        async fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<User>, RepositoryError>;
        async fn save(&self, user: &User) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn count(&self) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub BasketRepo {}

    #[async_trait]
    impl BasketRepository for BasketRepo {
        async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Basket>, RepositoryError>;
        async fn save(&self, basket: &Basket) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
        async fn find_by_user_id(&self, user_id: &UserId, page: &PageRequest) -> Result<Vec<Order>, RepositoryError>;
        async fn count_by_user_id(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
        async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Hasher {}

    impl PasswordHasher for Hasher {
        fn hash(&self, password: &str) -> Result<String, AuthError>;
        fn verify(&self, password: &str, password_hash: &str) -> bool;
    }
}

mock! {
    pub Issuer {}

    impl TokenIssuer for Issuer {
        fn issue(&self, user: &User) -> Result<String, AuthError>;
    }
}

mock! {
    pub Payments {}

    #[async_trait]
    impl PaymentGateway for Payments {
        async fn charge(&self, request: &PaymentRequest) -> Result<(), PaymentError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn price(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

pub fn make_product(id: Uuid, name: &str, unit_price: &str, stock: u32) -> Product {
    let now = Utc::now();
    Product::from_repository(
        id,
        ProductProps {
            name: name.to_string(),
            description: format!("{name} description"),
            price: price(unit_price),
            image_url: None,
            stock,
            category: "T-Shirts".to_string(),
            size: "M".to_string(),
            color: "White".to_string(),
            material: "Cotton".to_string(),
            gender: "Unisex".to_string(),
            brand: "BasicWear".to_string(),
        },
        now,
        now,
    )
}

pub fn test_user_id() -> UserId {
    UserId::new(Uuid::from_u128(0x5eed))
}
