pub mod jwt;
pub mod password_hasher;
