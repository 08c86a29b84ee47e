// src/infrastructure/repositories/mod.rs
mod error;
mod memory_user;
mod postgres_user;
pub mod slice;

pub use error::map_sqlx;
pub use memory_user::InMemoryUserRepository;
pub use postgres_user::PostgresUserRepository;
