// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("Invalid cursor")]
    InvalidCursor,
    #[error("not implemented: {0}")]
    NotImplemented(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
