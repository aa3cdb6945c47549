// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(
        "expected an instance of type '{expected}' for attribute '{attribute}', got '{actual}' instead"
    )]
    InvalidType {
        attribute: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("attribute '{attribute}' has not been set")]
    UnsetAttribute { attribute: &'static str },
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn unset(attribute: &'static str) -> Self {
        Self::UnsetAttribute { attribute }
    }
}
