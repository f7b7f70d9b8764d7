//! Service layer orchestrating repositories for the route handlers.
//!
//! Services are plain functions generic over the repository traits so they
//! can be exercised against [`crate::repository::mock::MockRepository`]
//! without a database.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;
pub mod cards;
pub mod decks;
pub mod main;
pub mod readings;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("upload error: {0}")]
    Upload(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
