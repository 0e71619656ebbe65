use thiserror::Error;

use crate::modules::cats::core::cat::Cat;
use crate::shared::infrastructure::cat_store::CatStoreError;

#[derive(Debug, Error)]
pub enum CatError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("could not find cat with id {id}")]
    NotFound { id: i64 },

    #[error("output failed validation: {0}")]
    InvalidOutput(String),

    #[error(transparent)]
    Store(#[from] CatStoreError),
}

/// Machine-readable failure class shared by every transport binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    BadRequest,
    InternalServerError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status(self) -> u16 {
        match self {
            ErrorCode::BadRequest => 400,
            ErrorCode::InternalServerError => 500,
        }
    }

    pub fn jsonrpc_code(self) -> i32 {
        match self {
            ErrorCode::BadRequest => -32600,
            ErrorCode::InternalServerError => -32603,
        }
    }
}

impl CatError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatError::InvalidInput(_) | CatError::NotFound { .. } => ErrorCode::BadRequest,
            CatError::InvalidOutput(_) | CatError::Store(_) => ErrorCode::InternalServerError,
        }
    }
}

/// Checks a cat against the entity schema before it leaves a handler.
/// Applies the same name bound as input validation, so a stored cat that
/// skipped it surfaces as an internal error.
pub fn ensure_valid_output(cat: &Cat) -> Result<(), CatError> {
    cat.validate().map_err(|e| {
        tracing::error!(
            cat_id = cat.id,
            error = %e,
            "cat violates the output schema"
        );
        CatError::InvalidOutput(e.to_string())
    })
}
