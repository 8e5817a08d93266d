//! The error taxonomy every crate in the workspace shares, so callers branch
//! on a kind instead of matching strings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("transport error: {0}")]
    Transport(String),
}

impl GraphError {
    /// Stable, lowercase-kebab name used on the wire and in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GraphError::BadRequest(_) => "BadRequest",
            GraphError::NotFound(_) => "NotFound",
            GraphError::Unauthorized(_) => "Unauthorized",
            GraphError::Forbidden(_) => "Forbidden",
            GraphError::RateLimited(_) => "RateLimited",
            GraphError::Transport(_) => "Transport",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            GraphError::BadRequest(d)
            | GraphError::NotFound(d)
            | GraphError::Unauthorized(d)
            | GraphError::Forbidden(d)
            | GraphError::RateLimited(d)
            | GraphError::Transport(d) => d,
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
