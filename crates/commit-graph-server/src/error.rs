use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use commit_graph_types::GraphError;
use serde::Serialize;

/// Wraps [`GraphError`] so this crate can implement [`IntoResponse`] for it
/// without commit-graph-types taking on an axum dependency it has no other
/// use for.
pub struct ApiError(pub GraphError);

impl From<GraphError> for ApiError {
    fn from(err: GraphError) -> Self {
        Self(err)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    detail: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            GraphError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GraphError::NotFound(_) => StatusCode::NOT_FOUND,
            GraphError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GraphError::Forbidden(_) => StatusCode::FORBIDDEN,
            GraphError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            GraphError::Transport(_) => StatusCode::BAD_GATEWAY,
        };
        let body = ErrorBody {
            error: self.0.kind(),
            detail: self.0.detail(),
        };
        (status, Json(body)).into_response()
    }
}
