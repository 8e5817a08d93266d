use commit_graph_types::{CommitGraphRequest, GraphError, GraphResult};

/// Server-side default and ceiling for `limit`.
pub const DEFAULT_LIMIT: u32 = 35;
pub const MAX_LIMIT: u32 = 100;

/// A request that has passed validation: non-empty `owner`/`repo`, `limit`
/// clamped into `[1, MAX_LIMIT]`, and a token resolved before any upstream
/// call is made, so malformed requests are rejected before they can incur
/// a network round trip.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub owner: String,
    pub repo: String,
    pub branch: Option<String>,
    pub limit: u32,
    pub token: String,
}

/// Resolve a token: an explicit per-request token wins, otherwise fall back
/// to the server's own credential. Neither present is a configuration error
/// the caller must handle before calling [`validate`].
pub fn resolve_token(request_token: Option<&str>, server_token: Option<&str>) -> Option<String> {
    request_token
        .filter(|t| !t.is_empty())
        .or(server_token)
        .map(str::to_string)
}

pub fn validate(request: CommitGraphRequest, server_token: Option<&str>) -> GraphResult<ValidatedRequest> {
    if request.owner.trim().is_empty() {
        return Err(GraphError::BadRequest("owner must not be empty".to_string()));
    }
    if request.repo.trim().is_empty() {
        return Err(GraphError::BadRequest("repo must not be empty".to_string()));
    }
    let token = resolve_token(request.token.as_deref(), server_token)
        .ok_or_else(|| GraphError::Unauthorized("no GitHub token configured".to_string()))?;

    let limit = match request.limit {
        Some(0) => return Err(GraphError::BadRequest("limit must be at least 1".to_string())),
        Some(limit) if limit > MAX_LIMIT => {
            return Err(GraphError::BadRequest(format!("limit must be at most {MAX_LIMIT}")))
        }
        Some(limit) => limit,
        None => DEFAULT_LIMIT,
    };

    Ok(ValidatedRequest {
        owner: request.owner,
        repo: request.repo,
        branch: request.branch.filter(|b| !b.is_empty()),
        limit,
        token,
    })
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
