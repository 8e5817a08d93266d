use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use commit_graph_types::{Branch, Commit, GraphError, GraphResult};

use crate::dto::{BranchesData, Envelope, HistoryData};
use crate::queries;

const USER_AGENT_VALUE: &str = "commit-graph-service";

/// Wraps GitHub's GraphQL endpoint with the two typed operations this
/// service needs. No side effects beyond the outbound HTTPS request.
pub struct GitHubClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GitHubClient {
    pub fn new(endpoint: impl Into<String>, token: &str) -> GraphResult<Self> {
        use reqwest::header::{HeaderMap, HeaderValue};

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| GraphError::BadRequest(format!("malformed token: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GraphError::Transport(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: impl Serialize,
    ) -> GraphResult<T> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| GraphError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(GraphError::Unauthorized(
                "GitHub rejected the bearer token".into(),
            ));
        }
        if status == StatusCode::FORBIDDEN {
            return Err(GraphError::Forbidden(
                "token lacks scope for this repository".into(),
            ));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            let reset_hint = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string());
            return Err(GraphError::RateLimited(
                reset_hint.unwrap_or_else(|| "rate limit exhausted".into()),
            ));
        }
        if status == StatusCode::NOT_FOUND {
            return Err(GraphError::NotFound("repository not found".into()));
        }
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::Transport(format!(
                "GitHub GraphQL response status {status}: {body}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GraphError::Transport(e.to_string()))?;
        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| GraphError::Transport(format!("unexpected response shape: {e}")))?;

        if let Some(first) = envelope.errors.first() {
            return Err(map_gql_error(first));
        }

        envelope
            .data
            .ok_or_else(|| GraphError::Transport("response carried no data".into()))
    }

    /// Enumerate at least the default branch and the top-level named
    /// branches. Pagination of the branch list itself is out of scope:
    /// only the first page is returned.
    #[instrument(skip(self), err)]
    pub async fn list_branches(&self, owner: &str, repo: &str) -> GraphResult<Vec<Branch>> {
        validate_non_empty(owner, "owner")?;
        validate_non_empty(repo, "repo")?;

        let data: BranchesData = self
            .graphql(
                queries::LIST_BRANCHES,
                serde_json::json!({ "owner": owner, "name": repo, "first": 100 }),
            )
            .await?;

        let repository = data
            .repository
            .ok_or_else(|| GraphError::NotFound(format!("{owner}/{repo} does not exist")))?;
        Ok(repository
            .refs
            .map(|c| c.nodes.into_iter().map(Branch::from).collect())
            .unwrap_or_default())
    }

    /// Newest-first commit history starting at `start_oid`, up to `limit`
    /// entries.
    #[instrument(skip(self), err)]
    pub async fn get_commit_history(
        &self,
        owner: &str,
        repo: &str,
        start_oid: &str,
        limit: u32,
    ) -> GraphResult<Vec<Commit>> {
        validate_non_empty(owner, "owner")?;
        validate_non_empty(repo, "repo")?;
        validate_non_empty(start_oid, "startOid")?;
        if limit == 0 {
            return Err(GraphError::BadRequest("limit must be positive".into()));
        }

        let data: HistoryData = self
            .graphql(
                queries::COMMIT_HISTORY,
                serde_json::json!({
                    "owner": owner,
                    "name": repo,
                    "oid": start_oid,
                    "first": limit,
                }),
            )
            .await?;

        let repository = data
            .repository
            .ok_or_else(|| GraphError::NotFound(format!("{owner}/{repo} does not exist")))?;
        let object = repository
            .object
            .ok_or_else(|| GraphError::NotFound(format!("commit {start_oid} does not exist")))?;
        Ok(object
            .history
            .map(|h| h.nodes.into_iter().map(Commit::from).collect())
            .unwrap_or_default())
    }
}

fn validate_non_empty(value: &str, field: &str) -> GraphResult<()> {
    if value.trim().is_empty() {
        return Err(GraphError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

fn map_gql_error(error: &crate::dto::GqlError) -> GraphError {
    match error.error_type.as_deref() {
        Some("NOT_FOUND") => GraphError::NotFound(error.message.clone()),
        Some("FORBIDDEN") => GraphError::Forbidden(error.message.clone()),
        Some("RATE_LIMITED") => GraphError::RateLimited(error.message.clone()),
        Some("UNAUTHORIZED") => GraphError::Unauthorized(error.message.clone()),
        _ => GraphError::Transport(error.message.clone()),
    }
}
