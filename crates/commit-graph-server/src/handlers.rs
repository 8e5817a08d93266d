use axum::{extract::State, Json};
use commit_graph_api::{build_commit_graph, validate};
use commit_graph_types::{CommitGraphData, CommitGraphRequest};

use crate::error::ApiError;
use crate::AppState;

/// Build one commit graph end to end: validate, pick a bearer token, fan
/// out to GitHub, aggregate, and stamp lanes. `fetchMoreCommits` stays a
/// library-level operation on `commit-graph-api` — the core is stateless
/// by design, and this server has no session store to resume a
/// `TraversalState` across requests.
#[tracing::instrument(skip(state, request), fields(owner = %request.owner, repo = %request.repo))]
pub async fn commit_graph(
    State(state): State<AppState>,
    Json(request): Json<CommitGraphRequest>,
) -> Result<Json<CommitGraphData>, ApiError> {
    let validated = validate(request, state.config.github_token.as_deref())?;
    let (data, _session) = build_commit_graph(&state.config.github_graphql_endpoint, &validated).await?;
    Ok(Json(data))
}
