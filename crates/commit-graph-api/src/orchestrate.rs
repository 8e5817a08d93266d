use commit_graph_client::GitHubClient;
use commit_graph_graph::{fetch_commit_graph, fetch_more_commits, AggregationOptions, TraversalState};
use commit_graph_types::{Branch, CommitGraphData, GraphError, GraphResult};

use crate::request::ValidatedRequest;

/// One request's worth of graph state, handed back to the caller so a
/// follow-up "load more" call can resume it.
pub struct GraphSession {
    client: GitHubClient,
    owner: String,
    repo: String,
    branches: Vec<Branch>,
    options: AggregationOptions,
    state: TraversalState,
}

impl GraphSession {
    pub fn frontier_cursor(&self) -> Option<&str> {
        self.state.frontier_iter().next()
    }
}

fn options_for(limit: u32) -> AggregationOptions {
    AggregationOptions {
        max_commits_to_display: limit,
        ..AggregationOptions::default()
    }
}

/// List branches, narrow to the requested one if present, fetch the initial
/// commit graph, and stamp lanes before returning.
#[tracing::instrument(skip(request, endpoint), fields(owner = %request.owner, repo = %request.repo), err)]
pub async fn build_commit_graph(endpoint: &str, request: &ValidatedRequest) -> GraphResult<(CommitGraphData, GraphSession)> {
    let client = GitHubClient::new(endpoint, &request.token)?;
    let all_branches = client.list_branches(&request.owner, &request.repo).await?;

    let branches: Vec<Branch> = match &request.branch {
        Some(name) => {
            let matched: Vec<Branch> = all_branches.into_iter().filter(|b| &b.name == name).collect();
            if matched.is_empty() {
                return Err(GraphError::NotFound(format!("branch '{name}' not found")));
            }
            matched
        }
        None => all_branches,
    };

    let options = options_for(request.limit);
    let (mut data, state) = fetch_commit_graph(
        &client,
        &request.owner,
        &request.repo,
        &branches,
        &options,
        TraversalState::new(),
    )
    .await?;

    let occupancy = commit_graph_lanes::assign_lanes(&mut data.commits, &data.heads);
    tracing::debug!(rows = occupancy.len(), "lanes assigned");

    let session = GraphSession {
        client,
        owner: request.owner.clone(),
        repo: request.repo.clone(),
        branches,
        options,
        state,
    };
    Ok((data, session))
}

/// Drain more of the frontier from an existing [`GraphSession`] and
/// re-stamp lanes over the grown commit set.
#[tracing::instrument(skip(session), fields(owner = %session.owner, repo = %session.repo), err)]
pub async fn load_more(session: &mut GraphSession) -> GraphResult<CommitGraphData> {
    let mut data = fetch_more_commits(
        &session.client,
        &session.owner,
        &session.repo,
        &mut session.state,
        &session.options,
        &session.branches,
    )
    .await?;

    commit_graph_lanes::assign_lanes(&mut data.commits, &data.heads);
    Ok(data)
}

#[cfg(test)]
#[path = "orchestrate_test.rs"]
mod orchestrate_test;
