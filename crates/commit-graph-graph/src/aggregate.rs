use std::collections::HashSet;

use commit_graph_client::GitHubClient;
use commit_graph_types::{Branch, Commit, CommitGraphData, GraphError, GraphResult};

use crate::state::TraversalState;

/// Tunables for one aggregation run.
#[derive(Debug, Clone, Copy)]
pub struct AggregationOptions {
    pub initial_commits_per_branch: u32,
    pub max_commits_to_display: u32,
    /// How many frontier OIDs `fetch_more_commits` drains per call.
    pub commits_per_fetch: u32,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            initial_commits_per_branch: 10,
            max_commits_to_display: 35,
            commits_per_fetch: 10,
        }
    }
}

/// Fan out `getCommitHistory` to every branch whose tip isn't visited yet,
/// merge the results into `state`, then walk branch-membership propagation
/// and shape the response.
pub async fn fetch_commit_graph(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    branches: &[Branch],
    options: &AggregationOptions,
    mut state: TraversalState,
) -> GraphResult<(CommitGraphData, TraversalState)> {
    let to_fetch: Vec<&Branch> = branches
        .iter()
        .filter(|b| !state.is_visited(b.tip()))
        .collect();

    let fetches = to_fetch.iter().map(|branch| {
        let tip = branch.tip().to_string();
        let name = branch.name.clone();
        async move {
            let result = client
                .get_commit_history(owner, repo, &tip, options.initial_commits_per_branch)
                .await;
            (name, result)
        }
    });
    let results = futures_util::future::join_all(fetches).await;

    for (branch_name, result) in results {
        match result {
            Ok(commits) => merge_branch_commits(&mut state, &branch_name, commits),
            Err(GraphError::RateLimited(detail)) => {
                return Err(GraphError::RateLimited(detail));
            }
            Err(err) => {
                tracing::warn!(
                    branch = %branch_name,
                    error = %err,
                    "branch fetch failed; branch will contribute no commits"
                );
            }
        }
    }

    propagate_branch_associations(&mut state, branches);
    let data = build_response(&state, branches, options.max_commits_to_display);
    Ok((data, state))
}

/// Drain part of the frontier, fetch one commit per drained OID, and
/// re-propagate branch membership.
///
/// Re-runs full propagation on every call rather than a restricted rule
/// that only re-checks commits adjacent to a newly fetched parent: the
/// graphs this service handles are small enough that a full walk costs
/// nothing next to the network round trip it follows, and it avoids an
/// eventual-consistency gap a restricted rule would otherwise leave open.
pub async fn fetch_more_commits(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    state: &mut TraversalState,
    options: &AggregationOptions,
    branches: &[Branch],
) -> GraphResult<CommitGraphData> {
    let drained = state.drain_frontier(options.commits_per_fetch as usize);

    let fetches = drained.iter().map(|oid| {
        let oid = oid.clone();
        async move {
            let result = client.get_commit_history(owner, repo, &oid, 1).await;
            (oid, result)
        }
    });
    let results = futures_util::future::join_all(fetches).await;

    for (oid, result) in results {
        match result {
            Ok(mut commits) => {
                if let Some(commit) = commits.pop() {
                    insert_and_queue_parents(state, commit);
                }
            }
            Err(err) => {
                // Put the OID back so a retry on the same state can pick it
                // up again, then surface the failure — unlike the initial
                // per-branch fetch, a single load-more OID has no "skip and
                // keep going" fallback to fall into.
                state.add_frontier(oid);
                return Err(err);
            }
        }
    }

    propagate_branch_associations(state, branches);
    Ok(build_response(state, branches, options.max_commits_to_display))
}

fn merge_branch_commits(state: &mut TraversalState, branch_name: &str, commits: Vec<Commit>) {
    for commit in commits {
        let oid = commit.oid.clone();
        if !state.is_visited(&oid) {
            insert_and_queue_parents(state, commit);
        }
        state.associate(branch_name, &oid);
    }
}

fn insert_and_queue_parents(state: &mut TraversalState, commit: Commit) {
    let parents: Vec<String> = commit.parent_oids().map(str::to_string).collect();
    state.mark_visited(commit);
    for parent in parents {
        state.add_frontier(parent);
    }
}

/// Walk descendant-to-parent edges from every branch tip, using only edges
/// into visited nodes, tagging every reached commit with that branch's name.
/// Branch membership is reachability: a commit belongs to a branch iff it is
/// an ancestor of that branch's tip within the visited set.
fn propagate_branch_associations(state: &mut TraversalState, branches: &[Branch]) {
    for branch in branches {
        let tip = branch.tip();
        if !state.is_visited(tip) {
            continue;
        }
        let mut stack = vec![tip.to_string()];
        let mut seen = HashSet::new();
        while let Some(oid) = stack.pop() {
            if !seen.insert(oid.clone()) {
                continue;
            }
            state.associate(&branch.name, &oid);
            if let Some(commit) = state.get(&oid) {
                for parent in commit.parent_oids() {
                    if state.is_visited(parent) {
                        stack.push(parent.to_string());
                    }
                }
            }
        }
    }
}

fn build_response(state: &TraversalState, branches: &[Branch], max_commits: u32) -> CommitGraphData {
    let mut sorted: Vec<Commit> = state.commits().cloned().collect();
    sorted.sort_by(|a, b| b.committed_date.cmp(&a.committed_date).then_with(|| a.oid.cmp(&b.oid)));

    let total_visited = sorted.len();
    sorted.truncate(max_commits as usize);

    let has_more = total_visited > max_commits as usize || !state.frontier_is_empty();
    let cursor = state.frontier_iter().next().map(str::to_string);

    CommitGraphData {
        commits: sorted,
        branches: branches.to_vec(),
        heads: CommitGraphData::heads_from_branches(branches),
        has_more,
        cursor,
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
