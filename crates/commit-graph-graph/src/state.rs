use std::collections::{HashMap, HashSet, VecDeque};

use commit_graph_types::Commit;

/// The mutable record of one traversal: visited commits, the edges still
/// unexplored, and which branch reaches which commit so far. Lifetime is
/// one request, or one logical session across load-more calls. No
/// algorithmic decisions live here — just a typed bag.
#[derive(Debug, Default)]
pub struct TraversalState {
    visited: HashSet<String>,
    commits: HashMap<String, Commit>,
    branch_commits: HashMap<String, HashSet<String>>,
    /// Insertion-ordered so draining it is deterministic: any drain order
    /// is acceptable as long as repeat drains against the same state
    /// produce the same order.
    frontier_order: VecDeque<String>,
    frontier_set: HashSet<String>,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self, oid: &str) -> bool {
        self.visited.contains(oid)
    }

    pub fn get(&self, oid: &str) -> Option<&Commit> {
        self.commits.get(oid)
    }

    pub fn commits(&self) -> impl Iterator<Item = &Commit> {
        self.commits.values()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Insert a freshly-fetched commit and remove it from the frontier, if
    /// it was there. Idempotent: re-marking an already visited commit is a
    /// no-op that keeps the first copy (dates/parents do not change).
    pub fn mark_visited(&mut self, commit: Commit) {
        let oid = commit.oid.clone();
        if self.visited.insert(oid.clone()) {
            self.commits.insert(oid.clone(), commit);
        }
        self.remove_frontier(&oid);
    }

    /// Queue `oid` as a parent awaiting fetch, unless it is already visited
    /// or already queued.
    pub fn add_frontier(&mut self, oid: impl Into<String>) {
        let oid = oid.into();
        if self.visited.contains(&oid) {
            return;
        }
        if self.frontier_set.insert(oid.clone()) {
            self.frontier_order.push_back(oid);
        }
    }

    pub fn remove_frontier(&mut self, oid: &str) {
        if self.frontier_set.remove(oid) {
            self.frontier_order.retain(|o| o != oid);
        }
    }

    pub fn frontier_is_empty(&self) -> bool {
        self.frontier_set.is_empty()
    }

    pub fn frontier_iter(&self) -> impl Iterator<Item = &str> {
        self.frontier_order.iter().map(|s| s.as_str())
    }

    /// Remove up to `n` OIDs from the front of the frontier, in insertion
    /// order, and return them.
    pub fn drain_frontier(&mut self, n: usize) -> Vec<String> {
        let mut drained = Vec::with_capacity(n.min(self.frontier_order.len()));
        for _ in 0..n {
            match self.frontier_order.pop_front() {
                Some(oid) => {
                    self.frontier_set.remove(&oid);
                    drained.push(oid);
                }
                None => break,
            }
        }
        drained
    }

    /// Record that `branch` reaches `oid`, both in the per-branch index and
    /// on the commit's own `branches` set.
    pub fn associate(&mut self, branch: &str, oid: &str) {
        self.branch_commits
            .entry(branch.to_string())
            .or_default()
            .insert(oid.to_string());
        if let Some(commit) = self.commits.get_mut(oid) {
            commit.branches.insert(branch.to_string());
        }
    }

    pub fn branch_commits(&self, branch: &str) -> impl Iterator<Item = &str> {
        self.branch_commits
            .get(branch)
            .into_iter()
            .flat_map(|set| set.iter().map(|s| s.as_str()))
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
