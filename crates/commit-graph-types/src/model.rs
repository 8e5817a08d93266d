//! Wire-level and in-memory domain types shared by every crate in the
//! workspace. Field names use `camelCase` on the wire to match the JSON
//! shape the front-end component expects.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parent edge, keyed by the 40-character hex OID of the parent commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub oid: String,
}

impl ParentRef {
    pub fn new(oid: impl Into<String>) -> Self {
        Self { oid: oid.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<GithubUser>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckState {
    Success,
    Failure,
    Pending,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheckRollup {
    pub state: CheckState,
}

/// One commit, as returned by GitHub and, later, stamped with the
/// rendering-time attributes computed by the lane assigner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub oid: String,
    #[serde(rename = "messageHeadline")]
    pub message_headline: String,
    #[serde(rename = "messageBody")]
    pub message_body: String,
    #[serde(rename = "committedDate")]
    pub committed_date: DateTime<Utc>,
    pub author: Author,
    pub parents: Vec<ParentRef>,
    pub additions: i64,
    pub deletions: i64,
    #[serde(rename = "statusCheckRollup", skip_serializing_if = "Option::is_none")]
    pub status_check_rollup: Option<StatusCheckRollup>,

    /// Every branch name known to reach this commit, via descendant edges.
    /// A `BTreeSet` keeps serialization order deterministic (property 8,
    /// idempotence under re-run).
    #[serde(default)]
    pub branches: BTreeSet<String>,
    /// `palette[lineIndex % 9]`. Empty until the lane assigner runs.
    #[serde(default)]
    pub color: String,
    #[serde(rename = "lineIndex", default)]
    pub line_index: u32,
    #[serde(rename = "isHead", default)]
    pub is_head: bool,
}

impl Commit {
    pub fn parent_oids(&self) -> impl Iterator<Item = &str> {
        self.parents.iter().map(|p| p.oid.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchTarget {
    pub oid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub target: BranchTarget,
}

impl Branch {
    pub fn tip(&self) -> &str {
        &self.target.oid
    }
}

/// A `(name, oid)` pair materialized from branches for label placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadRef {
    pub name: String,
    pub oid: String,
}

/// The wire-level response: an ordered commit list, the branches that were
/// queried, their heads, and pagination hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitGraphData {
    pub commits: Vec<Commit>,
    pub branches: Vec<Branch>,
    pub heads: Vec<HeadRef>,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl CommitGraphData {
    /// Derive the `heads` list from `branches`, keyed by name rather than
    /// OID so that two refs pointing at the same commit still appear as
    /// two head entries.
    pub fn heads_from_branches(branches: &[Branch]) -> Vec<HeadRef> {
        branches
            .iter()
            .map(|b| HeadRef {
                name: b.name.clone(),
                oid: b.target.oid.clone(),
            })
            .collect()
    }
}

/// Inbound request shape. `token` carries the surrounding session's
/// per-user bearer token — OAuth/session plumbing itself lives outside this
/// crate, so the request struct is where that token crosses into the core
/// rather than cookie or header plumbing this crate doesn't own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitGraphRequest {
    pub owner: String,
    pub repo: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub token: Option<String>,
}
