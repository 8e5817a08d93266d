//! Deserialization shapes for GitHub's GraphQL responses. Kept separate
//! from `commit_graph_types::model` because the wire shape GitHub hands us
//! (nested `nodes` lists, `GitObjectID` scalars) is not the shape we want to
//! serve to our own callers.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use commit_graph_types::{Author, Branch, BranchTarget, CheckState, Commit, GithubUser, ParentRef, StatusCheckRollup};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GqlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GqlError {
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchesData {
    pub repository: Option<BranchesRepository>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchesRepository {
    pub refs: Option<RefConnection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefConnection {
    pub nodes: Vec<RefNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefNode {
    pub name: String,
    pub target: RefTarget,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefTarget {
    pub oid: String,
}

impl From<RefNode> for Branch {
    fn from(node: RefNode) -> Self {
        Branch {
            name: node.name,
            target: BranchTarget {
                oid: node.target.oid,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryData {
    pub repository: Option<HistoryRepository>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryRepository {
    pub object: Option<HistoryObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryObject {
    pub history: Option<HistoryConnection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryConnection {
    pub nodes: Vec<CommitNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommitNode {
    pub oid: String,
    #[serde(default)]
    pub message_headline: String,
    #[serde(default)]
    pub message_body: String,
    pub committed_date: DateTime<Utc>,
    pub additions: i64,
    pub deletions: i64,
    pub author: CommitAuthorNode,
    pub parents: ParentConnection,
    #[serde(default)]
    pub status_check_rollup: Option<StatusCheckRollupNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitAuthorNode {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user: Option<GithubUserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GithubUserNode {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParentConnection {
    pub nodes: Vec<ParentNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParentNode {
    pub oid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusCheckRollupNode {
    pub state: CheckState,
}

impl From<CommitNode> for Commit {
    fn from(node: CommitNode) -> Self {
        Commit {
            oid: node.oid,
            message_headline: node.message_headline,
            message_body: node.message_body,
            committed_date: node.committed_date,
            author: Author {
                name: node.author.name,
                email: node.author.email,
                user: node.author.user.map(|u| GithubUser {
                    login: u.login,
                    avatar_url: u.avatar_url,
                }),
            },
            parents: node
                .parents
                .nodes
                .into_iter()
                .map(|p| ParentRef::new(p.oid))
                .collect(),
            additions: node.additions,
            deletions: node.deletions,
            status_check_rollup: node.status_check_rollup.map(|s| StatusCheckRollup { state: s.state }),
            branches: Default::default(),
            color: String::new(),
            line_index: 0,
            is_head: false,
        }
    }
}
