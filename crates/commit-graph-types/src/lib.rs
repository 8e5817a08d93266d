mod error;
mod model;

pub use error::{GraphError, GraphResult};
pub use model::{
    Author, Branch, BranchTarget, CheckState, Commit, CommitGraphData, CommitGraphRequest,
    GithubUser, HeadRef, ParentRef, StatusCheckRollup,
};
