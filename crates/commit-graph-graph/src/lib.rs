mod aggregate;
mod state;

pub use aggregate::{fetch_commit_graph, fetch_more_commits, AggregationOptions};
pub use state::TraversalState;
