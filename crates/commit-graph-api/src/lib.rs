mod orchestrate;
mod request;

pub use orchestrate::{build_commit_graph, load_more, GraphSession};
pub use request::{resolve_token, validate, ValidatedRequest, DEFAULT_LIMIT, MAX_LIMIT};
