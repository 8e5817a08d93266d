use commit_graph_types::CommitGraphRequest;

use super::*;

fn req(owner: &str, repo: &str, limit: Option<u32>, token: Option<&str>) -> CommitGraphRequest {
    CommitGraphRequest {
        owner: owner.to_string(),
        repo: repo.to_string(),
        branch: None,
        limit,
        token: token.map(str::to_string),
    }
}

#[test]
fn empty_owner_is_rejected_before_token_is_needed() {
    let err = validate(req("", "repo", None, None), None).unwrap_err();
    assert!(matches!(err, GraphError::BadRequest(_)));
}

#[test]
fn missing_token_anywhere_is_unauthorized() {
    let err = validate(req("o", "r", None, None), None).unwrap_err();
    assert!(matches!(err, GraphError::Unauthorized(_)));
}

#[test]
fn default_limit_is_used_when_absent() {
    let validated = validate(req("o", "r", None, None), Some("t")).unwrap();
    assert_eq!(validated.limit, DEFAULT_LIMIT);
}

#[test]
fn zero_limit_is_bad_request() {
    let err = validate(req("o", "r", Some(0), None), Some("t")).unwrap_err();
    assert!(matches!(err, GraphError::BadRequest(_)));
}

#[test]
fn limit_above_ceiling_is_bad_request() {
    let err = validate(req("o", "r", Some(MAX_LIMIT + 1), None), Some("t")).unwrap_err();
    assert!(matches!(err, GraphError::BadRequest(_)));
}

#[test]
fn request_token_wins_over_server_token() {
    let validated = validate(req("o", "r", None, Some("request")), Some("server")).unwrap();
    assert_eq!(validated.token, "request");
}

#[test]
fn server_token_is_used_when_request_has_none() {
    let validated = validate(req("o", "r", None, None), Some("server")).unwrap();
    assert_eq!(validated.token, "server");
}

#[test]
fn standalone_resolve_token_prefers_request_over_server() {
    assert_eq!(resolve_token(Some("request"), Some("server")).as_deref(), Some("request"));
    assert_eq!(resolve_token(None, Some("server")).as_deref(), Some("server"));
    assert_eq!(resolve_token(Some(""), Some("server")).as_deref(), Some("server"));
}
