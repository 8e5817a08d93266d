//! Raw GraphQL query text. Kept as plain `const` strings rather than a
//! macro-generated client (`graphql_client` et al.) — two fixed operations
//! do not earn the extra dependency and codegen step.

pub const LIST_BRANCHES: &str = "
query($owner: String!, $name: String!, $first: Int!) {
    repository(owner: $owner, name: $name) {
        refs(refPrefix: \"refs/heads/\", first: $first) {
            nodes {
                name
                target {
                    oid
                }
            }
        }
    }
}";

pub const COMMIT_HISTORY: &str = "
query($owner: String!, $name: String!, $oid: GitObjectID!, $first: Int!) {
    repository(owner: $owner, name: $name) {
        object(oid: $oid) {
            ... on Commit {
                history(first: $first) {
                    nodes {
                        oid
                        messageHeadline
                        messageBody
                        committedDate
                        additions
                        deletions
                        author {
                            name
                            email
                            user {
                                login
                                avatarUrl
                            }
                        }
                        parents(first: 10) {
                            nodes {
                                oid
                            }
                        }
                        statusCheckRollup {
                            state
                        }
                    }
                }
            }
        }
    }
}";
