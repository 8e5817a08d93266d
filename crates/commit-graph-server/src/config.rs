use std::env;

/// Everything the server needs that isn't carried on a per-request basis.
/// Read from environment variables only — no config file format.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub github_graphql_endpoint: String,
    /// Server-wide fallback token, used when a request doesn't carry its own.
    pub github_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);
        let github_graphql_endpoint =
            env::var("GITHUB_GRAPHQL_ENDPOINT").unwrap_or_else(|_| "https://api.github.com/graphql".to_string());
        let github_token = env::var("GITHUB_TOKEN").ok();

        Self {
            port,
            github_graphql_endpoint,
            github_token,
        }
    }
}
