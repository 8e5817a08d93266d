mod client;
mod dto;
mod queries;

pub use client::GitHubClient;
