use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;

use crate::github::RepoId;
use crate::release::VersionOrder;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OWNER: &str = "cilium";
pub const DEFAULT_REPO: &str = "cilium";
pub const DEFAULT_CONCURRENCY: usize = 4;

const USER_AGENT: &str = concat!("cilium-releases/", env!("CILIUM_RELEASES_VERSION"));

/// Settings shared by the release client and the tree walker.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    /// Upstream repository whose releases are fetched
    pub repo: RepoId,
    pub order: VersionOrder,
    /// Subdirectories listed at once during a recursive walk
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            repo: RepoId::new(DEFAULT_OWNER, DEFAULT_REPO),
            order: VersionOrder::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    pub fn new(api_url: Option<String>, repo: Option<RepoId>) -> Self {
        let defaults = Self::default();
        let api_url = api_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);
        Self {
            api_url,
            repo: repo.unwrap_or(defaults.repo),
            ..defaults
        }
    }

    /// Build the HTTP client. Requests go out unauthenticated.
    pub fn client(&self) -> Result<Client> {
        debug!("Building HTTP client for {} ({})", self.api_url, USER_AGENT);
        Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")
    }
}
