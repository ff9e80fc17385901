use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::{Config, DEFAULT_API_URL};
use crate::http::HttpClient;
use crate::release::{Version, VersionOrder, latest_release_names};

use super::repo::RepoId;
use super::types::Release;

/// Source of the most recent releases of one upstream repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseFetcher: Send + Sync {
    /// Fetch the `count` most recent releases, newest first as GitHub orders them.
    async fn latest_releases(&self, count: u32) -> Result<Vec<Release>>;
}

/// Release client bound to a single upstream repository.
pub struct GitHub {
    http_client: HttpClient,
    api_url: String,
    repo: RepoId,
    order: VersionOrder,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>, repo: RepoId) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client: HttpClient::new(client),
            api_url,
            repo,
            order: VersionOrder::default(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = config.client()?;
        Ok(Self::new(client, Some(config.api_url.clone()), config.repo.clone()).with_order(config.order))
    }

    pub fn with_order(mut self, order: VersionOrder) -> Self {
        self.order = order;
        self
    }

    /// Names of the newest `limit` releases whose name ends in a dotted
    /// numeric version, ranked with this client's [`VersionOrder`].
    pub async fn latest_release_names(&self, limit: usize) -> Result<Vec<Version>> {
        latest_release_names(self, limit, self.order).await
    }

    #[tracing::instrument(skip(http_client, api_url))]
    pub async fn fetch_releases(
        http_client: &HttpClient,
        api_url: &str,
        repo: &RepoId,
        count: u32,
    ) -> Result<Vec<Release>> {
        let url = format!("{}/repos/{}/{}/releases", api_url, repo.owner, repo.repo);
        debug!("Fetching {} releases from {}...", count, url);

        let releases: Vec<Release> = http_client
            .get_json(&url, &[("per_page", &count.to_string())])
            .await
            .context("failed to get latest releases")?;

        debug!("Fetched {} releases of {}", releases.len(), repo);
        Ok(releases)
    }
}

#[async_trait]
impl ReleaseFetcher for GitHub {
    #[tracing::instrument(skip(self))]
    async fn latest_releases(&self, count: u32) -> Result<Vec<Release>> {
        GitHub::fetch_releases(&self.http_client, &self.api_url, &self.repo, count).await
    }
}

/// Fetch the `count` most recent releases of the default upstream
/// repository from the public GitHub API.
pub async fn get_latest_releases(count: u32) -> Result<Vec<Release>> {
    GitHub::from_config(&Config::default())?
        .latest_releases(count)
        .await
}
