//! Tree walker backed by the GitHub contents API.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use futures_util::{FutureExt, TryStreamExt, stream};
use log::debug;
use reqwest::{Client, Url};
use tokio::sync::Semaphore;

use crate::config::{Config, DEFAULT_API_URL, DEFAULT_CONCURRENCY};
use crate::http::HttpClient;

use super::{FileCallback, RepoFile, TreeWalker, WalkRequest};

/// GitHub contents API response types (internal).
mod api {
    use serde::Deserialize;

    /// A directory answers with a listing, a file path with a single entry.
    #[derive(Deserialize, Debug)]
    #[serde(untagged)]
    pub enum Contents {
        Listing(Vec<Entry>),
        Single(Entry),
    }

    #[derive(Deserialize, Debug)]
    pub struct Entry {
        pub name: String,
        pub path: String,
        #[serde(default)]
        pub sha: String,
        #[serde(default)]
        pub size: u64,
        #[serde(rename = "type")]
        pub kind: EntryKind,
        pub download_url: Option<String>,
    }

    #[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
    #[serde(rename_all = "lowercase")]
    pub enum EntryKind {
        File,
        Dir,
        Symlink,
        Submodule,
        #[serde(other)]
        Other,
    }
}

/// Walks a repository directory through `GET /repos/{owner}/{repo}/contents/{path}`.
pub struct GitHubWalker {
    http_client: HttpClient,
    api_url: String,
    concurrency: usize,
}

impl GitHubWalker {
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client: HttpClient::new(client),
            api_url,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = config.client()?;
        Ok(Self::new(client, Some(config.api_url.clone())).with_concurrency(config.concurrency))
    }

    /// Maximum number of directory listings in flight at once, across the whole walk.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    fn walk_dir<'a>(
        &'a self,
        request: &'a WalkRequest,
        path: String,
        recursive: bool,
        listings: &'a Semaphore,
        on_file: &'a FileCallback<'a>,
    ) -> BoxFuture<'a, Result<()>> {
        async move {
            let url = contents_url(&self.api_url, request, &path)?;

            // The permit covers the listing only, never the recursion below
            let contents: api::Contents = {
                let _permit = listings.acquire().await.context("listing limit closed")?;
                debug!("Listing {} at {}...", url, request.branch);
                self.http_client
                    .get_json(url.as_str(), &[("ref", &request.branch)])
                    .await
                    .with_context(|| format!("failed to list '{}'", path))?
            };

            let entries = match contents {
                api::Contents::Listing(entries) => entries,
                api::Contents::Single(entry) => vec![entry],
            };

            let mut subdirs = Vec::new();
            for entry in entries {
                match entry.kind {
                    api::EntryKind::File => on_file(&RepoFile {
                        name: entry.name,
                        path: entry.path,
                        sha: entry.sha,
                        size: entry.size,
                        download_url: entry.download_url,
                    }),
                    api::EntryKind::Dir if recursive => subdirs.push(entry.path),
                    kind => debug!("Skipping {:?} entry {}", kind, entry.path),
                }
            }

            stream::iter(subdirs.into_iter().map(Ok::<String, anyhow::Error>))
                .try_for_each_concurrent(None, |dir| {
                    self.walk_dir(request, dir, recursive, listings, on_file)
                })
                .await
        }
        .boxed()
    }
}

#[async_trait]
impl TreeWalker for GitHubWalker {
    #[tracing::instrument(skip(self, on_file))]
    async fn walk(&self, request: &WalkRequest, on_file: &FileCallback<'_>) -> Result<()> {
        let (root, recursive) = split_root(&request.root);
        let listings = Semaphore::new(self.concurrency);
        self.walk_dir(request, root, recursive, &listings, on_file).await
    }
}

/// Strip slashes and a trailing `**` marker from a walk root.
fn split_root(root: &str) -> (String, bool) {
    let trimmed = root.trim_matches('/');
    if trimmed == "**" {
        return (String::new(), true);
    }
    match trimmed.strip_suffix("/**") {
        Some(dir) => (dir.trim_end_matches('/').to_string(), true),
        None => (trimmed.to_string(), false),
    }
}

/// Contents endpoint for `path`, each segment percent-encoded.
fn contents_url(api_url: &str, request: &WalkRequest, path: &str) -> Result<Url> {
    let mut url = Url::parse(api_url).with_context(|| format!("invalid API URL '{}'", api_url))?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("API URL '{}' cannot take a path", api_url))?
        .pop_if_empty()
        .extend(["repos", request.owner.as_str(), request.repo.as_str(), "contents"])
        .extend(path.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
}
