//! Repository tree walking and file name listing.
//!
//! The walk itself sits behind the [`TreeWalker`] trait so listing can be
//! exercised against a fake walker. [`GitHubWalker`] is the implementation
//! backed by the GitHub contents API.

mod collector;
mod github;
mod lister;

use anyhow::Result;
use async_trait::async_trait;

pub use collector::FileNameCollector;
pub use github::GitHubWalker;
pub use lister::{DEFAULT_BRANCH, FileNames, get_file_names};

/// Per-file callback registered with a walk. May be invoked from several
/// tasks at once.
pub type FileCallback<'a> = dyn Fn(&RepoFile) + Send + Sync + 'a;

/// What to walk: a root path inside one branch of one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkRequest {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Path inside the repository. A trailing `/**` walks subdirectories too.
    pub root: String,
}

/// A file reported by a walk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoFile {
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    pub download_url: Option<String>,
}

/// Traversal of a remote repository tree.
#[async_trait]
pub trait TreeWalker: Send + Sync {
    /// Walk `request`, calling `on_file` once per discovered file.
    ///
    /// Returns the first traversal failure. Callbacks that already fired
    /// before the failure are not undone.
    async fn walk(&self, request: &WalkRequest, on_file: &FileCallback<'_>) -> Result<()>;
}
