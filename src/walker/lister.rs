use anyhow::{Context, Result};
use log::debug;

use super::collector::FileNameCollector;
use super::{RepoFile, TreeWalker, WalkRequest};

/// Branch every listing is taken from.
pub const DEFAULT_BRANCH: &str = "master";

/// Outcome of a listing: the names collected, plus the walk error if any.
///
/// A walk that fails partway still carries the names reported before the
/// failure.
#[derive(Debug)]
pub struct FileNames {
    pub names: Vec<String>,
    pub error: Option<anyhow::Error>,
}

impl FileNames {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Collapse into a single result, dropping partial names on failure.
    pub fn into_result(self) -> Result<Vec<String>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.names),
        }
    }
}

/// Lists the names of the files under `path` in `owner/repo` on the
/// `master` branch.
pub async fn get_file_names<W>(walker: &W, owner: &str, repo: &str, path: &str) -> FileNames
where
    W: TreeWalker + ?Sized,
{
    let request = WalkRequest {
        owner: owner.to_string(),
        repo: repo.to_string(),
        branch: DEFAULT_BRANCH.to_string(),
        root: path.to_string(),
    };

    let collector = FileNameCollector::new();
    let on_file = |file: &RepoFile| collector.push(&file.name);

    let error = walker
        .walk(&request, &on_file)
        .await
        .with_context(|| format!("failed to walk {}/{}/{}", owner, repo, path))
        .err();

    let names = collector.into_names();
    debug!(
        "Collected {} file names from {}/{}/{}",
        names.len(),
        owner,
        repo,
        path
    );

    FileNames { names, error }
}
