//! Read-only queries against a GitHub-hosted project: its recent releases and the
//! files under a repository directory.

pub mod config;
pub mod github;
pub mod http;
pub mod release;
pub mod walker;

pub use config::Config;
pub use github::{Asset, GitHub, Release, ReleaseFetcher, RepoId, get_latest_releases};
pub use release::{Version, VersionOrder, latest_release_names};
pub use walker::{FileNames, GitHubWalker, TreeWalker, WalkRequest, get_file_names};
