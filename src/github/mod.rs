//! GitHub release fetching for a single upstream repository.

mod client;
mod repo;
mod types;

pub use client::{GitHub, ReleaseFetcher, get_latest_releases};
#[cfg(test)]
pub use client::MockReleaseFetcher;
pub use repo::RepoId;
pub use types::{Asset, Release};
