use anyhow::{Context, Result};
use log::debug;
use regex::Regex;

use crate::github::{Release, ReleaseFetcher};

use super::version::{Version, VersionOrder};

/// Number of releases requested from upstream, whatever the limit.
pub const RELEASE_PAGE_SIZE: u32 = 30;

/// A name qualifies when it ends in at least three dot-separated numbers.
/// Only ASCII digits count, matching [`Version::numeric_parts`].
const VERSION_SUFFIX_PATTERN: &str = r"[0-9]+(\.[0-9]+){2,}$";

/// Returns the names of the latest releases, limited by `limit`.
///
/// Names without a trailing `N.N.N` version (release candidates, betas,
/// two-component versions) are dropped, the rest are sorted descending
/// under `order`.
pub async fn latest_release_names<F>(
    fetcher: &F,
    limit: usize,
    order: VersionOrder,
) -> Result<Vec<Version>>
where
    F: ReleaseFetcher + ?Sized,
{
    let releases = fetcher
        .latest_releases(RELEASE_PAGE_SIZE)
        .await
        .context("failed to get latest release names")?;

    rank_release_names(releases, limit, order).context("failed to get latest release names")
}

/// Filter, sort and truncate already fetched releases.
pub fn rank_release_names(
    releases: Vec<Release>,
    limit: usize,
    order: VersionOrder,
) -> Result<Vec<Version>> {
    let pattern = Regex::new(VERSION_SUFFIX_PATTERN).context("failed to compile version pattern")?;

    let total = releases.len();
    let mut names: Vec<Version> = releases
        .into_iter()
        .map(|release| release.name)
        .filter(|name| pattern.is_match(name.as_str()))
        .collect();

    names.sort_by(|a, b| order.compare(b, a));
    names.truncate(limit);

    debug!(
        "Kept {} of {} release names (limit {}, {} order)",
        names.len(),
        total,
        limit,
        order
    );
    Ok(names)
}
