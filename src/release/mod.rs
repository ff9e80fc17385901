//! Release name filtering and ranking.

mod ranker;
mod version;

pub use ranker::{RELEASE_PAGE_SIZE, latest_release_names, rank_release_names};
pub use version::{Version, VersionOrder};
