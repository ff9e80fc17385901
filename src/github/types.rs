use serde::{Deserialize, Serialize};

use crate::release::Version;

/// A downloadable artifact attached to a release.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(default)]
pub struct Asset {
    pub name: String,
    pub state: String,
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
}

/// Represents a GitHub release
///
/// Fields missing from the payload decode to their defaults; a `null` name
/// decodes to an empty [`Version`].
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(default)]
pub struct Release {
    pub id: i64,
    pub tag_name: String,
    pub name: Version,
    pub draft: bool,
    pub assets: Vec<Asset>,
}
