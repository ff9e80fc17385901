//! Version tokens and the orderings used to rank them.
//!
//! A [`Version`] is the display name of a release. It is not parsed up
//! front: the default ordering is plain string ordering, which puts
//! `"9.0.0"` above `"10.0.0"`. [`VersionOrder::Semantic`] compares the
//! trailing dotted numeric suffix instead.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Name of a release, treated as a version string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub struct Version(String);

impl Version {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric components of the trailing `N(.N)*` suffix.
    ///
    /// `"v1.14.2"` yields `[1, 14, 2]`, `"1.0.0-rc1"` yields `[1]` (the `1`
    /// of `rc1`), and a name without trailing digits yields `None`. Components
    /// too large for a `u64` also yield `None`.
    pub fn numeric_parts(&self) -> Option<Vec<u64>> {
        let bytes = self.0.as_bytes();
        let mut end = bytes.len();
        let mut parts = Vec::new();

        loop {
            let mut start = end;
            while start > 0 && bytes[start - 1].is_ascii_digit() {
                start -= 1;
            }
            if start == end {
                // A dot we consumed was not preceded by digits
                break;
            }
            parts.push(self.0[start..end].parse::<u64>().ok()?);

            if start > 0 && bytes[start - 1] == b'.' {
                end = start - 1;
            } else {
                break;
            }
        }

        if parts.is_empty() {
            return None;
        }
        parts.reverse();
        Some(parts)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Version {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<Option<String>> for Version {
    fn from(name: Option<String>) -> Self {
        Self(name.unwrap_or_default())
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.0
    }
}

/// How release names are ranked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum VersionOrder {
    /// Plain string comparison (`"9.0.0"` ranks above `"10.0.0"`)
    #[default]
    Lexical,
    /// Compare the trailing numeric components, falling back to string order
    Semantic,
}

impl VersionOrder {
    /// Ascending comparison of two versions under this ordering.
    pub fn compare(self, a: &Version, b: &Version) -> Ordering {
        match self {
            VersionOrder::Lexical => a.cmp(b),
            VersionOrder::Semantic => match (a.numeric_parts(), b.numeric_parts()) {
                (Some(pa), Some(pb)) => pa.cmp(&pb).then_with(|| a.cmp(b)),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => a.cmp(b),
            },
        }
    }
}

impl fmt::Display for VersionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionOrder::Lexical => write!(f, "lexical"),
            VersionOrder::Semantic => write!(f, "semantic"),
        }
    }
}
