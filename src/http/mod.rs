//! Plain HTTP plumbing shared by the release fetcher and the tree walker.
//!
//! Requests are sent exactly once; there is no retry layer.

mod client;
mod error;

pub use client::HttpClient;
pub use error::FetchError;
