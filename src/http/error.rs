use std::fmt;

/// Failure modes of a single GET-and-decode round trip.
///
/// Wrapped into an `anyhow::Error` by callers; use `downcast_ref` to tell
/// the cases apart.
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response (connection, DNS, TLS)
    Request(reqwest::Error),
    /// The server answered with anything other than 200 OK
    UnexpectedStatus(u16),
    /// The response body could not be read to the end
    ReadBody(reqwest::Error),
    /// The body was read but is not the JSON we expected
    Decode(serde_json::Error),
}

impl FetchError {
    /// The HTTP status code, if the failure was a non-200 response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::UnexpectedStatus(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "request failed: {}", e),
            FetchError::UnexpectedStatus(code) => write!(f, "unexpected status code: {}", code),
            FetchError::ReadBody(e) => write!(f, "failed to read response body: {}", e),
            FetchError::Decode(e) => write!(f, "failed to decode response body: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Request(e) | FetchError::ReadBody(e) => Some(e),
            FetchError::Decode(e) => Some(e),
            FetchError::UnexpectedStatus(_) => None,
        }
    }
}
