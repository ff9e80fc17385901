//! Single-shot JSON GET client.

use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::error::FetchError;

/// Thin wrapper over a reqwest `Client` that enforces the
/// status → read → decode sequence used by every API call here.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request with query parameters and decodes the JSON body.
    ///
    /// Anything but `200 OK` is rejected before the body is touched. The body
    /// is read in full and only then decoded, so a truncated transfer shows up
    /// as [`FetchError::ReadBody`] rather than a decode error.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::ReadBody)?;
        debug!("Read {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(FetchError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct TestResponse {
        name: String,
        value: i32,
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "test", "value": 42}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: TestResponse = client
            .get_json(&format!("{}/test", url), &[])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            result,
            TestResponse {
                name: "test".to_string(),
                value: 42
            }
        );
    }

    #[tokio::test]
    async fn test_get_json_with_query() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test?per_page=10&ref=master")
            .with_status(200)
            .with_body(r#"["item1", "item2"]"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Vec<String> = client
            .get_json(
                &format!("{}/test", url),
                &[("per_page", "10"), ("ref", "master")],
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, vec!["item1", "item2"]);
    }

    #[tokio::test]
    async fn test_get_json_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Result<serde_json::Value, _> =
            client.get_json(&format!("{}/test", url), &[]).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::UnexpectedStatus(404))));
    }

    #[tokio::test]
    async fn test_get_json_rejects_non_200_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(202)
            .with_body("[]")
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Result<Vec<String>, _> = client.get_json(&format!("{}/test", url), &[]).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::UnexpectedStatus(202))));
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_body("{not valid}")
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Result<TestResponse, _> = client.get_json(&format!("{}/test", url), &[]).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_get_json_connection_refused() {
        // Bind then drop a listener to get a port nobody is serving on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = HttpClient::new(Client::new());
        let result: Result<serde_json::Value, _> = client
            .get_json(&format!("http://127.0.0.1:{}/test", port), &[])
            .await;

        assert!(matches!(result, Err(FetchError::Request(_))));
    }
}
