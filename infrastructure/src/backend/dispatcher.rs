//! reqwest-backed request dispatcher.

use super::protocol;
use async_trait::async_trait;
use genie_application::{NetworkError, RequestDispatcher};
use genie_domain::{DispatchRequest, RawResponse};
use tracing::{debug, trace};

/// Sends requests to `{base_url}{endpoint}` as JSON POSTs.
///
/// No client timeout is configured; a request waits as long as the backend
/// does.
pub struct HttpRequestDispatcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRequestDispatcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &DispatchRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint())
    }
}

#[async_trait]
impl RequestDispatcher for HttpRequestDispatcher {
    async fn send(&self, request: &DispatchRequest) -> Result<RawResponse, NetworkError> {
        let url = self.url_for(request);
        let body = protocol::encode(request).map_err(NetworkError::transport)?;
        debug!(url = %url, "POST");
        trace!(body = %body, "Request body");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(NetworkError::transport)?;

        let status = response.status();
        let text = response.text().await.map_err(NetworkError::transport)?;
        if !status.is_success() {
            return Err(NetworkError::status(status.as_u16(), &text));
        }
        trace!(body = %text, "Response body");

        protocol::decode(request, &text).map_err(NetworkError::malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_domain::{ArtifactType, Prompt};

    #[test]
    fn test_url_joins_endpoint() {
        let dispatcher = HttpRequestDispatcher::new("http://localhost:8000/");
        assert_eq!(dispatcher.base_url(), "http://localhost:8000");
        let request = DispatchRequest::check_errors("x", ArtifactType::Terraform);
        assert_eq!(
            dispatcher.url_for(&request),
            "http://localhost:8000/check-error"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) is not expected to be listening on loopback.
        let dispatcher = HttpRequestDispatcher::new("http://127.0.0.1:9");
        let request =
            DispatchRequest::command(&Prompt::try_new("nginx").unwrap(), ArtifactType::Kubernetes);
        let err = dispatcher.send(&request).await.unwrap_err();
        assert!(err.message().starts_with("request failed"));
    }
}
