//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the personnel API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    photo_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            photo_url: config.photo_url.clone(),
        }
    }

    /// Build a full URL for a resource path
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Display URL for an employee photo filename
    pub fn photo_display_url(&self, filename: &str) -> String {
        format!("{}{}", self.photo_url, filename)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self.client.put(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    ///
    /// The backend answers with 204 No Content or a JSON body; both
    /// count as success and any body is discarded.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        let response = Self::check_status(response).await?;
        // Drain whatever body may be present.
        let _ = response.text().await;
        Ok(())
    }

    /// Upload a file as multipart form data
    ///
    /// Returns the stored filename. The backend serializes the bare
    /// filename, so surrounding JSON quotes are stripped if present.
    pub async fn post_file(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<String> {
        let url = self.url(path);
        tracing::debug!(%url, file_name, "POST multipart");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let response = Self::check_status(response).await?;

        let text = response.text().await?;
        let stored = text.trim().trim_matches('"').to_string();
        if stored.is_empty() {
            return Err(ClientError::InvalidResponse(
                "Empty upload response".to_string(),
            ));
        }
        Ok(stored)
    }

    /// Map a non-success status to a client error
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        tracing::warn!(%status, body = %text, "Request failed");
        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
            _ => Err(ClientError::Internal(text)),
        }
    }

    /// Handle the HTTP response, decoding a JSON body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }
}
